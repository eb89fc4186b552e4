use log::trace;

use crate::data::{Hull, Point};
use crate::{segment_contains, Orientation, PolygonScalar};

// Properties:
//    No panics.
//    Output is the reference every other hull algorithm is tested against.
/// $O(n^3)$ Convex hull of a set of points.
///
/// A point `a` is a hull vertex iff there is another point `b` such that every
/// remaining point lies strictly to the left of the directed line `a -> b` or on
/// the closed segment `a b`. The qualifying vertices are deduplicated and sorted by
/// their angle around the centroid of the vertices.
///
/// Inputs with fewer than three points are returned unchanged. A set where every
/// point is identical collapses to a single vertex.
///
/// # Examples
///
/// ```rust
/// # use hullsuite::algorithms::convex_hull::brute_force::convex_hull;
/// # use hullsuite::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([1, 0]),
///   Point::new([2, 0]),
/// ];
/// // The middle point is on the boundary but is not a vertex.
/// assert_eq!(convex_hull(pts).len(), 2);
/// ```
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: PolygonScalar,
{
  if pts.len() < 3 {
    return Hull::new_unchecked(pts);
  }

  let mut vertices: Vec<Point<T>> = Vec::new();
  for a in pts.iter() {
    if vertices.contains(a) {
      continue;
    }
    if let Some(b) = pts.iter().find(|b| *b != a && is_supporting(&pts, a, b)) {
      trace!("brute force: {:?} supported by edge towards {:?}", a, b);
      vertices.push(a.clone());
    }
  }

  if vertices.is_empty() {
    // Every point is identical.
    vertices.push(pts[0].clone());
  }
  sort_around_centroid(&mut vertices);
  Hull::new_unchecked(vertices)
}

// True if no point is to the right of `a -> b` and every point on the line lies
// between `a` and `b`.
fn is_supporting<T>(pts: &[Point<T>], a: &Point<T>, b: &Point<T>) -> bool
where
  T: PolygonScalar,
{
  pts
    .iter()
    .filter(|c| *c != a && *c != b)
    .all(|c| match Point::orient(a, b, c) {
      Orientation::CounterClockWise => true,
      Orientation::CoLinear => segment_contains(a, c, b),
      Orientation::ClockWise => false,
    })
}

fn sort_around_centroid<T>(vertices: &mut [Point<T>])
where
  T: PolygonScalar,
{
  if vertices.len() < 2 {
    return;
  }
  let n = vertices.len() as f64;
  let cx = vertices.iter().map(|pt| pt.x_coord().to_f64_lossy()).sum::<f64>() / n;
  let cy = vertices.iter().map(|pt| pt.y_coord().to_f64_lossy()).sum::<f64>() / n;
  let angle = |pt: &Point<T>| (pt.y_coord().to_f64_lossy() - cy).atan2(pt.x_coord().to_f64_lossy() - cx);
  vertices.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}
