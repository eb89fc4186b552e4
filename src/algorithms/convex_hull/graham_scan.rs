use crate::data::{Hull, Point};
use crate::{PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All results with three or more vertices are valid convex polygons.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// The lowest point (leftmost among ties) is the pivot. The remaining points are
/// sorted by polar angle around it, nearer points first on a shared ray, and then
/// pushed on a stack that pops every vertex that does not make a strict left turn.
/// Colinear points are eliminated.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Inputs with fewer than three points are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use hullsuite::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hullsuite::data::Point;
/// let pts = vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([2, 0])];
/// assert_eq!(convex_hull(pts).points(), &[Point::new([0, 0]), Point::new([2, 0])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Hull<T>
where
  T: PolygonScalar,
{
  let smallest = match smallest_point(&pts) {
    Some(smallest) if pts.len() >= 3 => smallest,
    _ => return Hull::new_unchecked(pts),
  };

  pts.sort_by(|a, b| {
    smallest
      .ccw_cmp_around(a, b)
      .then_with(|| smallest.cmp_distance_to(a, b))
  });
  pts.dedup();

  // Filter out points until all consecutive points are oriented counter-clockwise.
  let mut stack: Vec<Point<T>> = Vec::with_capacity(pts.len());
  for pt in pts {
    while let [.., p1, p2] = stack.as_slice() {
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }
  Hull::new_unchecked(stack)
}

// Find the lowest point, leftmost among ties.
// O(n)
fn smallest_point<T>(pts: &[Point<T>]) -> Option<Point<T>>
where
  T: PolygonScalar,
{
  pts
    .iter()
    .min_by(|a, b| {
      TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord()))
    })
    .cloned()
}
