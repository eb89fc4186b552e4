use log::{debug, trace, warn};

use super::gift_wrapping::{leftmost_point_index, wraps_past};
use super::graham_scan;
use crate::data::{Hull, Point};
use crate::PolygonScalar;

// https://en.wikipedia.org/wiki/Chan%27s_algorithm

enum Walk<T> {
  Closed(Vec<Point<T>>),
  Open(Vec<Point<T>>),
}

/// Output-sensitive convex hull of a set of points.
///
/// [Chan's algorithm][wiki] with an initial group size of `n / 2`. See
/// [`convex_hull_with_group_size`].
///
/// # Examples
///
/// ```rust
/// # use hullsuite::algorithms::convex_hull::chan::convex_hull;
/// # use hullsuite::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
///   Point::new([2, 2]),
/// ];
/// assert_eq!(convex_hull(pts).len(), 4);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Chan%27s_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: PolygonScalar,
{
  let group_size = pts.len() / 2;
  convex_hull_with_group_size(pts, group_size)
}

// Properties:
//    No panics.
//    Terminates: the group size never exceeds n and a walk of n steps always closes.
//    Same vertices as gift wrapping, starting from the same point.
/// Chan's algorithm with a caller-supplied initial group size.
///
/// The points are split into groups of `group_size` and each group is reduced to
/// its [Graham scan](graham_scan::convex_hull) hull. A gift wrapping walk then
/// runs over the union of the sub-hull vertices for at most `group_size` steps.
/// If the walk has not returned to the leftmost point by then, the group size is
/// doubled and everything restarts.
///
/// Tangents are found with a linear scan over the sub-hull vertices.
///
/// `group_size` is clamped to `1..=n`. Inputs with fewer than three points are
/// returned unchanged.
pub fn convex_hull_with_group_size<T>(pts: Vec<Point<T>>, group_size: usize) -> Hull<T>
where
  T: PolygonScalar,
{
  let n = pts.len();
  if n < 3 {
    return Hull::new_unchecked(pts);
  }

  let mut m = group_size.clamp(1, n);
  loop {
    match wrap_groups(&pts, m) {
      Walk::Closed(hull) => return Hull::new_unchecked(hull),
      Walk::Open(partial) if m == n => {
        warn!("chan: walk did not close with group size {}", m);
        return Hull::new_unchecked(partial);
      }
      Walk::Open(_) => {
        let next = m.saturating_mul(2).min(n);
        debug!("chan: walk did not close in {} steps, retrying with group size {}", m, next);
        m = next;
      }
    }
  }
}

fn wrap_groups<T>(pts: &[Point<T>], m: usize) -> Walk<T>
where
  T: PolygonScalar,
{
  let sub_hulls: Vec<Hull<T>> = pts
    .chunks(m)
    .map(|group| graham_scan::convex_hull(group.to_vec()))
    .collect();
  trace!("chan: {} sub-hulls of at most {} points", sub_hulls.len(), m);

  let start = pts[leftmost_point_index(pts)].clone();
  let mut hull = vec![start.clone()];
  for _ in 0..m {
    let current = &hull[hull.len() - 1];
    match next_hull_point(&sub_hulls, current) {
      None => return Walk::Closed(hull),
      Some(next) if *next == start => return Walk::Closed(hull),
      Some(next) => {
        trace!("chan: {:?} -> {:?}", current, next);
        let next = next.clone();
        hull.push(next);
      }
    }
  }
  Walk::Open(hull)
}

// The sub-hull vertex that wraps past every other one when seen from `current`.
// None if every vertex coincides with `current`.
fn next_hull_point<'a, T>(sub_hulls: &'a [Hull<T>], current: &Point<T>) -> Option<&'a Point<T>>
where
  T: PolygonScalar,
{
  sub_hulls
    .iter()
    .flat_map(|sub_hull| sub_hull.iter())
    .filter(|pt| *pt != current)
    .fold(None, |best, candidate| match best {
      Some(best) if !wraps_past(current, best, candidate) => Some(best),
      _ => Some(candidate),
    })
}
