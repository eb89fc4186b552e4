use std::cmp::Ordering;

use log::{trace, warn};

use crate::data::{Hull, Point};
use crate::{Orientation, PolygonScalar};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All results with three or more vertices are valid convex polygons.
//    No points are outside the resulting hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] (Jarvis march) algorithm for finding the smallest convex
/// polygon which contains all the given points.
///
/// The walk starts at the leftmost point (lowest y among ties) and repeatedly picks
/// the point that leaves every other point on its left. Among colinear candidates
/// the farthest one wins, so points in the middle of a hull edge are skipped.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Inputs with fewer than three points are returned unchanged.
///
/// # Time complexity
/// $O(n h)$ where h is the number of points on the convex hull.
///
/// # Examples
///
/// ```rust
/// # use hullsuite::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hullsuite::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([2, 1]),
///   Point::new([2, 5]),
/// ];
/// let hull = convex_hull(pts);
/// assert_eq!(hull.points(), &[Point::new([0, 0]), Point::new([4, 0]), Point::new([2, 5])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: PolygonScalar,
{
  let n = pts.len();
  if n < 3 {
    return Hull::new_unchecked(pts);
  }
  let leftmost = leftmost_point_index(&pts);

  let mut hull: Vec<Point<T>> = Vec::with_capacity(n);
  let mut p = leftmost;

  loop {
    hull.push(pts[p].clone());
    let mut q = (p + 1) % n;

    for i in 0..n {
      if wraps_past(&pts[p], &pts[q], &pts[i]) {
        q = i;
      }
    }
    trace!("gift wrapping: {:?} -> {:?}", pts[p], pts[q]);

    if pts[q] == pts[leftmost] {
      break;
    }
    if hull.len() == n {
      warn!("gift wrapping did not close after {} steps", n);
      break;
    }
    p = q;
  }

  Hull::new_unchecked(hull)
}

/// True if `candidate` is a better next hull vertex after `from` than `current`.
///
/// `candidate` wins when it lies to the right of `from -> current`, or when it is
/// colinear with that line and farther from `from`.
pub(crate) fn wraps_past<T>(from: &Point<T>, current: &Point<T>, candidate: &Point<T>) -> bool
where
  T: PolygonScalar,
{
  match Point::orient(from, candidate, current) {
    Orientation::CounterClockWise => true,
    Orientation::CoLinear => from.cmp_distance_to(candidate, current) == Ordering::Greater,
    Orientation::ClockWise => false,
  }
}

// Index of the leftmost point, lowest y breaking ties. Earlier points win exact
// duplicates.
// O(n)
pub(crate) fn leftmost_point_index<T>(pts: &[Point<T>]) -> usize
where
  T: PolygonScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| a.lexicographic_cmp(b))
    .map_or(0, |(index, _)| index)
}
