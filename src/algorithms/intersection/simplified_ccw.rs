use crate::data::{LineSegment, Point};
use crate::PolygonScalar;

fn ccw<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool
where
  T: PolygonScalar,
{
  Point::orient(a, b, c).is_ccw()
}

/// True if the two segments properly cross.
///
/// Only the boolean side of each endpoint is compared: `p1` and `q1` must be on
/// different sides of `p2 q2`, and `p2` and `q2` on different sides of `p1 q1`.
/// A colinear endpoint counts as being on the right.
///
/// # Limitations
///
/// Colinear and touching configurations are not handled. Overlapping colinear
/// segments are reported as disjoint, and whether an endpoint resting on the
/// other segment counts depends on which side the rest of the segment is on. Use
/// [the cross product test](super::cross_product::intersects) when those cases
/// matter.
///
/// ```rust
/// # use hullsuite::algorithms::intersection::simplified_ccw::intersects;
/// # use hullsuite::data::LineSegment;
/// let s1 = LineSegment::from((0, 0)..=(2, 0));
/// let s2 = LineSegment::from((1, 0)..=(3, 0));
/// // They overlap, but the colinear case is invisible to this test.
/// assert!(!intersects(&s1, &s2));
/// ```
pub fn intersects<T>(s1: &LineSegment<T>, s2: &LineSegment<T>) -> bool
where
  T: PolygonScalar,
{
  let (p1, q1) = (&s1.start, &s1.end);
  let (p2, q2) = (&s2.start, &s2.end);
  ccw(p1, p2, q2) != ccw(q1, p2, q2) && ccw(p1, q1, p2) != ccw(p1, q1, q2)
}
