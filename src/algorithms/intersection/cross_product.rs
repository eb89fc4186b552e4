use crate::data::{LineSegment, Point};
use crate::{segment_contains, PolygonScalar};

// Properties:
//    Symmetric in the two segments and in the endpoint order of each segment.
//    Touching and colinear overlapping segments intersect.
/// True if two closed segments share at least one point.
///
/// Each endpoint is classified against the line through the other segment. The
/// segments cross when both pairs of endpoints straddle the other line. When an
/// endpoint is colinear with the other segment, the segments touch iff that
/// endpoint lies on the other segment.
///
/// # Examples
///
/// ```rust
/// # use hullsuite::algorithms::intersection::cross_product::intersects;
/// # use hullsuite::data::LineSegment;
/// let s1 = LineSegment::from((0, 0)..=(2, 2));
/// let s2 = LineSegment::from((0, 2)..=(2, 0));
/// assert!(intersects(&s1, &s2));
///
/// // Same line, but with a gap between them.
/// let s3 = LineSegment::from((3, 3)..=(4, 4));
/// assert!(!intersects(&s1, &s3));
/// ```
pub fn intersects<T>(s1: &LineSegment<T>, s2: &LineSegment<T>) -> bool
where
  T: PolygonScalar,
{
  let (p1, q1) = (&s1.start, &s1.end);
  let (p2, q2) = (&s2.start, &s2.end);
  let o1 = Point::orient(p1, q1, p2);
  let o2 = Point::orient(p1, q1, q2);
  let o3 = Point::orient(p2, q2, p1);
  let o4 = Point::orient(p2, q2, q1);

  // General case: each segment straddles the line through the other.
  if o1 != o2 && o3 != o4 {
    return true;
  }

  (o1.is_colinear() && segment_contains(p1, p2, q1))
    || (o2.is_colinear() && segment_contains(p1, q2, q1))
    || (o3.is_colinear() && segment_contains(p2, p1, q2))
    || (o4.is_colinear() && segment_contains(p2, q1, q2))
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn crossing_diagonals() {
    let s1 = LineSegment::from((0, 0)..=(4, 4));
    let s2 = LineSegment::from((0, 4)..=(4, 0));
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn colinear_disjoint() {
    let s1 = LineSegment::from((0, 0)..=(1, 1));
    let s2 = LineSegment::from((2, 2)..=(3, 3));
    assert!(!intersects(&s1, &s2));
  }

  #[test]
  fn colinear_overlap() {
    let s1 = LineSegment::from((0, 0)..=(2, 0));
    let s2 = LineSegment::from((1, 0)..=(3, 0));
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn t_junction() {
    let s1 = LineSegment::from((0, 0)..=(4, 0));
    let s2 = LineSegment::from((2, 0)..=(2, 3));
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn shared_endpoint() {
    let s1 = LineSegment::from((0, 0)..=(2, 1));
    let s2 = LineSegment::from((2, 1)..=(5, -3));
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn parallel_disjoint() {
    let s1 = LineSegment::from((0, 0)..=(4, 0));
    let s2 = LineSegment::from((0, 1)..=(4, 1));
    assert!(!intersects(&s1, &s2));
  }

  #[test]
  fn near_miss() {
    // s2 would cross the line through s1 beyond its end.
    let s1 = LineSegment::from((0, 0)..=(2, 2));
    let s2 = LineSegment::from((3, 0)..=(3, 5));
    assert!(!intersects(&s1, &s2));
  }

  #[test]
  fn degenerate_segments() {
    let pt = LineSegment::from((1, 1)..=(1, 1));
    let s1 = LineSegment::from((0, 0)..=(2, 2));
    assert!(intersects(&pt, &s1));
    assert!(intersects(&pt, &pt));
    let other = LineSegment::from((3, 1)..=(3, 1));
    assert!(!intersects(&pt, &other));
  }

  #[test]
  fn floating_point_segments() {
    let s1 = LineSegment::from((0.0, 0.0)..=(1.0, 1.0));
    let s2 = LineSegment::from((0.0, 1.0)..=(1.0, 0.0));
    assert!(intersects(&s1, &s2));
  }

  #[proptest]
  fn symmetric(
    #[strategy(grid_segment())] s1: LineSegment<i32>,
    #[strategy(grid_segment())] s2: LineSegment<i32>,
  ) {
    prop_assert_eq!(intersects(&s1, &s2), intersects(&s2, &s1));
    prop_assert_eq!(intersects(&s1, &s2), intersects(&s1.reversed(), &s2));
  }

  #[proptest]
  fn endpoints_touch(
    #[strategy(grid_segment())] s1: LineSegment<i32>,
    #[strategy(grid_point())] pt: Point<i32>,
  ) {
    let s2 = LineSegment::new(s1.end, pt);
    prop_assert!(intersects(&s1, &s2));
  }
}
