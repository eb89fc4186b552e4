use std::ops::RangeInclusive;
use std::str::FromStr;

use super::Point;

use crate::algorithms::intersection::cross_product;
use crate::{segment_contains, Error, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Closed line segment between `start` and `end`.
///
/// The endpoint order is kept as given. None of the intersection tests depend
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment<T> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }

  #[must_use]
  pub fn reversed(self) -> LineSegment<T> {
    LineSegment {
      start: self.end,
      end: self.start,
    }
  }

  pub fn is_degenerate(&self) -> bool
  where
    T: PartialEq,
  {
    self.start == self.end
  }
}

impl<T> LineSegment<T>
where
  T: PolygonScalar,
{
  pub fn contains(&self, pt: &Point<T>) -> bool {
    Point::orient(&self.start, &self.end, pt).is_colinear()
      && segment_contains(&self.start, pt, &self.end)
  }

  /// True if the segments share at least one point.
  pub fn intersects(&self, other: &LineSegment<T>) -> bool {
    cross_product::intersects(self, other)
  }
}

impl<T> From<RangeInclusive<Point<T>>> for LineSegment<T> {
  fn from(range: RangeInclusive<Point<T>>) -> LineSegment<T> {
    let (start, end) = range.into_inner();
    LineSegment::new(start, end)
  }
}

impl<T> From<RangeInclusive<(T, T)>> for LineSegment<T> {
  fn from(range: RangeInclusive<(T, T)>) -> LineSegment<T> {
    let (start, end) = range.into_inner();
    LineSegment::new(start.into(), end.into())
  }
}

impl<T> From<(Point<T>, Point<T>)> for LineSegment<T> {
  fn from((start, end): (Point<T>, Point<T>)) -> LineSegment<T> {
    LineSegment::new(start, end)
  }
}

/// Parses `"x1,y1,x2,y2"`.
impl<T: FromStr> FromStr for LineSegment<T> {
  type Err = Error;
  fn from_str(text: &str) -> Result<LineSegment<T>, Error> {
    let coords = text
      .split(',')
      .map(|coord| coord.trim().parse::<T>())
      .collect::<Result<Vec<T>, _>>()
      .map_err(|_| Error::MalformedInput(text.to_owned()))?;
    match <[T; 4]>::try_from(coords) {
      Ok([x1, y1, x2, y2]) => Ok(LineSegment::new(
        Point::new([x1, y1]),
        Point::new([x2, y2]),
      )),
      Err(_) => Err(Error::MalformedInput(text.to_owned())),
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;

  use claims::{assert_err, assert_ok_eq};
  use test_strategy::proptest;

  //
  // P4  P2
  //
  // P1  P3  P5
  //
  static P1: Point<i32> = Point::new([0, 0]);
  static P2: Point<i32> = Point::new([1, 1]);
  static P3: Point<i32> = Point::new([1, 0]);
  static P4: Point<i32> = Point::new([0, 1]);
  static P5: Point<i32> = Point::new([2, 0]);

  #[test]
  fn contains_points() {
    let l1 = LineSegment::from(P1..=P5);
    assert!(l1.contains(&P1));
    assert!(l1.contains(&P3));
    assert!(l1.contains(&P5));
    assert!(!l1.contains(&P2));
    assert!(!l1.contains(&Point::new([3, 0])));
    assert!(!l1.contains(&Point::new([-1, 0])));
  }

  #[test]
  fn intersects_basic() {
    assert!(LineSegment::from(P1..=P2).intersects(&LineSegment::from(P3..=P4)));
    assert!(LineSegment::from(P1..=P3).intersects(&LineSegment::from(P3..=P2)));
    assert!(!LineSegment::from(P4..=P2).intersects(&LineSegment::from(P1..=P5)));
  }

  #[test]
  fn parse_segment() {
    assert_ok_eq!(
      "0,0,4,4".parse::<LineSegment<i32>>(),
      LineSegment::from((0, 0)..=(4, 4))
    );
    assert_ok_eq!(
      " 1.5, 2 ,3 ,-4".parse::<LineSegment<f64>>(),
      LineSegment::from((1.5, 2.0)..=(3.0, -4.0))
    );
    assert_err!("0,0,4".parse::<LineSegment<i32>>());
    assert_err!("0,0,4,4,5".parse::<LineSegment<i32>>());
    assert_eq!(
      "0,0,x,4".parse::<LineSegment<i32>>(),
      Err(Error::MalformedInput("0,0,x,4".to_owned()))
    );
  }

  #[test]
  fn degenerate_segments() {
    assert!(LineSegment::from(P2..=P2).is_degenerate());
    assert!(!LineSegment::from(P1..=P2).is_degenerate());
    assert!(LineSegment::from(P2..=P2).intersects(&LineSegment::from(P1..=Point::new([2, 2]))));
  }

  #[proptest]
  fn flip_intersects_prop(pts: [i8; 8]) {
    let [a, b, c, d, e, f, g, h] = pts;
    let l1 = LineSegment::from((a, b)..=(c, d));
    let l2 = LineSegment::from((e, f)..=(g, h));
    assert_eq!(l1.intersects(&l2), l2.intersects(&l1));
    assert_eq!(l1.intersects(&l2), l1.reversed().intersects(&l2));
  }

  #[proptest]
  fn endpoints_are_contained(pts: [i8; 4]) {
    let [a, b, c, d] = pts;
    let l1 = LineSegment::from((a, b)..=(c, d));
    assert!(l1.contains(&l1.start));
    assert!(l1.contains(&l1.end));
  }
}
