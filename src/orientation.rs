use std::cmp::Ordering;

use num_traits::Zero;

use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// This is the sign of [`Orientation::determinant`]. Every algorithm in the crate
  /// goes through this function, so they all agree on what counts as a left turn.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullsuite::data::Point;
  /// # use hullsuite::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    match Orientation::determinant(p1, p2, p3).partial_cmp(&Zero::zero()) {
      Some(Ordering::Greater) => Orientation::CounterClockWise,
      Some(Ordering::Less) => Orientation::ClockWise,
      _ => Orientation::CoLinear,
    }
  }

  /// Z-component of the cross product `(p2 - p1) x (p3 - p1)`.
  ///
  /// Positive for a counter-clockwise (left) turn, negative for a clockwise
  /// (right) turn and zero when the points are colinear. The magnitude is twice
  /// the area of the triangle `p1 p2 p3`.
  ///
  /// Panics on `i64` coordinates beyond `±2^61` when overflow checks are enabled.
  ///
  /// ```rust
  /// # use hullsuite::data::Point;
  /// # use hullsuite::Orientation;
  /// let (p1, p2, p3) = (Point::new([0i32, 0]), Point::new([4, 0]), Point::new([0, 3]));
  /// // i32 coordinates are multiplied as i128.
  /// assert_eq!(Orientation::determinant(&p1, &p2, &p3), 12i128);
  /// ```
  pub fn determinant<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> T::Extended
  where
    T: PolygonScalar,
  {
    let [x1, y1] = [p1[0].extend(), p1[1].extend()];
    let ux = p2[0].extend() - x1.clone();
    let uy = p2[1].extend() - y1.clone();
    let vx = p3[0].extend() - x1;
    let vy = p3[1].extend() - y1;
    ux * vy - uy * vx
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }
}

/// True iff `q` lies inside the axis aligned bounding box of `p` and `r`.
///
/// Only meaningful once `p`, `q` and `r` are known to be colinear. Then it tells
/// whether `q` is on the closed segment `p r`.
pub fn segment_contains<T>(p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> bool
where
  T: PartialOrd,
{
  between(&p[0], &q[0], &r[0]) && between(&p[1], &q[1], &r[1])
}

fn between<T: PartialOrd>(a: &T, b: &T, c: &T) -> bool {
  (a <= b && b <= c) || (c <= b && b <= a)
}
