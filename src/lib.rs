#![doc(test(no_crate_inject))]
//! Planar convex hulls and line segment intersection.
//!
//! Five hull algorithms share a single contract (`Vec<Point<T>>` in, [`Hull`](data::Hull)
//! out) and three intersection tests share another (two
//! [`LineSegment`](data::LineSegment)s in, `bool` out). Callers either use the
//! modules under [`algorithms`] directly or pick one by name through
//! [`compute_hull`] and [`segments_intersect`].
//!
//! ```rust
//! # use hullsuite::compute_hull;
//! # use hullsuite::data::Point;
//! let points = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = compute_hull(points, "graham").unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
use num_traits::{NumOps, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod dispatch;
mod orientation;

pub use dispatch::{compute_hull, segments_intersect, HullAlgorithm, IntersectionMethod};
pub use orientation::{segment_contains, Orientation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Unknown algorithm or method name. Carries the rejected name.
  InvalidSelection(String),
  /// Coordinate text that could not be parsed.
  MalformedInput(String),
  /// A linear system with a zero determinant (parallel or colinear segments).
  NumericDegeneracy,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  ConvexViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidSelection(name) => write!(f, "Invalid selection: {:?}", name),
      Error::MalformedInput(text) => write!(f, "Malformed input: {:?}", text),
      Error::NumericDegeneracy => write!(f, "Singular system: segments are parallel or colinear"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type accepted by every algorithm in this crate.
///
/// Products of coordinate differences are computed in [`PolygonScalar::Extended`].
/// For fixed-precision integers this is a wider integer, so orientation tests on
/// `i8`, `i16` and `i32` never overflow. `i64` widens to `i128` and is exact while
/// every coordinate stays within `±2^61`. Beyond that the products may overflow,
/// which panics when overflow checks are enabled (the release and test profiles
/// of this crate enable them).
///
/// Floating point types are evaluated with plain IEEE arithmetic. Nothing is done
/// to make float predicates robust.
pub trait PolygonScalar: Debug + Clone + PartialOrd + TotalOrd {
  type Extended: Debug + Clone + PartialOrd + Zero + NumOps;

  fn extend(&self) -> Self::Extended;

  /// Approximate value, used where angles are needed.
  fn to_f64_lossy(&self) -> f64;
}

macro_rules! fixed_precision {
  ( $ty:ty, $long:ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl PolygonScalar for $ty {
      type Extended = $long;
      fn extend(&self) -> $long {
        <$long>::from(*self)
      }
      fn to_f64_lossy(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
      }
    }
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        type Extended = f64;
        fn extend(&self) -> f64 {
          f64::from(*self)
        }
        fn to_f64_lossy(&self) -> f64 {
          f64::from(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        type Extended = f64;
        fn extend(&self) -> f64 {
          f64::from(self.into_inner())
        }
        fn to_f64_lossy(&self) -> f64 {
          f64::from(self.into_inner())
        }
      }
    )*
  };
}

fixed_precision!(i8, i32);
fixed_precision!(i16, i64);
fixed_precision!(i32, i128);
fixed_precision!(i64, i128);
wrapped_floating_precision!(ordered_float::OrderedFloat<f32>);
wrapped_floating_precision!(ordered_float::OrderedFloat<f64>);
wrapped_floating_precision!(ordered_float::NotNan<f32>);
wrapped_floating_precision!(ordered_float::NotNan<f64>);
floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;
  use ordered_float::{NotNan, OrderedFloat};

  #[test]
  fn error_display() {
    assert_eq!(
      Error::InvalidSelection("quickest".to_owned()).to_string(),
      "Invalid selection: \"quickest\""
    );
    assert_eq!(Error::ConvexViolation.to_string(), "Convex violation");
  }

  #[test]
  fn widened_products_do_not_overflow() {
    let big = i32::MAX.extend() * i32::MIN.extend();
    assert_eq!(big, -(i128::from(i32::MAX) << 31));
    assert_eq!(i8::MIN.extend() * i8::MIN.extend(), 16384);
  }

  #[test]
  fn every_scalar_extends() {
    assert_eq!(i16::MIN.extend(), -32768i64);
    assert_eq!(i64::MAX.extend(), i128::from(i64::MAX));
    assert_eq!((-3i32).to_f64_lossy(), -3.0);
    assert_eq!(0.5f32.extend(), 0.5f64);
    assert_eq!(OrderedFloat(-4.0f64).extend(), -4.0);
    assert_eq!(NotNan::new(0.25f32).unwrap().extend(), 0.25);
  }

  #[test]
  fn total_ord_on_floats() {
    assert_eq!(TotalOrd::total_cmp(&1.0f64, &2.0), Ordering::Less);
    assert_eq!(
      TotalOrd::total_cmp(&(1.0f64, 3.0f64), &(1.0f64, 2.0f64)),
      Ordering::Greater
    );
    assert_eq!(OrderedFloat(2.5f32).extend(), 2.5);
    assert_eq!(NotNan::new(-1.5f64).unwrap().to_f64_lossy(), -1.5);
  }
}
