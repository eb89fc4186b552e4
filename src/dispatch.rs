use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::algorithms::convex_hull::{
  brute_force, chan, gift_wrapping, graham_scan, quick_elimination,
};
use crate::algorithms::intersection::{cross_product, parametric, simplified_ccw};
use crate::data::{Hull, LineSegment, Point};
use crate::{Error, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// HullAlgorithm

/// Convex hull algorithms selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HullAlgorithm {
  BruteForce,
  JarvisMarch,
  GrahamScan,
  QuickElimination,
  Chan,
}

impl HullAlgorithm {
  pub const ALL: [HullAlgorithm; 5] = [
    HullAlgorithm::BruteForce,
    HullAlgorithm::JarvisMarch,
    HullAlgorithm::GrahamScan,
    HullAlgorithm::QuickElimination,
    HullAlgorithm::Chan,
  ];

  /// Name accepted by [`FromStr`].
  pub fn name(self) -> &'static str {
    match self {
      HullAlgorithm::BruteForce => "brute",
      HullAlgorithm::JarvisMarch => "jarvis",
      HullAlgorithm::GrahamScan => "graham",
      HullAlgorithm::QuickElimination => "quick",
      HullAlgorithm::Chan => "chan",
    }
  }

  pub fn strategy<T: PolygonScalar>(self) -> fn(Vec<Point<T>>) -> Hull<T> {
    match self {
      HullAlgorithm::BruteForce => brute_force::convex_hull::<T>,
      HullAlgorithm::JarvisMarch => gift_wrapping::convex_hull::<T>,
      HullAlgorithm::GrahamScan => graham_scan::convex_hull::<T>,
      HullAlgorithm::QuickElimination => quick_elimination::convex_hull::<T>,
      HullAlgorithm::Chan => chan::convex_hull::<T>,
    }
  }

  pub fn convex_hull<T: PolygonScalar>(self, points: Vec<Point<T>>) -> Hull<T> {
    debug!("convex hull of {} points with {}", points.len(), self);
    (self.strategy())(points)
  }
}

impl fmt::Display for HullAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Case-insensitive. Unknown names fail with [`Error::InvalidSelection`].
impl FromStr for HullAlgorithm {
  type Err = Error;
  fn from_str(name: &str) -> Result<HullAlgorithm, Error> {
    let lower = name.to_lowercase();
    HullAlgorithm::ALL
      .into_iter()
      .find(|algorithm| algorithm.name() == lower)
      .ok_or_else(|| Error::InvalidSelection(name.to_owned()))
  }
}

///////////////////////////////////////////////////////////////////////////////
// IntersectionMethod

/// Segment intersection tests selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionMethod {
  CrossProduct,
  ParametricVector,
  SimplifiedCcw,
}

impl IntersectionMethod {
  pub const ALL: [IntersectionMethod; 3] = [
    IntersectionMethod::CrossProduct,
    IntersectionMethod::ParametricVector,
    IntersectionMethod::SimplifiedCcw,
  ];

  /// Name accepted by [`FromStr`].
  pub fn name(self) -> &'static str {
    match self {
      IntersectionMethod::CrossProduct => "cross",
      IntersectionMethod::ParametricVector => "vector",
      IntersectionMethod::SimplifiedCcw => "geometric",
    }
  }

  pub fn strategy<T: PolygonScalar>(self) -> fn(&LineSegment<T>, &LineSegment<T>) -> bool {
    match self {
      IntersectionMethod::CrossProduct => cross_product::intersects::<T>,
      IntersectionMethod::ParametricVector => parametric::intersects::<T>,
      IntersectionMethod::SimplifiedCcw => simplified_ccw::intersects::<T>,
    }
  }

  pub fn intersects<T: PolygonScalar>(self, s1: &LineSegment<T>, s2: &LineSegment<T>) -> bool {
    debug!("segment intersection with {}", self);
    (self.strategy())(s1, s2)
  }
}

impl fmt::Display for IntersectionMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Case-insensitive. Unknown names fail with [`Error::InvalidSelection`].
impl FromStr for IntersectionMethod {
  type Err = Error;
  fn from_str(name: &str) -> Result<IntersectionMethod, Error> {
    let lower = name.to_lowercase();
    IntersectionMethod::ALL
      .into_iter()
      .find(|method| method.name() == lower)
      .ok_or_else(|| Error::InvalidSelection(name.to_owned()))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Entry points

/// Convex hull of `points` using the algorithm called `algorithm`.
///
/// Names are `brute`, `jarvis`, `graham`, `quick` and `chan`, in any case.
///
/// # Panics
///
/// `i64` coordinates beyond `±2^61` can overflow the widened orientation test. See
/// [`PolygonScalar`].
///
/// ```rust
/// # use hullsuite::{compute_hull, Error};
/// # use hullsuite::data::Point;
/// let points = vec![Point::new([0, 0]), Point::new([2, 0]), Point::new([1, 3])];
/// assert_eq!(compute_hull(points.clone(), "Jarvis").unwrap().len(), 3);
/// assert_eq!(
///   compute_hull(points, "quickhull"),
///   Err(Error::InvalidSelection("quickhull".to_owned()))
/// );
/// ```
pub fn compute_hull<T>(points: Vec<Point<T>>, algorithm: &str) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  let algorithm: HullAlgorithm = algorithm.parse()?;
  Ok(algorithm.convex_hull(points))
}

/// Intersection test between `s1` and `s2` using the method called `method`.
///
/// Names are `cross`, `vector` and `geometric`, in any case.
///
/// ```rust
/// # use hullsuite::segments_intersect;
/// # use hullsuite::data::LineSegment;
/// let s1 = LineSegment::from((0, 0)..=(2, 2));
/// let s2 = LineSegment::from((0, 2)..=(2, 0));
/// assert_eq!(segments_intersect(&s1, &s2, "vector"), Ok(true));
/// assert!(segments_intersect(&s1, &s2, "sweep").is_err());
/// ```
pub fn segments_intersect<T>(
  s1: &LineSegment<T>,
  s2: &LineSegment<T>,
  method: &str,
) -> Result<bool, Error>
where
  T: PolygonScalar,
{
  let method: IntersectionMethod = method.parse()?;
  Ok(method.intersects(s1, s2))
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok, assert_ok_eq};
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn parse_names() {
    for algorithm in HullAlgorithm::ALL {
      assert_ok_eq!(algorithm.name().parse::<HullAlgorithm>(), algorithm);
      let shouted = algorithm.to_string().to_uppercase();
      assert_ok_eq!(shouted.parse::<HullAlgorithm>(), algorithm);
    }
    for method in IntersectionMethod::ALL {
      assert_ok_eq!(method.name().parse::<IntersectionMethod>(), method);
    }
    assert_ok_eq!(
      "GeoMetric".parse::<IntersectionMethod>(),
      IntersectionMethod::SimplifiedCcw
    );
  }

  #[test]
  fn invalid_selection() {
    assert_err_eq!(
      "melkman".parse::<HullAlgorithm>(),
      Error::InvalidSelection("melkman".to_owned())
    );
    assert_err_eq!(
      "".parse::<IntersectionMethod>(),
      Error::InvalidSelection(String::new())
    );
    let s = LineSegment::from((0, 0)..=(1, 1));
    assert_err_eq!(
      segments_intersect(&s, &s, "Sweep"),
      Error::InvalidSelection("Sweep".to_owned())
    );
    assert_err_eq!(
      compute_hull(vec![Point::new([0, 0])], "graham scan"),
      Error::InvalidSelection("graham scan".to_owned())
    );
  }

  #[test_log::test]
  fn square_with_center() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
      Point::new([2, 2]),
    ];
    for algorithm in HullAlgorithm::ALL {
      let hull = assert_ok!(compute_hull(points.clone(), algorithm.name()));
      assert_eq!(
        hull.rotate_to_leftmost().into_points(),
        vec![
          Point::new([0, 0]),
          Point::new([4, 0]),
          Point::new([4, 4]),
          Point::new([0, 4]),
        ],
        "{}",
        algorithm
      );
    }
  }

  #[test]
  fn crossing_diagonals() {
    let s1 = LineSegment::from((0, 0)..=(4, 4));
    let s2 = LineSegment::from((0, 4)..=(4, 0));
    for method in IntersectionMethod::ALL {
      assert_ok_eq!(segments_intersect(&s1, &s2, method.name()), true);
    }
  }

  #[proptest]
  fn strategies_agree_with_brute_force(#[strategy(grid_points(0..20))] pts: Vec<Point<i32>>) {
    let expected = canonical(HullAlgorithm::BruteForce.convex_hull(pts.clone()));
    for algorithm in HullAlgorithm::ALL {
      if pts.len() < 3 {
        prop_assert_eq!(algorithm.convex_hull(pts.clone()).into_points(), pts.clone());
      } else {
        prop_assert_eq!(&canonical(algorithm.convex_hull(pts.clone())), &expected);
      }
    }
  }
}
