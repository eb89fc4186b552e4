use log::trace;
use num_traits::Zero;

use super::cross_product;
use crate::data::LineSegment;
use crate::{Error, PolygonScalar};

/// Solution of `p1 + alpha (q1 - p1) = p2 + beta (q2 - p2)`.
///
/// The parameters are kept as fractions over a shared, non-zero determinant:
/// `alpha = alpha_num / determinant` and `beta = beta_num / determinant`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametricSolution<E> {
  pub alpha_num: E,
  pub beta_num: E,
  pub determinant: E,
}

impl<E> ParametricSolution<E>
where
  E: Clone + PartialOrd + Zero,
{
  /// True if both parameters lie in `[0, 1]`, i.e. the crossing point of the two
  /// lines is on both segments.
  pub fn within_both(&self) -> bool {
    unit_interval(&self.alpha_num, &self.determinant)
      && unit_interval(&self.beta_num, &self.determinant)
  }
}

// num / den in [0, 1] without dividing.
fn unit_interval<E>(num: &E, den: &E) -> bool
where
  E: PartialOrd + Zero,
{
  let zero = E::zero();
  if *den > zero {
    zero <= *num && num <= den
  } else {
    den <= num && *num <= zero
  }
}

/// Solve for the parameters where the lines through `s1` and `s2` meet.
///
/// Fails with [`Error::NumericDegeneracy`] when the determinant is zero. That is
/// the case for parallel and colinear segments, and for degenerate segments.
///
/// ```rust
/// # use hullsuite::algorithms::intersection::parametric::solve;
/// # use hullsuite::data::LineSegment;
/// let s1 = LineSegment::<i32>::from((0, 0)..=(4, 4));
/// let s2 = LineSegment::<i32>::from((0, 4)..=(4, 0));
/// let solution = solve(&s1, &s2).unwrap();
/// assert_eq!(solution.alpha_num * 2, solution.determinant);
/// ```
pub fn solve<T>(
  s1: &LineSegment<T>,
  s2: &LineSegment<T>,
) -> Result<ParametricSolution<T::Extended>, Error>
where
  T: PolygonScalar,
{
  let [p1x, p1y] = [s1.start.x_coord().extend(), s1.start.y_coord().extend()];
  let [q1x, q1y] = [s1.end.x_coord().extend(), s1.end.y_coord().extend()];
  let [p2x, p2y] = [s2.start.x_coord().extend(), s2.start.y_coord().extend()];
  let [q2x, q2y] = [s2.end.x_coord().extend(), s2.end.y_coord().extend()];

  // alpha * a + beta * b = c
  let (ax, ay) = (q1x - p1x.clone(), q1y - p1y.clone());
  let (bx, by) = (p2x.clone() - q2x, p2y.clone() - q2y);
  let (cx, cy) = (p2x - p1x, p2y - p1y);

  let determinant = ax.clone() * by.clone() - ay.clone() * bx.clone();
  if determinant.is_zero() {
    return Err(Error::NumericDegeneracy);
  }
  Ok(ParametricSolution {
    alpha_num: by * cx.clone() - bx * cy.clone(),
    beta_num: ax * cy - ay * cx,
    determinant,
  })
}

// Properties:
//    Agrees with the cross product test on every input.
/// True if two closed segments share at least one point.
///
/// Intersects the supporting lines parametrically and checks that the crossing
/// point lies on both segments. Parallel, colinear and degenerate segments have no
/// unique crossing point and are decided by
/// [the cross product test](cross_product::intersects) instead.
pub fn intersects<T>(s1: &LineSegment<T>, s2: &LineSegment<T>) -> bool
where
  T: PolygonScalar,
{
  match solve(s1, s2) {
    Ok(solution) => solution.within_both(),
    Err(err) => {
      trace!("parametric: {}, deferring to cross product", err);
      cross_product::intersects(s1, s2)
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn crossing_at_midpoints() {
    let s1 = LineSegment::<i32>::from((0, 0)..=(4, 4));
    let s2 = LineSegment::<i32>::from((0, 4)..=(4, 0));
    let solution = assert_ok!(solve(&s1, &s2));
    assert_eq!(
      solution,
      ParametricSolution {
        alpha_num: 16,
        beta_num: 16,
        determinant: 32,
      }
    );
    assert!(solution.within_both());
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn negative_determinant() {
    let s1 = LineSegment::<i32>::from((0, 0)..=(2, 2));
    let s2 = LineSegment::<i32>::from((3, 0)..=(3, 5));
    let solution = assert_ok!(solve(&s1, &s2));
    assert!(solution.determinant < 0);
    assert!(!solution.within_both());
    assert!(!intersects(&s1, &s2));
  }

  #[test]
  fn endpoint_parameters_are_inclusive() {
    let s1 = LineSegment::<i32>::from((0, 0)..=(4, 0));
    let s2 = LineSegment::<i32>::from((4, 0)..=(6, 3));
    let solution = assert_ok!(solve(&s1, &s2));
    assert_eq!(solution.alpha_num, solution.determinant);
    assert_eq!(solution.beta_num, 0);
    assert!(intersects(&s1, &s2));
  }

  #[test]
  fn parallel_is_degenerate() {
    let s1 = LineSegment::from((0, 0)..=(4, 0));
    let s2 = LineSegment::from((0, 1)..=(4, 1));
    assert_err_eq!(solve(&s1, &s2), Error::NumericDegeneracy);
    assert!(!intersects(&s1, &s2));
  }

  #[test]
  fn colinear_falls_back() {
    let disjoint = (
      LineSegment::from((0, 0)..=(1, 1)),
      LineSegment::from((2, 2)..=(3, 3)),
    );
    assert_err_eq!(solve(&disjoint.0, &disjoint.1), Error::NumericDegeneracy);
    assert!(!intersects(&disjoint.0, &disjoint.1));

    let overlapping = (
      LineSegment::from((0, 0)..=(2, 0)),
      LineSegment::from((1, 0)..=(3, 0)),
    );
    assert!(intersects(&overlapping.0, &overlapping.1));
  }

  #[test]
  fn floating_point_segments() {
    let s1 = LineSegment::from((0.0, 0.0)..=(1.0, 2.0));
    let s2 = LineSegment::from((0.0, 2.0)..=(1.0, 0.0));
    assert!(intersects(&s1, &s2));
    let s3 = LineSegment::from((2.0, 0.0)..=(3.0, 5.0));
    assert!(!intersects(&s1, &s3));
  }

  #[proptest]
  fn matches_cross_product(
    #[strategy(grid_segment())] s1: LineSegment<i32>,
    #[strategy(grid_segment())] s2: LineSegment<i32>,
  ) {
    prop_assert_eq!(intersects(&s1, &s2), cross_product::intersects(&s1, &s2));
  }

  #[proptest]
  fn symmetric(
    #[strategy(grid_segment())] s1: LineSegment<i32>,
    #[strategy(grid_segment())] s2: LineSegment<i32>,
  ) {
    prop_assert_eq!(intersects(&s1, &s2), intersects(&s2, &s1));
  }
}
