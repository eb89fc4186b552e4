// This module contains strategies for:
//  * points
//  * point sets
//  * line segments
// Coordinates are drawn from a small grid so that colinear triples, duplicates and
// shared endpoints show up often.
use crate::data::{LineSegment, Point};

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use std::ops::RangeInclusive;

pub const GRID: RangeInclusive<i32> = -12..=12;

impl<T: Arbitrary + 'static> Arbitrary for Point<T> {
  type Strategy = proptest::strategy::Map<StrategyFor<[T; 2]>, fn([T; 2]) -> Point<T>>;
  type Parameters = <[T; 2] as Arbitrary>::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(Point::new)
  }
}

pub fn grid_point() -> impl Strategy<Value = Point<i32>> {
  (GRID, GRID).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn grid_points(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec(grid_point(), size)
}

pub fn grid_segment() -> impl Strategy<Value = LineSegment<i32>> {
  (grid_point(), grid_point()).prop_map(LineSegment::from)
}

/// Canonical form used to compare hulls produced by different algorithms.
pub fn canonical<T: crate::PolygonScalar>(hull: crate::data::Hull<T>) -> Vec<Point<T>> {
  hull.rotate_to_leftmost().into_points()
}
