use std::ops::Deref;

use super::{LineSegment, Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar};

/// Vertices of a convex hull in counter-clockwise order.
///
/// Hulls of fewer than three points are whatever the algorithm was given and do
/// not describe a polygon. Two hulls compare equal only if their vertices start at
/// the same point; use [`Hull::rotate_to_leftmost`] to compare cycles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull<T>(Vec<Point<T>>);

impl<T> Hull<T> {
  /// $O(1)$ Assume that the points are already ordered counter-clockwise.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    Hull(points)
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.0
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.0
  }
}

impl<T> Hull<T>
where
  T: PolygonScalar,
{
  /// $O(n)$ Check that every vertex is a strict left turn and that the boundary
  /// winds around the first vertex exactly once.
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    if n < 3 {
      return Ok(());
    }
    for i in 0..n {
      let turn = Point::orient(&self.0[i], &self.0[(i + 1) % n], &self.0[(i + 2) % n]);
      if turn != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    // Every fan triangle around the first vertex must be CCW as well, otherwise the
    // boundary loops around more than once.
    let origin = &self.0[0];
    for pair in self.0[1..].windows(2) {
      if !origin.orientation(&pair[0], &pair[1]).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(n)$ Locate a point relative to the hull.
  ///
  /// Hulls with one or two vertices are treated as a point or a segment.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match self.0.as_slice() {
      [] => PointLocation::Outside,
      [vertex] if vertex == pt => PointLocation::OnBoundary,
      [_] => PointLocation::Outside,
      [a, b] if LineSegment::new(a.clone(), b.clone()).contains(pt) => PointLocation::OnBoundary,
      [_, _] => PointLocation::Outside,
      vertices => {
        let n = vertices.len();
        let mut on_edge = false;
        for i in 0..n {
          match Point::orient(&vertices[i], &vertices[(i + 1) % n], pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  /// Rotate the vertex cycle so that it starts at the vertex with the smallest x
  /// coordinate (ties go to the smallest y).
  #[must_use]
  pub fn rotate_to_leftmost(mut self) -> Hull<T> {
    let leftmost = self
      .0
      .iter()
      .enumerate()
      .min_by(|(_, a), (_, b)| a.lexicographic_cmp(b))
      .map_or(0, |(idx, _)| idx);
    self.0.rotate_left(leftmost);
    self
  }
}

impl<T> Deref for Hull<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &[Point<T>] {
    &self.0
  }
}

impl<T> From<Hull<T>> for Vec<Point<T>> {
  fn from(hull: Hull<T>) -> Vec<Point<T>> {
    hull.0
  }
}

impl<T> IntoIterator for Hull<T> {
  type Item = Point<T>;
  type IntoIter = std::vec::IntoIter<Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Hull<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
