use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::{Error, Orientation, PolygonScalar, TotalOrd};

/// Number of points the interactive shells draw when asked for a random set.
pub const DEFAULT_RANDOM_COUNT: RangeInclusive<usize> = 15..=30;
/// Random points are drawn from `[-DEFAULT_RANDOM_BOUND, DEFAULT_RANDOM_BOUND]` on both axes.
pub const DEFAULT_RANDOM_BOUND: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T> Point<T>
where
  T: PolygonScalar,
{
  pub fn orient(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    Orientation::new(&p1.array, &p2.array, &p3.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T::Extended {
    let dx = self.array[0].extend() - rhs.array[0].extend();
    let dy = self.array[1].extend() - rhs.array[1].extend();
    dx.clone() * dx + dy.clone() * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .partial_cmp(&self.squared_euclidean_distance(q))
      .unwrap_or(Ordering::Equal)
  }

  /// Order `p` and `q` by their angle around `self`.
  ///
  /// Assumes `self` is the lowest (then leftmost) point of the set, so every other
  /// point sits in the half-open upper half plane. `self` itself sorts first and
  /// points on a common ray compare equal.
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    match (p == self, q == self) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      (false, false) => match self.orientation(p, q) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => Ordering::Equal,
      },
    }
  }

  /// Order by x, then by y.
  pub fn lexicographic_cmp(&self, other: &Point<T>) -> Ordering {
    TotalOrd::total_cmp(
      &(self.x_coord(), self.y_coord()),
      &(other.x_coord(), other.y_coord()),
    )
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

/// Parses `"x,y"`. Whitespace around either coordinate is ignored.
impl<T: FromStr> FromStr for Point<T> {
  type Err = Error;
  fn from_str(text: &str) -> Result<Point<T>, Error> {
    let malformed = || Error::MalformedInput(text.to_owned());
    let mut coords = text.split(',').map(|coord| coord.trim().parse::<T>());
    match (coords.next(), coords.next(), coords.next()) {
      (Some(Ok(x)), Some(Ok(y)), None) => Ok(Point::new([x, y])),
      _ => Err(malformed()),
    }
  }
}

/// Parses a whitespace separated list of points: `"x1,y1 x2,y2 ..."`.
///
/// ```rust
/// # use hullsuite::data::{parse_points, Point};
/// let pts: Vec<Point<f64>> = parse_points("0,0 1.5,2 -3,4").unwrap();
/// assert_eq!(pts[1], Point::new([1.5, 2.0]));
/// assert!(parse_points::<f64>("0,0 1;2").is_err());
/// ```
pub fn parse_points<T: FromStr>(text: &str) -> Result<Vec<Point<T>>, Error> {
  text.split_whitespace().map(str::parse).collect()
}

/// `n` points drawn uniformly from `range` on both axes.
pub fn random_points<T, R>(n: usize, range: RangeInclusive<T>, rng: &mut R) -> Vec<Point<T>>
where
  T: SampleUniform + PartialOrd + Clone,
  R: Rng + ?Sized,
{
  (0..n)
    .map(|_| Point::new([rng.gen_range(range.clone()), rng.gen_range(range.clone())]))
    .collect()
}
