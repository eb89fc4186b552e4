mod hull;
mod line_segment;
pub(crate) mod point;

pub use hull::Hull;
pub use line_segment::LineSegment;
pub use point::{parse_points, random_points, Point, DEFAULT_RANDOM_BOUND, DEFAULT_RANDOM_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
