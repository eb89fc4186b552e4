//! Three interchangeable tests for whether two closed line segments share a point.
pub mod cross_product;
pub mod parametric;
pub mod simplified_ccw;
