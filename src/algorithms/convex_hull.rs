//! Five interchangeable convex hull algorithms.
//!
//! Every algorithm takes a `Vec<Point<T>>` and returns a [`Hull`](crate::data::Hull)
//! in counter-clockwise order. Inputs with fewer than three points are returned
//! unchanged. Colinear boundary points are never reported as vertices, so all five
//! produce the same vertex cycle for the same input.
pub mod brute_force;
pub mod chan;
pub mod gift_wrapping;
pub mod graham_scan;
pub mod quick_elimination;
