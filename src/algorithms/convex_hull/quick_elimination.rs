use log::debug;

use super::gift_wrapping;
use crate::data::{Hull, Point};
use crate::PolygonScalar;

// https://en.wikipedia.org/wiki/Convex_hull_algorithms#Akl%E2%80%93Toussaint_heuristic

/// Convex hull of a set of points using the Akl–Toussaint heuristic.
///
/// The leftmost, lowest, rightmost and topmost points span a coarse quadrilateral.
/// Every point strictly inside it cannot be a hull vertex and is discarded before
/// the survivors are handed to [gift wrapping](gift_wrapping::convex_hull).
///
/// Extremes that coincide are merged. When fewer than three distinct extremes
/// remain, or they are colinear, nothing lies strictly inside and nothing is
/// discarded.
///
/// Inputs with fewer than three points are returned unchanged.
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Hull<T>
where
  T: PolygonScalar,
{
  if pts.len() < 3 {
    return Hull::new_unchecked(pts);
  }
  let candidates = match coarse_hull(&pts) {
    Some(coarse) => {
      let total = pts.len();
      let survivors: Vec<Point<T>> = pts
        .into_iter()
        .filter(|pt| !strictly_inside(&coarse, pt))
        .collect();
      debug!(
        "quick elimination: discarded {} of {} points",
        total - survivors.len(),
        total
      );
      survivors
    }
    None => {
      debug!("quick elimination: degenerate coarse hull, nothing discarded");
      pts
    }
  };
  gift_wrapping::convex_hull(candidates)
}

// Extreme points in counter-clockwise order: left, bottom, right, top.
fn coarse_hull<T>(pts: &[Point<T>]) -> Option<Vec<Point<T>>>
where
  T: PolygonScalar,
{
  let min_x = pts.iter().min_by(|a, b| a.x_coord().total_cmp(b.x_coord()))?;
  let min_y = pts.iter().min_by(|a, b| a.y_coord().total_cmp(b.y_coord()))?;
  let max_x = pts.iter().max_by(|a, b| a.x_coord().total_cmp(b.x_coord()))?;
  let max_y = pts.iter().max_by(|a, b| a.y_coord().total_cmp(b.y_coord()))?;

  let mut corners: Vec<Point<T>> = [min_x, min_y, max_x, max_y].into_iter().cloned().collect();
  corners.dedup();
  while corners.len() > 1 && corners.first() == corners.last() {
    corners.pop();
  }
  if corners.len() < 3 {
    return None;
  }
  Some(corners)
}

fn strictly_inside<T>(polygon: &[Point<T>], pt: &Point<T>) -> bool
where
  T: PolygonScalar,
{
  let n = polygon.len();
  (0..n).all(|i| Point::orient(&polygon[i], &polygon[(i + 1) % n], pt).is_ccw())
}
