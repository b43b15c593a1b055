//! Polyline simplification for recorded mouse paths
//!
//! - `rdp`: Ramer-Douglas-Peucker point selection
//! - `timing`: delay redistribution over the points that survive

mod rdp;
mod timing;

pub use rdp::{rdp_keep_indices, segment_distance};
pub use timing::{cumulative_distances, redistribute_timestamps};

/// A path vertex in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}
