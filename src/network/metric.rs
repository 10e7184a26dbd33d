//! Distances between points of a cubic simulation box.

use super::config::Boundary;

/// Distance function bound to a boundary mode and box size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub boundary: Boundary,
    pub box_size: f64,
}

impl Metric {
    pub fn new(boundary: Boundary, box_size: f64) -> Self {
        Self { boundary, box_size }
    }

    pub fn periodic(box_size: f64) -> Self {
        Self::new(Boundary::Periodic, box_size)
    }

    pub fn euclidean() -> Self {
        Self::new(Boundary::NonPeriodic, 0.0)
    }

    /// Distance between `p0` and `p1` under the bound boundary mode.
    #[inline]
    pub fn distance(&self, p0: [f64; 3], p1: [f64; 3]) -> f64 {
        match self.boundary {
            Boundary::Periodic => minimum_image_distance(p0, p1, self.box_size),
            Boundary::NonPeriodic => euclidean_distance(p0, p1),
        }
    }
}

#[inline]
pub fn euclidean_distance(p0: [f64; 3], p1: [f64; 3]) -> f64 {
    let dx = p0[0] - p1[0];
    let dy = p0[1] - p1[1];
    let dz = p0[2] - p1[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Euclidean distance with each axis separation replaced by
/// `min(|Δ|, box_size - |Δ|)`.
#[inline]
pub fn minimum_image_distance(p0: [f64; 3], p1: [f64; 3], box_size: f64) -> f64 {
    let wrap = |a: f64, b: f64| {
        let d = (a - b).abs();
        d.min(box_size - d)
    };
    let dx = wrap(p0[0], p1[0]);
    let dy = wrap(p0[1], p1[1]);
    let dz = wrap(p0[2], p1[2]);
    (dx * dx + dy * dy + dz * dz).sqrt()
}
