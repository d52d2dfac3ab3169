//! Map metadata.

use glam::DVec2;

use crate::types::GraphError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapInfo {
    /// Meters per raster pixel.
    pub resolution: f64,
    /// World position (meters) of the bottom-left raster pixel.
    pub origin: DVec2,
}

impl MapInfo {
    /// Validated constructor. The resolution must be finite and strictly positive,
    /// the origin finite.
    pub fn new(resolution: f64, origin: DVec2) -> Result<Self, GraphError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(GraphError::Config(format!(
                "resolution must be a positive number, got {resolution}"
            )));
        }
        if !origin.is_finite() {
            return Err(GraphError::Config(format!(
                "origin must be finite, got ({}, {})",
                origin.x, origin.y
            )));
        }
        Ok(Self { resolution, origin })
    }

    /// Number of whole pixels spanned by `length_m`, truncated toward zero.
    #[inline]
    pub fn meters_to_pixels(&self, length_m: f64) -> u32 {
        (length_m / self.resolution).trunc() as u32
    }
}
