//! Conversion between cell-center pixel coordinates and world coordinates.
//!
//! Pixel coordinates are expressed in the oriented map: the first component runs
//! along the raster's columns (world x), the second along the raster's rows, top
//! to bottom (world -y). Metric coordinates are rounded to [`METRIC_DECIMALS`].

use std::fmt;

use glam::{DVec2, IVec2, UVec2};

use crate::types::{METRIC_DECIMALS, MapInfo};

/// Which of the two output graphs a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSpace {
    Pixel,
    Metric,
}

impl fmt::Display for CoordinateSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel => f.write_str("pixel"),
            Self::Metric => f.write_str("metric"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    origin_px: IVec2,
    resolution: f64,
}

impl CoordinateMapper {
    /// Locate the world origin in pixel space for a raster `raster_height` pixels tall.
    pub fn new(info: &MapInfo, raster_height: u32) -> Self {
        let origin_x = (-info.origin.x / info.resolution).trunc() as i32;
        let origin_y = (raster_height as f64 + info.origin.y / info.resolution).trunc() as i32;
        Self {
            origin_px: IVec2::new(origin_x, origin_y),
            resolution: info.resolution,
        }
    }

    /// Pixel holding the world origin. May lie outside the raster.
    pub fn origin_px(&self) -> IVec2 {
        self.origin_px
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn pixel_to_world(&self, px: UVec2) -> DVec2 {
        let dx = px.x as i64 - self.origin_px.x as i64;
        let dy = self.origin_px.y as i64 - px.y as i64;
        DVec2::new(
            round_to(dx as f64 * self.resolution, METRIC_DECIMALS),
            round_to(dy as f64 * self.resolution, METRIC_DECIMALS),
        )
    }

    /// Inverse of [`Self::pixel_to_world`], snapped to the nearest pixel.
    pub fn world_to_pixel(&self, world: DVec2) -> IVec2 {
        let px = world.x / self.resolution + self.origin_px.x as f64;
        let py = self.origin_px.y as f64 - world.y / self.resolution;
        IVec2::new(px.round() as i32, py.round() as i32)
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Exact integer key for a rounded metric coordinate.
pub fn metric_key(world: DVec2) -> (i64, i64) {
    let scale = 10f64.powi(METRIC_DECIMALS);
    (
        (world.x * scale).round() as i64,
        (world.y * scale).round() as i64,
    )
}
