//! Decoded raster samples, exactly as stored in the image file.

use glam::UVec2;

use super::Grid2d;

#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    samples: Grid2d<u16>,
    max_value: u16,
}

impl RasterImage {
    pub fn new(samples: Grid2d<u16>, max_value: u16) -> Self {
        Self { samples, max_value }
    }

    pub fn width(&self) -> u32 {
        self.samples.width()
    }

    pub fn height(&self) -> u32 {
        self.samples.height()
    }

    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Bytes per sample in the binary payload.
    pub fn sample_size(&self) -> usize {
        if self.max_value < 256 { 1 } else { 2 }
    }

    /// Sample at column `x`, row `y` (row 0 is the top of the image).
    pub fn get(&self, x: u32, y: u32) -> Option<u16> {
        self.samples.get(UVec2::new(x, y)).copied()
    }

    pub fn samples(&self) -> &Grid2d<u16> {
        &self.samples
    }
}
