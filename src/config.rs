//! Pipeline tuning.

use crate::grid::Polarity;
use crate::types::{
    DEFAULT_FREE_FRACTION, DEFAULT_INTENSITY_THRESHOLD, DEFAULT_UNIT_LENGTH_M, GraphError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Cell edge length in meters.
    pub unit_length_m: f64,
    /// Raster intensity separating free from occupied samples.
    pub intensity_threshold: u16,
    /// Minimum free-pixel fraction for a cell to be free.
    pub free_fraction: f64,
    pub polarity: Polarity,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            unit_length_m: DEFAULT_UNIT_LENGTH_M,
            intensity_threshold: DEFAULT_INTENSITY_THRESHOLD,
            free_fraction: DEFAULT_FREE_FRACTION,
            polarity: Polarity::default(),
        }
    }
}

impl GraphConfig {
    pub fn with_unit_length(mut self, unit_length_m: f64) -> Self {
        self.unit_length_m = unit_length_m;
        self
    }

    pub fn with_intensity_threshold(mut self, threshold: u16) -> Self {
        self.intensity_threshold = threshold;
        self
    }

    pub fn with_free_fraction(mut self, free_fraction: f64) -> Self {
        self.free_fraction = free_fraction;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.unit_length_m.is_finite() || self.unit_length_m <= 0.0 {
            return Err(GraphError::DegenerateConfig(format!(
                "unit length must be a positive number of meters, got {}",
                self.unit_length_m
            )));
        }
        if !(self.free_fraction > 0.0 && self.free_fraction <= 1.0) {
            return Err(GraphError::DegenerateConfig(format!(
                "free fraction must be in (0, 1], got {}",
                self.free_fraction
            )));
        }
        Ok(())
    }
}
