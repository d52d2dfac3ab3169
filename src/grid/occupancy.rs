//! Thresholding and orientation of raster samples.
//!
//! The resulting [`BinaryMap`] is indexed `(row, col)` like a matrix. After the
//! orientation transform (vertical flip, then a 270 degree rotation) rows run
//! along the raster's columns and columns along the raster's rows, which is the
//! layout [`CoordinateMapper`](crate::types::CoordinateMapper) expects.

use glam::UVec2;

use super::{Grid2d, RasterImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupancy {
    Free,
    Occupied,
}

/// Which side of the intensity threshold counts as free space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Samples below the threshold are free.
    #[default]
    DarkFree,
    /// Samples above the threshold are free (ROS map_server images).
    BrightFree,
}

impl Occupancy {
    /// Classify a raw sample. A sample equal to the threshold is always occupied.
    pub fn classify(sample: u16, threshold: u16, polarity: Polarity) -> Self {
        let free = match polarity {
            Polarity::DarkFree => sample < threshold,
            Polarity::BrightFree => sample > threshold,
        };
        if free { Self::Free } else { Self::Occupied }
    }

    pub fn is_free(self) -> bool {
        self == Self::Free
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryMap {
    grid: Grid2d<Occupancy>,
}

impl BinaryMap {
    /// Threshold every sample of `raster`, then apply the fixed orientation transform.
    pub fn from_raster(raster: &RasterImage, threshold: u16, polarity: Polarity) -> Self {
        let classified = raster
            .samples()
            .map(|&sample| Occupancy::classify(sample, threshold, polarity));

        Self {
            grid: classified.flipped_vertical().rotated_clockwise(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.grid.height()
    }

    pub fn cols(&self) -> u32 {
        self.grid.width()
    }

    pub fn get(&self, row: u32, col: u32) -> Option<Occupancy> {
        self.grid.get(UVec2::new(col, row)).copied()
    }

    pub fn is_free(&self, row: u32, col: u32) -> bool {
        self.get(row, col).is_some_and(Occupancy::is_free)
    }

    pub fn free_count(&self) -> usize {
        self.grid.data().iter().filter(|o| o.is_free()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u32, height: u32, samples: Vec<u16>) -> RasterImage {
        RasterImage::new(Grid2d::new(width, height, samples).unwrap(), 255)
    }

    #[test]
    fn threshold_boundary_is_occupied() {
        let t = 210;
        assert_eq!(Occupancy::classify(209, t, Polarity::DarkFree), Occupancy::Free);
        assert_eq!(Occupancy::classify(210, t, Polarity::DarkFree), Occupancy::Occupied);
        assert_eq!(Occupancy::classify(211, t, Polarity::DarkFree), Occupancy::Occupied);

        assert_eq!(Occupancy::classify(209, t, Polarity::BrightFree), Occupancy::Occupied);
        assert_eq!(Occupancy::classify(210, t, Polarity::BrightFree), Occupancy::Occupied);
        assert_eq!(Occupancy::classify(211, t, Polarity::BrightFree), Occupancy::Free);
    }

    #[test]
    fn orientation_swaps_raster_axes() {
        // 3 wide, 2 tall. Only the raster pixel at column 2, row 0 is free.
        let raster = raster(3, 2, vec![255, 255, 0, 255, 255, 255]);
        let map = BinaryMap::from_raster(&raster, 210, Polarity::DarkFree);

        assert_eq!(map.rows(), 3);
        assert_eq!(map.cols(), 2);
        assert_eq!(map.free_count(), 1);
        assert!(map.is_free(2, 0));
        assert!(!map.is_free(0, 2));
        assert_eq!(map.get(3, 0), None);
        assert!(!map.is_free(3, 0));
    }

    #[test]
    fn bright_polarity_inverts_free_space() {
        let raster = raster(2, 1, vec![254, 0]);
        let map = BinaryMap::from_raster(&raster, 210, Polarity::BrightFree);
        assert!(map.is_free(0, 0));
        assert!(!map.is_free(1, 0));
    }
}
