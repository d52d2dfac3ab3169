pub mod grid2d;
pub mod occupancy;
pub mod raster;

pub use grid2d::Grid2d;
pub use occupancy::{BinaryMap, Occupancy, Polarity};
pub use raster::RasterImage;
