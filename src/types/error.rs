use glam::UVec2;
use thiserror::Error;

use crate::types::CoordinateSpace;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid map metadata: {0}")]
    Config(String),
    #[error("not a raw PGM raster: {0}")]
    Format(String),
    #[error("raster payload truncated: expected {expected} bytes, found {found}")]
    TruncatedData { expected: usize, found: usize },
    #[error("degenerate configuration: {0}")]
    DegenerateConfig(String),
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    #[error("cells centered at {first} and {second} map to the same {space} vertex")]
    VertexCollision {
        space: CoordinateSpace,
        first: UVec2,
        second: UVec2,
    },
}
