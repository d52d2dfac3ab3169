pub mod config;
pub mod costmap;
pub mod graph;
pub mod grid;
pub mod loaders;
pub mod pipeline;
pub mod types;
pub mod visualization;

pub use config::GraphConfig;
pub use costmap::CostMap;
pub use graph::{Graph, MetricGraph, PixelGraph, Vertex};
pub use grid::{BinaryMap, Grid2d, Polarity, RasterImage};
pub use pipeline::{CellGraph, CellGraphBuilder};
pub use types::{CoordinateMapper, GraphError, MapInfo};
