pub mod constants;
pub mod coords;
pub mod error;
pub mod info;

pub use constants::*;
pub use coords::{CoordinateMapper, CoordinateSpace, metric_key, round_to};
pub use error::GraphError;
pub use info::MapInfo;
