pub mod pgm;
pub mod ros2;

pub use pgm::{decode_pgm, read_pgm};
pub use ros2::{MapYaml, load_map_yaml, parse_map_yaml};
