//! ROS map_server style YAML metadata.
//!
//! Only `resolution` and the first two components of `origin` are used. Any
//! other key (`negate`, `occupied_thresh`, `mode`, ...) is accepted and
//! ignored, except `image`, which names the raster relative to the YAML file.

use std::path::{Path, PathBuf};

use glam::DVec2;
use serde::Deserialize;

use crate::types::{GraphError, MapInfo};

#[derive(Debug, Deserialize)]
struct RosMapMetadata {
    #[serde(default)]
    image: Option<String>,
    resolution: f64,
    origin: Vec<f64>,
}

/// Metadata plus the raster path named by the YAML, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct MapYaml {
    pub info: MapInfo,
    pub image: Option<PathBuf>,
}

pub fn parse_map_yaml(yaml: &str) -> Result<MapYaml, GraphError> {
    let metadata: RosMapMetadata = serde_yaml::from_str(yaml)
        .map_err(|e| GraphError::Config(format!("failed to parse map YAML: {e}")))?;

    if metadata.origin.len() < 2 {
        return Err(GraphError::Config(format!(
            "origin needs at least 2 components, got {}",
            metadata.origin.len()
        )));
    }

    let info = MapInfo::new(
        metadata.resolution,
        DVec2::new(metadata.origin[0], metadata.origin[1]),
    )?;

    Ok(MapYaml {
        info,
        image: metadata.image.map(PathBuf::from),
    })
}

/// Load map metadata from a YAML file. A relative `image` entry is resolved
/// against the directory holding the YAML.
pub fn load_map_yaml(yaml_path: impl AsRef<Path>) -> Result<MapYaml, GraphError> {
    let yaml_path = yaml_path.as_ref();
    let yaml_str = std::fs::read_to_string(yaml_path)?;
    let mut map = parse_map_yaml(&yaml_str)?;
    map.image = map
        .image
        .map(|image| resolve_image_path(yaml_path, &image));
    Ok(map)
}

fn resolve_image_path(yaml_path: &Path, image_path: &Path) -> PathBuf {
    if image_path.is_absolute() {
        return image_path.to_path_buf();
    }

    match yaml_path.parent() {
        Some(parent) => parent.join(image_path),
        None => image_path.to_path_buf(),
    }
}
