//! End-to-end conversion of a raster map into cell graphs.
//!
//! ```no_run
//! use cellgraph::CellGraphBuilder;
//!
//! let builder = CellGraphBuilder::from_files("map.pgm", "map.yaml", None)?;
//! let (metric, pixel) = builder.build_graph()?;
//! for vertex in &metric {
//!     println!("{:?} -> {:?}", vertex.position, vertex.neighbors);
//! }
//! # assert_eq!(metric.len(), pixel.len());
//! # Ok::<(), cellgraph::GraphError>(())
//! ```

use std::path::Path;

use log::debug;

use crate::config::GraphConfig;
use crate::costmap::{self, CostMap};
use crate::graph::{MetricGraph, PixelGraph, build_graphs};
use crate::grid::{BinaryMap, RasterImage};
use crate::loaders::{load_map_yaml, read_pgm};
use crate::types::{CoordinateMapper, GraphError, MapInfo};

/// Every intermediate product of a pipeline run.
#[derive(Debug, Clone)]
pub struct CellGraph {
    pub binary_map: BinaryMap,
    pub cost_map: CostMap,
    pub mapper: CoordinateMapper,
    pub metric: MetricGraph,
    pub pixel: PixelGraph,
}

/// Loaded inputs plus configuration, ready to build graphs.
#[derive(Debug, Clone)]
pub struct CellGraphBuilder {
    raster: RasterImage,
    info: MapInfo,
    config: GraphConfig,
}

impl CellGraphBuilder {
    pub fn new(raster: RasterImage, info: MapInfo, config: GraphConfig) -> Self {
        Self {
            raster,
            info,
            config,
        }
    }

    /// Load a PGM raster and its YAML metadata. `unit_length_m` defaults to 0.8 m.
    pub fn from_files(
        raster_path: impl AsRef<Path>,
        metadata_path: impl AsRef<Path>,
        unit_length_m: Option<f64>,
    ) -> Result<Self, GraphError> {
        let map = load_map_yaml(metadata_path)?;
        let raster = read_pgm(raster_path)?;
        Ok(Self::new(raster, map.info, config_for(unit_length_m)))
    }

    /// Load a map from its YAML alone; the raster is found through the `image` key.
    pub fn from_yaml(
        yaml_path: impl AsRef<Path>,
        unit_length_m: Option<f64>,
    ) -> Result<Self, GraphError> {
        let yaml_path = yaml_path.as_ref();
        let map = load_map_yaml(yaml_path)?;
        let image = map.image.ok_or_else(|| {
            GraphError::Config(format!("{} has no image entry", yaml_path.display()))
        })?;
        let raster = read_pgm(image)?;
        Ok(Self::new(raster, map.info, config_for(unit_length_m)))
    }

    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn raster(&self) -> &RasterImage {
        &self.raster
    }

    /// Run the pipeline and return `(metric graph, pixel graph)`.
    pub fn build_graph(&self) -> Result<(MetricGraph, PixelGraph), GraphError> {
        let CellGraph { metric, pixel, .. } = self.build()?;
        Ok((metric, pixel))
    }

    /// Run the pipeline, keeping the intermediate maps.
    pub fn build(&self) -> Result<CellGraph, GraphError> {
        self.config.validate()?;
        let unit_length = costmap::unit_length_px(&self.info, self.config.unit_length_m)?;
        debug!(
            "building cell graph: {}x{} raster, {} m/px, unit length {} px",
            self.raster.width(),
            self.raster.height(),
            self.info.resolution,
            unit_length
        );

        let binary_map = BinaryMap::from_raster(
            &self.raster,
            self.config.intensity_threshold,
            self.config.polarity,
        );

        #[cfg(feature = "rayon")]
        let cost_map =
            costmap::classify_cells_par(&binary_map, unit_length, self.config.free_fraction)?;
        #[cfg(not(feature = "rayon"))]
        let cost_map =
            costmap::classify_cells(&binary_map, unit_length, self.config.free_fraction)?;
        debug!(
            "classified {}x{} cells: {} free, {} occupied",
            cost_map.h_units(),
            cost_map.v_units(),
            cost_map.free_count(),
            cost_map.occupied_count()
        );

        let mapper = CoordinateMapper::new(&self.info, self.raster.height());
        let (metric, pixel) = build_graphs(&cost_map, &mapper)?;

        Ok(CellGraph {
            binary_map,
            cost_map,
            mapper,
            metric,
            pixel,
        })
    }
}

fn config_for(unit_length_m: Option<f64>) -> GraphConfig {
    let config = GraphConfig::default();
    match unit_length_m {
        Some(length) => config.with_unit_length(length),
        None => config,
    }
}
