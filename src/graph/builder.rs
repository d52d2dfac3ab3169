use log::debug;

use super::{MetricGraph, PixelGraph};
use crate::costmap::CostMap;
use crate::types::{CoordinateMapper, CoordinateSpace, GraphError};

/// `(di, dj)` cell offsets, in the order neighbors are listed.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Build the 8-connected adjacency of all free cells, once keyed by pixel
/// coordinates and once by metric coordinates. Both graphs list vertices in the
/// same row-major order with the same neighbors.
pub fn build_graphs(
    cost_map: &CostMap,
    mapper: &CoordinateMapper,
) -> Result<(MetricGraph, PixelGraph), GraphError> {
    let mut pixel = PixelGraph::new();
    let mut metric = MetricGraph::new();

    for (i, j) in cost_map.free_cells() {
        let center = cost_map.cell_center(i, j);

        let neighbors: Vec<_> = NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(di, dj)| cost_map.neighbor(i, j, di, dj))
            .filter(|&(ni, nj)| cost_map.is_free(ni, nj))
            .map(|(ni, nj)| cost_map.cell_center(ni, nj))
            .collect();
        let metric_neighbors = neighbors.iter().map(|&n| mapper.pixel_to_world(n)).collect();

        if let Err(existing) = pixel.insert(center, neighbors) {
            return Err(GraphError::VertexCollision {
                space: CoordinateSpace::Pixel,
                first: pixel.vertices()[existing].position,
                second: center,
            });
        }
        if let Err(existing) = metric.insert(mapper.pixel_to_world(center), metric_neighbors) {
            return Err(GraphError::VertexCollision {
                space: CoordinateSpace::Metric,
                first: pixel.vertices()[existing].position,
                second: center,
            });
        }
    }

    debug!(
        "built graph with {} vertices and {} directed edges",
        pixel.len(),
        pixel.edge_count()
    );

    Ok((metric, pixel))
}
