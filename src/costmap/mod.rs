//! Coarse cost map: one cost per `unit_length x unit_length` pixel cell.
//!
//! Cells are addressed `(i, j)`: `i` is the row of the oriented [`BinaryMap`]
//! divided by the unit length, `j` the column.
//!
//! [`BinaryMap`]: crate::grid::BinaryMap

pub mod aggregate;

pub use aggregate::{classify_cells, grid_dimensions, unit_length_px, window_free_fraction};

#[cfg(feature = "rayon")]
pub use aggregate::parallel::classify_cells_par;

use glam::{IVec2, UVec2};

use crate::grid::Grid2d;
use crate::types::{FREE, GraphError};

#[derive(Debug, Clone, PartialEq)]
pub struct CostMap {
    // x = j, y = i, so storage order is row-major over (i, j).
    grid: Grid2d<u8>,
    unit_length: u32,
}

impl CostMap {
    pub fn new(
        h_units: u32,
        v_units: u32,
        unit_length: u32,
        costs: Vec<u8>,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            grid: Grid2d::new(v_units, h_units, costs)?,
            unit_length,
        })
    }

    pub fn h_units(&self) -> u32 {
        self.grid.height()
    }

    pub fn v_units(&self) -> u32 {
        self.grid.width()
    }

    /// Cell edge length in pixels.
    pub fn unit_length(&self) -> u32 {
        self.unit_length
    }

    pub fn cost(&self, i: u32, j: u32) -> Option<u8> {
        self.grid.get(UVec2::new(j, i)).copied()
    }

    /// Out-of-bounds cells are never free.
    pub fn is_free(&self, i: u32, j: u32) -> bool {
        self.cost(i, j) == Some(FREE)
    }

    /// Cell `(i + di, j + dj)` if it lies inside the map.
    pub fn neighbor(&self, i: u32, j: u32, di: i32, dj: i32) -> Option<(u32, u32)> {
        self.grid
            .checked_offset(UVec2::new(j, i), IVec2::new(dj, di))
            .map(|p| (p.y, p.x))
    }

    /// Pixel-space center of cell `(i, j)` in the oriented map.
    pub fn cell_center(&self, i: u32, j: u32) -> UVec2 {
        let u = self.unit_length;
        UVec2::new(i * u + u / 2, j * u + u / 2)
    }

    /// Free cells in row-major scan order.
    pub fn free_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.grid
            .iter()
            .filter(|&(_, &cost)| cost == FREE)
            .map(|(p, _)| (p.y, p.x))
    }

    pub fn free_count(&self) -> usize {
        self.grid.data().iter().filter(|&&c| c == FREE).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.data().len() - self.free_count()
    }

    /// Raw costs, row-major over `(i, j)`.
    pub fn data(&self) -> &[u8] {
        self.grid.data()
    }
}
