//! Coarsening of the oriented binary map into a [`CostMap`].
//!
//! Cell `(i, j)` samples the inclusive pixel window rows `i*u + 1 ..= (i+1)*u`,
//! columns `j*u + 1 ..= (j+1)*u`. The one-pixel inset keeps seam pixels of the
//! previous cell out of the window. Window pixels past the map edge are not
//! counted and do not contribute to the window area.

use log::{debug, trace};

use super::CostMap;
use crate::grid::BinaryMap;
use crate::types::{FREE, GraphError, MapInfo, OCCUPIED};

/// Cell edge length in pixels for a cell `unit_length_m` meters wide.
pub fn unit_length_px(info: &MapInfo, unit_length_m: f64) -> Result<u32, GraphError> {
    if !unit_length_m.is_finite() || unit_length_m <= 0.0 {
        return Err(GraphError::DegenerateConfig(format!(
            "unit length must be a positive number of meters, got {unit_length_m}"
        )));
    }

    let unit_length = info.meters_to_pixels(unit_length_m);
    if unit_length == 0 {
        return Err(GraphError::DegenerateConfig(format!(
            "unit length {unit_length_m} m is smaller than one pixel at {} m/px",
            info.resolution
        )));
    }
    Ok(unit_length)
}

/// `(h_units, v_units)` for `map`. Remainder pixels are dropped.
pub fn grid_dimensions(map: &BinaryMap, unit_length: u32) -> Result<(u32, u32), GraphError> {
    if unit_length == 0 {
        return Err(GraphError::DegenerateConfig(
            "unit length must be at least one pixel".to_string(),
        ));
    }

    let h_units = map.rows() / unit_length;
    let v_units = map.cols() / unit_length;
    if h_units == 0 || v_units == 0 {
        return Err(GraphError::DegenerateConfig(format!(
            "a {}x{} pixel map holds no whole {unit_length} pixel cell",
            map.rows(),
            map.cols()
        )));
    }

    let (rem_rows, rem_cols) = (map.rows() % unit_length, map.cols() % unit_length);
    if rem_rows != 0 || rem_cols != 0 {
        debug!("dropping {rem_rows} trailing pixel rows and {rem_cols} trailing pixel columns");
    }
    Ok((h_units, v_units))
}

/// Fraction of free pixels in the window of cell `(i, j)`, or `None` when no
/// window pixel lies inside the map.
pub fn window_free_fraction(map: &BinaryMap, unit_length: u32, i: u32, j: u32) -> Option<f64> {
    let (row_start, row_end) = window_span(i, unit_length, map.rows())?;
    let (col_start, col_end) = window_span(j, unit_length, map.cols())?;

    let mut free = 0u64;
    for row in row_start..=row_end {
        for col in col_start..=col_end {
            if map.is_free(row, col) {
                free += 1;
            }
        }
    }

    let area = u64::from(row_end - row_start + 1) * u64::from(col_end - col_start + 1);
    Some(free as f64 / area as f64)
}

/// Inclusive, in-bounds pixel span of cell `index` along an axis `extent` pixels long.
fn window_span(index: u32, unit_length: u32, extent: u32) -> Option<(u32, u32)> {
    let start = index * unit_length + 1;
    let end = ((index + 1) * unit_length).min(extent.checked_sub(1)?);
    (start <= end).then_some((start, end))
}

fn classify_cell(map: &BinaryMap, unit_length: u32, free_fraction: f64, i: u32, j: u32) -> u8 {
    match window_free_fraction(map, unit_length, i, j) {
        Some(frac) if frac >= free_fraction => FREE,
        Some(frac) => {
            trace!("cell ({i}, {j}) occupied: {:.1}% free", frac * 100.0);
            OCCUPIED
        }
        None => OCCUPIED,
    }
}

/// Classify every cell of `map`: free when at least `free_fraction` of its
/// window is free, occupied otherwise.
pub fn classify_cells(
    map: &BinaryMap,
    unit_length: u32,
    free_fraction: f64,
) -> Result<CostMap, GraphError> {
    let (h_units, v_units) = grid_dimensions(map, unit_length)?;

    let mut costs = Vec::with_capacity((h_units as usize) * (v_units as usize));
    for i in 0..h_units {
        for j in 0..v_units {
            costs.push(classify_cell(map, unit_length, free_fraction, i, j));
        }
    }

    CostMap::new(h_units, v_units, unit_length, costs)
}

#[cfg(feature = "rayon")]
pub mod parallel {
    use rayon::prelude::*;

    use super::*;

    /// Same result as [`classify_cells`]; each worker fills a disjoint row of cells.
    pub fn classify_cells_par(
        map: &BinaryMap,
        unit_length: u32,
        free_fraction: f64,
    ) -> Result<CostMap, GraphError> {
        let (h_units, v_units) = grid_dimensions(map, unit_length)?;

        let mut costs = vec![OCCUPIED; (h_units as usize) * (v_units as usize)];
        costs
            .par_chunks_mut(v_units as usize)
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cost) in row.iter_mut().enumerate() {
                    *cost = classify_cell(map, unit_length, free_fraction, i as u32, j as u32);
                }
            });

        CostMap::new(h_units, v_units, unit_length, costs)
    }
}
