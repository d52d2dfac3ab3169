use image::{GrayImage, Luma};

use crate::costmap::CostMap;
use crate::grid::BinaryMap;
use crate::types::OCCUPIED;

/// Convert a cost map to a grayscale preview, one image pixel per cell.
///
/// - **FREE** (0) becomes white-ish.
/// - **OCCUPIED** (100) becomes black.
///
/// Cell `(i, j)` is drawn at image `(i, j)`, which puts it where its pixels sit
/// in the source raster.
pub fn cost_map_to_image(cost_map: &CostMap) -> GrayImage {
    let mut img = GrayImage::new(cost_map.h_units(), cost_map.v_units());
    for i in 0..cost_map.h_units() {
        for j in 0..cost_map.v_units() {
            let cost = cost_map.cost(i, j).unwrap_or(OCCUPIED);
            img.put_pixel(i, j, Luma([cost_to_gray(cost)]));
        }
    }
    img
}

/// Convert the thresholded, oriented map back to a raster-aligned preview.
pub fn binary_map_to_image(map: &BinaryMap) -> GrayImage {
    let mut img = GrayImage::new(map.rows(), map.cols());
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            let gray = if map.is_free(row, col) { 254 } else { 0 };
            img.put_pixel(row, col, Luma([gray]));
        }
    }
    img
}

fn cost_to_gray(cost: u8) -> u8 {
    // 0 (free) -> 254, 100 (occupied) -> 0
    let v = u16::from(cost.min(OCCUPIED));
    (254 - (v * 254) / u16::from(OCCUPIED)) as u8
}
