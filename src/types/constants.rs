/// Cost of a traversable cell.
pub const FREE: u8 = 0;
/// Cost of a blocked cell. Only the free/non-free distinction is meaningful.
pub const OCCUPIED: u8 = 100;

/// Raster samples strictly below this value are free; everything else is occupied.
pub const DEFAULT_INTENSITY_THRESHOLD: u16 = 210;
/// Minimum fraction of free pixels a cell window needs to be classified free.
pub const DEFAULT_FREE_FRACTION: f64 = 0.85;
/// Default cell edge length in meters.
pub const DEFAULT_UNIT_LENGTH_M: f64 = 0.8;

/// Metric coordinates are rounded to this many decimal places.
pub const METRIC_DECIMALS: i32 = 3;
