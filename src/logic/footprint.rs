use crate::models::planting::Planting;

/// One grid cell represents one linear foot.
pub const INCHES_PER_CELL: f64 = 12.0;

/// Side length, in cells, of the square footprint for a given plant spacing.
/// Missing spacing defaults to 12 inches, i.e. a single cell.
pub fn footprint_for(spacing_inches: Option<f64>) -> u32 {
    let spacing = spacing_inches.unwrap_or(INCHES_PER_CELL);
    (spacing / INCHES_PER_CELL).ceil().max(1.0) as u32
}

/// Footprint of a planting, read from its embedded plant summary.
pub fn planting_footprint(planting: &Planting) -> u32 {
    footprint_for(planting.spacing_inches())
}
