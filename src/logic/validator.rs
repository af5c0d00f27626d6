use crate::logic::occupancy::{CellState, Occupancy};
use crate::models::planting::Planting;
use crate::models::Coord;

/// Decides whether a footprint anchored at `origin` may be placed.
///
/// Valid iff every covered cell is within bed bounds and is either empty or
/// already owned by `moving` (the planting being relocated). For a brand-new
/// placement pass `moving = None`; any occupied cell then invalidates the
/// candidate.
pub fn placement_valid(
    occupancy: &Occupancy,
    plantings: &[Planting],
    origin: Coord,
    footprint: u32,
    moving: Option<i64>,
) -> bool {
    for dy in 0..footprint as i32 {
        for dx in 0..footprint as i32 {
            let cell = origin.offset(dx, dy);
            if !occupancy.in_bounds(cell) {
                return false;
            }
            match occupancy.cell(cell) {
                None | Some(CellState::Empty) => {}
                Some(CellState::Anchor(idx)) | Some(CellState::Continuation(idx)) => {
                    let owner = plantings.get(*idx).map(|p| p.id);
                    if moving.is_none() || owner != moving {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Conflict re-check used by the picker flow before a create request.
/// Matches the historical behaviour: out-of-bounds offsets are skipped (the
/// footprint clips at the edge) and only occupied in-bounds cells conflict.
pub fn creation_conflict(occupancy: &Occupancy, origin: Coord, footprint: u32) -> bool {
    for dy in 0..footprint as i32 {
        for dx in 0..footprint as i32 {
            let cell = origin.offset(dx, dy);
            if let Some(state) = occupancy.cell(cell) {
                if !state.is_empty() {
                    return true;
                }
            }
        }
    }
    false
}
