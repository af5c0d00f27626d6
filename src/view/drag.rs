use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::logic::footprint::planting_footprint;
use crate::logic::occupancy::{footprint_cells, Occupancy};
use crate::logic::validator::placement_valid;
use crate::models::planting::Planting;
use crate::models::Coord;

/// How long rejected-drop cells keep their invalid highlight.
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Result of releasing a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No hover cell was ever recorded; the gesture is discarded.
    None,
    /// Dropped on the planting's current anchor; no request is issued.
    NoOp,
    /// A valid relocation; the caller issues the move request.
    Move { planting_id: i64, to: Coord },
    /// Invalid target; the attempted footprint is now flashing.
    Rejected,
}

#[derive(Debug)]
struct DragSession {
    planting_id: i64,
    hover: Option<Coord>,
    valid: bool,
}

/// Gesture state machine for repositioning plantings:
/// idle → dragging → (hovering)* → drop or cancel → idle.
///
/// The whole session lives in one value read and written synchronously
/// within each event handler, so hover and validity can never disagree.
/// At most one session is active at a time.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    flashing: HashSet<Coord>,
    flash_until: Option<Instant>,
}

impl DragController {
    /// Begins a drag on an anchor cell. Locked plantings are not draggable;
    /// the caller must unlock them first.
    pub fn start(&mut self, planting: &Planting) -> bool {
        if planting.is_locked {
            return false;
        }
        self.session = Some(DragSession {
            planting_id: planting.id,
            hover: None,
            valid: false,
        });
        true
    }

    /// Records the newly hovered cell and recomputes live validity against
    /// the current occupancy snapshot, excluding the dragged planting's own
    /// footprint.
    pub fn hover(&mut self, cell: Coord, occupancy: &Occupancy, plantings: &[Planting]) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.hover = Some(cell);
        session.valid = plantings
            .iter()
            .find(|p| p.id == session.planting_id)
            .is_some_and(|dragging| {
                placement_valid(
                    occupancy,
                    plantings,
                    cell,
                    planting_footprint(dragging),
                    Some(session.planting_id),
                )
            });
    }

    /// The pointer left every droppable cell; dropping now is a no-op.
    pub fn clear_hover(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.hover = None;
            session.valid = false;
        }
    }

    /// Ends the gesture. On an invalid target the attempted footprint cells
    /// (clipped to the grid) start flashing for [`FLASH_DURATION`].
    pub fn finish(
        &mut self,
        occupancy: &Occupancy,
        plantings: &[Planting],
        now: Instant,
    ) -> DropOutcome {
        let Some(session) = self.session.take() else {
            return DropOutcome::None;
        };
        let Some(hover) = session.hover else {
            return DropOutcome::None;
        };
        let Some(source) = plantings.iter().find(|p| p.id == session.planting_id) else {
            return DropOutcome::None;
        };

        if session.valid {
            if source.anchor() == Some(hover) {
                return DropOutcome::NoOp;
            }
            return DropOutcome::Move {
                planting_id: session.planting_id,
                to: hover,
            };
        }

        let fp = planting_footprint(source);
        self.flashing = footprint_cells(hover, fp, occupancy.cols(), occupancy.rows())
            .into_iter()
            .collect();
        self.flash_until = Some(now + FLASH_DURATION);
        DropOutcome::Rejected
    }

    /// Clears expired flash feedback. Called from the owning view's tick.
    pub fn tick(&mut self, now: Instant) {
        if self.flash_until.is_some_and(|deadline| now >= deadline) {
            self.flashing.clear();
            self.flash_until = None;
        }
    }

    pub fn dragging_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.planting_id)
    }

    pub fn hover_cell(&self) -> Option<Coord> {
        self.session.as_ref().and_then(|s| s.hover)
    }

    pub fn is_valid_drop(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.valid)
    }

    /// Cells the dragged footprint would occupy from the hovered cell, for
    /// the green/red overlay. Empty when nothing is hovered.
    pub fn hover_footprint(&self, plantings: &[Planting]) -> HashSet<Coord> {
        let mut cells = HashSet::new();
        let Some(session) = self.session.as_ref() else {
            return cells;
        };
        let Some(hover) = session.hover else {
            return cells;
        };
        let Some(dragging) = plantings.iter().find(|p| p.id == session.planting_id) else {
            return cells;
        };
        let fp = planting_footprint(dragging) as i32;
        for dy in 0..fp {
            for dx in 0..fp {
                cells.insert(hover.offset(dx, dy));
            }
        }
        cells
    }

    /// True while this planting's source cells should render ghosted.
    pub fn is_source(&self, planting_id: i64) -> bool {
        self.dragging_id() == Some(planting_id)
    }

    pub fn is_flashing(&self, cell: Coord) -> bool {
        self.flashing.contains(&cell)
    }

    pub fn flashing_cells(&self) -> &HashSet<Coord> {
        &self.flashing
    }
}
