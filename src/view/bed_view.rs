use std::time::Instant;

use log::{debug, warn};

use crate::data::{PlantingStore, StoreError};
use crate::logic::footprint::footprint_for;
use crate::logic::occupancy::{CellState, Occupancy};
use crate::logic::validator::creation_conflict;
use crate::models::bed::Bed;
use crate::models::plant::{PlantPage, PlantSummary};
use crate::models::planting::{Planting, PlantingCreate, PlantingPatch};
use crate::models::Coord;
use crate::view::drag::{DragController, DropOutcome};
use crate::view::lock::LockAnimations;
use crate::view::picker::PickerState;
use crate::view::Zoom;

/// Composition root for the bed layout designer. Owns the planting
/// snapshot, the occupancy grid derived from it, and every piece of
/// ephemeral gesture state; all of it lives and dies with the view.
///
/// Mutations go through the store and are followed by a refresh; the grid
/// never moves on the strength of an unacknowledged request.
pub struct BedView<S> {
    store: S,
    bed: Bed,
    plantings: Vec<Planting>,
    occupancy: Occupancy,
    drag: DragController,
    locks: LockAnimations,
    picker: Option<PickerState>,
    pending_cell: Option<Coord>,
    selected: Option<i64>,
    zoom: Zoom,
    notices: Vec<String>,
}

impl<S: PlantingStore> BedView<S> {
    /// Fetches the bed and its plantings and builds the initial grid.
    pub async fn load(store: S, bed_id: i64) -> Result<Self, StoreError> {
        let bed = store.get_bed(bed_id).await?;
        let plantings = store.list_plantings(bed_id).await?;
        let occupancy = Occupancy::build(&plantings, bed.grid_cols(), bed.grid_rows());
        Ok(Self {
            store,
            bed,
            plantings,
            occupancy,
            drag: DragController::default(),
            locks: LockAnimations::default(),
            picker: None,
            pending_cell: None,
            selected: None,
            zoom: Zoom::default(),
            notices: Vec::new(),
        })
    }

    fn rebuild_occupancy(&mut self) {
        self.occupancy =
            Occupancy::build(&self.plantings, self.bed.grid_cols(), self.bed.grid_rows());
    }

    /// Re-fetches the authoritative planting list and rebuilds occupancy.
    /// Called after every successful mutation.
    pub async fn refresh(&mut self) {
        match self.store.list_plantings(self.bed.id).await {
            Ok(plantings) => {
                self.plantings = plantings;
                self.rebuild_occupancy();
            }
            Err(err) => {
                warn!("planting refresh failed: {err}");
                self.notices.push("Failed to refresh plantings.".into());
            }
        }
    }

    // ── Picker flow ──────────────────────────────────────────────────────

    /// Clicking an empty cell records it as the pending placement target
    /// and opens the plant picker. Occupied cells are handled by
    /// [`Self::click_anchor`].
    pub fn click_cell(&mut self, cell: Coord) {
        if !self.bed.grid_enabled() {
            return;
        }
        if !self.occupancy.cell(cell).is_some_and(CellState::is_empty) {
            return;
        }
        self.selected = None;
        self.pending_cell = Some(cell);
        self.picker = Some(PickerState::new());
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
        self.pending_cell = None;
    }

    /// Fetches the picker's current result page.
    pub async fn picker_results(&mut self) -> Option<PlantPage> {
        let query = self.picker.as_ref()?.query();
        match self.store.list_plants(query).await {
            Ok(page) => Some(page),
            Err(err) => {
                warn!("plant search failed: {err}");
                self.notices.push("Failed to search plants.".into());
                None
            }
        }
    }

    /// A plant was chosen for the pending cell. The footprint is
    /// re-validated against the *current* occupancy, not the click-time
    /// state; on conflict the picker closes and no request is issued. The
    /// picker also closes before the create request, so a slow round trip
    /// cannot be double-submitted.
    pub async fn choose_plant(&mut self, plant: &PlantSummary) {
        let Some(target) = self.pending_cell else {
            return;
        };
        let fp = footprint_for(plant.spacing_inches);

        if creation_conflict(&self.occupancy, target, fp) {
            self.notices
                .push("Not enough space — another plant is in the way.".into());
            self.close_picker();
            return;
        }

        self.picker = None;
        let request = PlantingCreate {
            bed_id: self.bed.id,
            plant_id: plant.id,
            grid_x: Some(target.x),
            grid_y: Some(target.y),
            quantity: Some(1),
        };
        match self.store.create_planting(request).await {
            Ok(created) => {
                debug!("planted {} at {target:?}", created.id);
                self.refresh().await;
            }
            Err(err) => {
                warn!("create planting failed: {err}");
                self.notices.push("Failed to add planting.".into());
            }
        }
        self.pending_cell = None;
    }

    // ── Drag flow ────────────────────────────────────────────────────────

    /// Begins dragging a planting's anchor cell. Locked plantings and
    /// plantings mid lock-transition are not draggable. Starting a drag
    /// clears any selection.
    pub fn drag_start(&mut self, planting_id: i64) -> bool {
        let Some(planting) = self.plantings.iter().find(|p| p.id == planting_id) else {
            return false;
        };
        if self.locks.contains(planting_id) {
            return false;
        }
        if !self.drag.start(planting) {
            return false;
        }
        self.selected = None;
        true
    }

    pub fn drag_hover(&mut self, cell: Coord) {
        self.drag.hover(cell, &self.occupancy, &self.plantings);
    }

    pub fn drag_leave(&mut self) {
        self.drag.clear_hover();
    }

    /// Releases the drag. A valid non-trivial drop issues the move request
    /// and refreshes; an invalid one flashes the attempted footprint; a
    /// cancel does nothing.
    pub async fn drag_drop(&mut self, now: Instant) {
        let outcome = self.drag.finish(&self.occupancy, &self.plantings, now);
        let DropOutcome::Move { planting_id, to } = outcome else {
            return;
        };
        match self
            .store
            .update_planting(planting_id, PlantingPatch::move_to(to))
            .await
        {
            Ok(_) => self.refresh().await,
            Err(err) => {
                warn!("move planting {planting_id} failed: {err}");
                self.notices.push("Failed to move planting.".into());
            }
        }
    }

    // ── Lock flow ────────────────────────────────────────────────────────

    /// Locks a planting in place. The animation entry appears before the
    /// update is issued; on failure it is rolled back immediately, since
    /// `is_locked` never actually changed.
    pub async fn lock(&mut self, planting_id: i64, now: Instant) {
        self.locks.begin(planting_id);
        match self
            .store
            .update_planting(planting_id, PlantingPatch::locked(true))
            .await
        {
            Ok(_) => {
                self.locks.settle(planting_id, now);
                self.refresh().await;
            }
            Err(err) => {
                warn!("lock planting {planting_id} failed: {err}");
                self.locks.cancel(planting_id);
                self.notices.push("Failed to lock planting.".into());
            }
        }
    }

    pub async fn unlock(&mut self, planting_id: i64) {
        match self
            .store
            .update_planting(planting_id, PlantingPatch::locked(false))
            .await
        {
            Ok(_) => self.refresh().await,
            Err(err) => {
                warn!("unlock planting {planting_id} failed: {err}");
                self.notices.push("Failed to unlock planting.".into());
            }
        }
    }

    // ── Delete and selection ─────────────────────────────────────────────

    /// Removes a planting from the grid. Locked plantings have no delete
    /// affordance; they must be unlocked first.
    pub async fn delete(&mut self, planting_id: i64) {
        if self
            .plantings
            .iter()
            .any(|p| p.id == planting_id && p.is_locked)
        {
            debug!("ignoring delete of locked planting {planting_id}");
            return;
        }
        match self.store.delete_planting(planting_id).await {
            Ok(()) => self.refresh().await,
            Err(err) => {
                warn!("delete planting {planting_id} failed: {err}");
                self.notices.push("Failed to remove planting.".into());
            }
        }
    }

    /// Clicking a locked anchor selects it for the detail affordance;
    /// clicking an unlocked anchor deselects instead.
    pub fn click_anchor(&mut self, planting_id: i64) {
        let locked = self
            .plantings
            .iter()
            .any(|p| p.id == planting_id && p.is_locked);
        self.selected = locked.then_some(planting_id);
    }

    // ── Timers and accessors ─────────────────────────────────────────────

    /// Advances the presentation timers (flash, lock animation).
    pub fn tick(&mut self, now: Instant) {
        self.drag.tick(now);
        self.locks.tick(now);
    }

    pub fn bed(&self) -> &Bed {
        &self.bed
    }

    pub fn plantings(&self) -> &[Planting] {
        &self.plantings
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn lock_animating(&self, planting_id: i64) -> bool {
        self.locks.contains(planting_id)
    }

    pub fn picker(&self) -> Option<&PickerState> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut PickerState> {
        self.picker.as_mut()
    }

    pub fn pending_cell(&self) -> Option<Coord> {
        self.pending_cell
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
    }

    /// Drains the queued user-facing notices.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}
