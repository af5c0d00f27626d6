use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use gardenbed::data::memory::MemoryStore;
use gardenbed::data::{PlantingStore, StoreError};
use gardenbed::models::bed::Bed;
use gardenbed::models::plant::{PlantPage, PlantQuery, PlantSummary};
use gardenbed::models::planting::{Planting, PlantingCreate, PlantingPatch};
use gardenbed::models::Coord;
use gardenbed::view::bed_view::BedView;
use gardenbed::view::lock::LOCK_ANIMATION;

// Seed catalogue ids: tomato has 24" spacing (footprint 2), carrot 3"
// (footprint 1), basil 12" (footprint 1).
const TOMATO: i64 = 1;
const CARROT: i64 = 2;
const BASIL: i64 = 4;

/// Store wrapper that counts mutation requests, so tests can assert that
/// rejected gestures never reach the network.
#[derive(Clone)]
struct RecordingStore {
    inner: MemoryStore,
    creates: Arc<AtomicUsize>,
    updates: Arc<AtomicUsize>,
    deletes: Arc<AtomicUsize>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            creates: Arc::new(AtomicUsize::new(0)),
            updates: Arc::new(AtomicUsize::new(0)),
            deletes: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    fn plant(&self, id: i64) -> PlantSummary {
        self.inner.plant_summary(id).expect("seed plant must exist")
    }
}

impl PlantingStore for RecordingStore {
    async fn get_bed(&self, id: i64) -> Result<Bed, StoreError> {
        self.inner.get_bed(id).await
    }

    async fn list_plantings(&self, bed_id: i64) -> Result<Vec<Planting>, StoreError> {
        self.inner.list_plantings(bed_id).await
    }

    async fn create_planting(&self, req: PlantingCreate) -> Result<Planting, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create_planting(req).await
    }

    async fn update_planting(&self, id: i64, patch: PlantingPatch) -> Result<Planting, StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update_planting(id, patch).await
    }

    async fn delete_planting(&self, id: i64) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_planting(id).await
    }

    async fn list_plants(&self, query: PlantQuery) -> Result<PlantPage, StoreError> {
        self.inner.list_plants(query).await
    }
}

async fn open_bed(width_ft: i32, length_ft: i32) -> (RecordingStore, BedView<RecordingStore>) {
    let store = RecordingStore::new();
    let bed = store
        .inner
        .seed_bed(1, "Test bed", Some(width_ft), Some(length_ft));
    let view = BedView::load(store.clone(), bed.id)
        .await
        .expect("bed must load");
    (store, view)
}

/// Places a plant through the full picker flow: empty-cell click, then
/// selection from the picker.
async fn place(view: &mut BedView<RecordingStore>, store: &RecordingStore, plant_id: i64, cell: Coord) {
    view.click_cell(cell);
    assert!(view.picker().is_some(), "picker must open on an empty cell");
    let plant = store.plant(plant_id);
    view.choose_plant(&plant).await;
}

fn anchor_of(view: &BedView<RecordingStore>, plant_id: i64) -> Option<Coord> {
    view.plantings()
        .iter()
        .find(|p| p.plant_id == plant_id)
        .and_then(|p| p.anchor())
}

// ── Scenario A: picker placement conflicts with an existing footprint ───────

#[tokio::test]
async fn test_picker_placement_over_occupied_cell_is_rejected() {
    let (store, mut view) = open_bed(4, 4).await;

    // Open the picker for (0,0) while it is still empty.
    view.click_cell(Coord::new(0, 0));
    assert_eq!(view.pending_cell(), Some(Coord::new(0, 0)));

    // Meanwhile a carrot lands at (0,0) behind the picker's back.
    store
        .inner
        .create_planting(PlantingCreate {
            bed_id: view.bed().id,
            plant_id: CARROT,
            grid_x: Some(0),
            grid_y: Some(0),
            quantity: None,
        })
        .await
        .expect("direct create");
    view.refresh().await;

    // Choosing a footprint-2 tomato for (0,0) must re-validate against the
    // current occupancy and abort without a request.
    let tomato = store.plant(TOMATO);
    view.choose_plant(&tomato).await;

    let notices = view.take_notices();
    assert!(
        notices.iter().any(|n| n.contains("Not enough space")),
        "a conflict message must be surfaced, got {notices:?}"
    );
    assert_eq!(store.create_count(), 0, "no create request may be issued");
    assert!(view.picker().is_none(), "picker closes on conflict");
    assert!(view.pending_cell().is_none());
}

#[tokio::test]
async fn test_picker_placement_on_free_cell_creates_planting() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, BASIL, Coord::new(2, 2)).await;

    assert_eq!(store.create_count(), 1);
    assert_eq!(anchor_of(&view, BASIL), Some(Coord::new(2, 2)));
    assert!(view.take_notices().is_empty(), "no error on a clean placement");
    assert!(view.picker().is_none(), "picker closes after selection");
}

#[tokio::test]
async fn test_clicking_occupied_cell_does_not_open_picker() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;

    // Both the anchor and a continuation cell refuse to open the picker.
    view.click_cell(Coord::new(0, 0));
    assert!(view.picker().is_none());
    view.click_cell(Coord::new(1, 1));
    assert!(view.picker().is_none());
}

// ── Scenario B: moving over the planting's own previous footprint ───────────

#[tokio::test]
async fn test_move_overlapping_own_old_footprint_succeeds() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(1, 1)).await;
    let planting_id = view.plantings()[0].id;

    assert!(view.drag_start(planting_id), "unlocked planting must drag");
    // (0,0) covers (1,1), currently owned by the dragged tomato itself.
    view.drag_hover(Coord::new(0, 0));
    assert!(view.drag().is_valid_drop());
    view.drag_drop(Instant::now()).await;

    assert_eq!(store.update_count(), 1);
    assert_eq!(anchor_of(&view, TOMATO), Some(Coord::new(0, 0)));
    assert!(view.take_notices().is_empty());
}

// ── Scenario C: out-of-bounds drop flashes and issues nothing ───────────────

#[tokio::test]
async fn test_out_of_bounds_drop_flashes_without_request() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    let planting_id = view.plantings()[0].id;

    let now = Instant::now();
    assert!(view.drag_start(planting_id));
    view.drag_hover(Coord::new(3, 3));
    assert!(!view.drag().is_valid_drop(), "footprint 2 exceeds the 4x4 bed");
    view.drag_drop(now).await;

    assert_eq!(store.update_count(), 0, "invalid drop must not hit the store");
    assert!(view.drag().is_flashing(Coord::new(3, 3)));
    view.tick(now + Duration::from_millis(300));
    assert!(!view.drag().is_flashing(Coord::new(3, 3)), "flash auto-clears");

    view.refresh().await;
    assert_eq!(
        anchor_of(&view, TOMATO),
        Some(Coord::new(0, 0)),
        "planting stays at its prior position"
    );
}

#[tokio::test]
async fn test_drop_onto_other_planting_is_rejected() {
    let (store, mut view) = open_bed(6, 6).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    place(&mut view, &store, BASIL, Coord::new(4, 4)).await;
    let basil_id = view
        .plantings()
        .iter()
        .find(|p| p.plant_id == BASIL)
        .expect("basil placed")
        .id;

    assert!(view.drag_start(basil_id));
    // (1,1) is a continuation cell of the tomato block.
    view.drag_hover(Coord::new(1, 1));
    assert!(!view.drag().is_valid_drop());
    view.drag_drop(Instant::now()).await;

    assert_eq!(store.update_count(), 0);
    assert_eq!(anchor_of(&view, BASIL), Some(Coord::new(4, 4)));
}

// ── No-op and cancelled gestures ────────────────────────────────────────────

#[tokio::test]
async fn test_drop_on_own_anchor_issues_no_request() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(1, 1)).await;
    let planting_id = view.plantings()[0].id;

    view.drag_start(planting_id);
    view.drag_hover(Coord::new(1, 1));
    view.drag_drop(Instant::now()).await;

    assert_eq!(store.update_count(), 0, "a no-op move issues zero requests");
    assert!(view.take_notices().is_empty(), "a no-op is not an error");
}

#[tokio::test]
async fn test_release_outside_grid_is_a_clean_cancel() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(1, 1)).await;
    let planting_id = view.plantings()[0].id;

    view.drag_start(planting_id);
    view.drag_hover(Coord::new(2, 2));
    view.drag_leave();
    view.drag_drop(Instant::now()).await;

    assert_eq!(store.update_count(), 0);
    assert!(view.drag().flashing_cells().is_empty(), "cancel does not flash");
    assert_eq!(anchor_of(&view, TOMATO), Some(Coord::new(1, 1)));
}

// ── Scenario D: lock transitions ────────────────────────────────────────────

#[tokio::test]
async fn test_lock_animates_then_settles_with_flag_kept() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    let planting_id = view.plantings()[0].id;

    let now = Instant::now();
    view.lock(planting_id, now).await;

    assert!(view.lock_animating(planting_id), "animation entry appears");
    assert!(
        !view.drag_start(planting_id),
        "a locked planting is not draggable"
    );
    assert!(view.plantings()[0].is_locked, "flag persisted after refresh");

    view.tick(now + LOCK_ANIMATION);
    assert!(
        !view.lock_animating(planting_id),
        "animation entry clears after its display window"
    );
    assert!(view.plantings()[0].is_locked, "is_locked stays true");
}

#[tokio::test]
async fn test_failed_lock_rolls_back_animation() {
    let (store, mut view) = open_bed(4, 4).await;

    // Planting id 99 does not exist, so the update fails.
    view.lock(99, Instant::now()).await;

    assert!(!view.lock_animating(99), "failed lock removes the entry");
    let notices = view.take_notices();
    assert!(
        notices.iter().any(|n| n.contains("Failed to lock")),
        "failure must surface a notice, got {notices:?}"
    );
    assert_eq!(store.update_count(), 1, "the attempt itself was issued");
}

#[tokio::test]
async fn test_unlock_restores_draggability() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    let planting_id = view.plantings()[0].id;

    let now = Instant::now();
    view.lock(planting_id, now).await;
    view.tick(now + LOCK_ANIMATION);
    view.unlock(planting_id).await;

    assert!(!view.plantings()[0].is_locked);
    assert!(view.drag_start(planting_id), "unlocked planting drags again");
}

// ── Selection and delete affordances ────────────────────────────────────────

#[tokio::test]
async fn test_locked_anchor_selects_unlocked_deselects() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    let planting_id = view.plantings()[0].id;

    view.click_anchor(planting_id);
    assert_eq!(view.selected(), None, "unlocked anchor click deselects");

    let now = Instant::now();
    view.lock(planting_id, now).await;
    view.tick(now + LOCK_ANIMATION);
    view.click_anchor(planting_id);
    assert_eq!(view.selected(), Some(planting_id), "locked anchor selects");
}

#[tokio::test]
async fn test_delete_is_refused_for_locked_plantings() {
    let (store, mut view) = open_bed(4, 4).await;
    place(&mut view, &store, TOMATO, Coord::new(0, 0)).await;
    let planting_id = view.plantings()[0].id;

    let now = Instant::now();
    view.lock(planting_id, now).await;
    view.delete(planting_id).await;
    assert_eq!(store.delete_count(), 0, "locked plantings have no delete");
    assert_eq!(view.plantings().len(), 1);

    view.unlock(planting_id).await;
    view.delete(planting_id).await;
    assert_eq!(store.delete_count(), 1);
    assert!(view.plantings().is_empty(), "deleted and refreshed");
}

// ── Picker search through the view ──────────────────────────────────────────

#[tokio::test]
async fn test_picker_search_flows_through_debounced_filter() {
    let (_store, mut view) = open_bed(4, 4).await;
    view.click_cell(Coord::new(0, 0));

    let now = Instant::now();
    let picker = view.picker_mut().expect("picker open");
    picker.set_input("tomato", now);
    assert!(picker.poll(now + Duration::from_millis(400)));

    let page = view.picker_results().await.expect("search succeeds");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].common_name, "Tomato");
}
