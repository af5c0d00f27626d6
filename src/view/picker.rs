use std::time::{Duration, Instant};

use crate::models::plant::{PlantQuery, PlantType};

/// Quiet period after the last keystroke before the name filter commits.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Results per picker page.
pub const PICKER_PER_PAGE: usize = 12;

/// Filter and pagination state for the "which plant goes in this cell"
/// search dialog. Decoupled from grid mechanics: selecting a plant is the
/// caller's concern, the picker never issues grid mutations.
#[derive(Debug, Default)]
pub struct PickerState {
    input: String,
    committed: String,
    pending_since: Option<Instant>,
    cycle: Option<PlantType>,
    page: usize,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Records a keystroke; the filter only commits once the debounce
    /// window elapses without further edits.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text != self.input {
            self.input = text;
            self.pending_since = Some(now);
        }
    }

    /// Commits a pending name filter once it has been quiet long enough.
    /// Returns true when the committed query changed, which also resets the
    /// page to 1. The caller re-fetches on true.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(since) = self.pending_since else {
            return false;
        };
        if now.duration_since(since) < SEARCH_DEBOUNCE {
            return false;
        }
        self.pending_since = None;
        if self.committed == self.input {
            return false;
        }
        self.committed = self.input.clone();
        self.page = 1;
        true
    }

    /// Switches the plant-type filter and resets to the first page.
    pub fn set_cycle(&mut self, cycle: Option<PlantType>) {
        self.cycle = cycle;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn cycle(&self) -> Option<PlantType> {
        self.cycle
    }

    /// The search parameters for the current committed state.
    pub fn query(&self) -> PlantQuery {
        PlantQuery {
            name: (!self.committed.is_empty()).then(|| self.committed.clone()),
            cycle: self.cycle,
            page: Some(self.page),
            per_page: Some(PICKER_PER_PAGE),
        }
    }
}
