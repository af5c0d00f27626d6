use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a freshly locked planting keeps its transition highlight after
/// the update resolves.
pub const LOCK_ANIMATION: Duration = Duration::from_millis(600);

/// Plantings in a transient "just locked" visual state, tracked separately
/// from the persisted `is_locked` flag so the UI reacts before the network
/// round trip completes.
///
/// A `None` deadline means the lock request is still in flight.
#[derive(Debug, Default)]
pub struct LockAnimations {
    entries: HashMap<i64, Option<Instant>>,
}

impl LockAnimations {
    /// Adds the planting at lock-request time, before the update is issued.
    pub fn begin(&mut self, planting_id: i64) {
        self.entries.insert(planting_id, None);
    }

    /// The update succeeded; keep the highlight for [`LOCK_ANIMATION`].
    pub fn settle(&mut self, planting_id: i64, now: Instant) {
        self.entries.insert(planting_id, Some(now + LOCK_ANIMATION));
    }

    /// The update failed; drop the highlight immediately since `is_locked`
    /// never actually changed.
    pub fn cancel(&mut self, planting_id: i64) {
        self.entries.remove(&planting_id);
    }

    /// Removes entries whose display window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        self.entries
            .retain(|_, deadline| deadline.is_none_or(|d| now < d));
    }

    pub fn contains(&self, planting_id: i64) -> bool {
        self.entries.contains_key(&planting_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_starts_at_request_time() {
        let mut locks = LockAnimations::default();
        locks.begin(5);
        assert!(locks.contains(5));
    }

    #[test]
    fn test_in_flight_entry_survives_tick() {
        let mut locks = LockAnimations::default();
        locks.begin(5);
        locks.tick(Instant::now() + Duration::from_secs(60));
        assert!(locks.contains(5), "no deadline until the update resolves");
    }

    #[test]
    fn test_settled_entry_expires_after_display_window() {
        let mut locks = LockAnimations::default();
        let now = Instant::now();
        locks.begin(5);
        locks.settle(5, now);
        locks.tick(now + Duration::from_millis(599));
        assert!(locks.contains(5));
        locks.tick(now + LOCK_ANIMATION);
        assert!(!locks.contains(5));
    }

    #[test]
    fn test_cancel_removes_immediately_on_failure() {
        let mut locks = LockAnimations::default();
        locks.begin(5);
        locks.cancel(5);
        assert!(!locks.contains(5));
    }
}
