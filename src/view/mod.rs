pub mod bed_view;
pub mod drag;
pub mod lock;
pub mod picker;

/// Presentation-only cell scaling. Zoom never changes occupancy data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zoom {
    S,
    #[default]
    M,
    L,
}

impl Zoom {
    pub fn cell_px(self) -> u32 {
        match self {
            Zoom::S => 24,
            Zoom::M => 48,
            Zoom::L => 72,
        }
    }

    /// Plant name labels are only legible at medium size and up.
    pub fn shows_labels(self) -> bool {
        self.cell_px() >= 48
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_hidden_at_small_zoom_only() {
        assert!(!Zoom::S.shows_labels());
        assert!(Zoom::M.shows_labels());
        assert!(Zoom::L.shows_labels());
    }
}
