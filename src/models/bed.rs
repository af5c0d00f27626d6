use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// A rectangular planting area inside a garden. Dimensions are in feet;
/// the layout grid maps one cell to one linear foot.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bed {
    pub id: i64,
    pub garden_id: i64,
    pub name: String,
    pub width_ft: Option<i32>,
    pub length_ft: Option<i32>,
    pub sun_exposure_override: Option<String>,
    pub soil_amendments: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bed {
    /// Grid columns (width). Zero when the dimension is unset or non-positive.
    pub fn grid_cols(&self) -> usize {
        self.width_ft.filter(|w| *w > 0).unwrap_or(0) as usize
    }

    /// Grid rows (length). Zero when the dimension is unset or non-positive.
    pub fn grid_rows(&self) -> usize {
        self.length_ft.filter(|l| *l > 0).unwrap_or(0) as usize
    }

    /// The layout designer is available only when both dimensions are set.
    pub fn grid_enabled(&self) -> bool {
        self.grid_cols() > 0 && self.grid_rows() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bed(width_ft: Option<i32>, length_ft: Option<i32>) -> Bed {
        Bed {
            id: 1,
            garden_id: 1,
            name: "Test bed".into(),
            width_ft,
            length_ft,
            sun_exposure_override: None,
            soil_amendments: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_grid_enabled_requires_both_dimensions() {
        assert!(bed(Some(4), Some(8)).grid_enabled());
        assert!(!bed(Some(4), None).grid_enabled());
        assert!(!bed(None, Some(8)).grid_enabled());
        assert!(!bed(None, None).grid_enabled());
    }

    #[test]
    fn test_zero_or_negative_dimension_disables_grid() {
        assert!(!bed(Some(0), Some(8)).grid_enabled());
        assert!(!bed(Some(4), Some(-2)).grid_enabled());
        assert_eq!(bed(Some(-2), Some(8)).grid_cols(), 0);
    }
}
