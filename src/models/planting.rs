use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::plant::PlantType;
use crate::models::Coord;

/// Plant fields embedded in a planting record; enough to render the grid
/// cell and compute the footprint without a second catalogue fetch.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantingPlant {
    pub id: i64,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub plant_type: Option<PlantType>,
    pub spacing_inches: Option<f64>,
    pub image_url: Option<String>,
    pub source: String,
}

/// A plant instance occupying a square footprint anchored at a grid cell.
/// `grid_x`/`grid_y` are null while the planting has not been placed.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Planting {
    pub id: i64,
    pub bed_id: i64,
    pub plant_id: i64,
    pub plant: Option<PlantingPlant>,
    pub status: String,
    pub date_planted: Option<NaiveDate>,
    pub quantity: u32,
    pub notes: Option<String>,
    pub grid_x: Option<i32>,
    pub grid_y: Option<i32>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Planting {
    /// Top-left cell of the footprint, when placed on the grid.
    pub fn anchor(&self) -> Option<Coord> {
        match (self.grid_x, self.grid_y) {
            (Some(x), Some(y)) => Some(Coord::new(x, y)),
            _ => None,
        }
    }

    pub fn spacing_inches(&self) -> Option<f64> {
        self.plant.as_ref().and_then(|p| p.spacing_inches)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlantingCreate {
    pub bed_id: i64,
    pub plant_id: i64,
    pub grid_x: Option<i32>,
    pub grid_y: Option<i32>,
    pub quantity: Option<u32>,
}

/// Partial update. The grid engine only ever sets `grid_x`/`grid_y`
/// together, or `is_locked` alone.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PlantingPatch {
    pub grid_x: Option<i32>,
    pub grid_y: Option<i32>,
    pub is_locked: Option<bool>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl PlantingPatch {
    /// Patch that relocates a planting's anchor.
    pub fn move_to(cell: Coord) -> Self {
        Self {
            grid_x: Some(cell.x),
            grid_y: Some(cell.y),
            ..Self::default()
        }
    }

    /// Patch that only toggles the lock flag.
    pub fn locked(locked: bool) -> Self {
        Self {
            is_locked: Some(locked),
            ..Self::default()
        }
    }
}
