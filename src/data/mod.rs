use thiserror::Error;

use crate::models::bed::Bed;
use crate::models::plant::{PlantPage, PlantQuery};
use crate::models::planting::{Planting, PlantingCreate, PlantingPatch};

pub mod catalog;
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },
    #[error("grid_x and grid_y must be set together")]
    IncompletePosition,
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}

/// Persistence collaborator for the bed layout engine. The engine only ever
/// reads snapshots and issues mutations through this boundary; after every
/// successful mutation the planting list is re-fetched and the occupancy
/// grid rebuilt from it.
#[allow(async_fn_in_trait)]
pub trait PlantingStore {
    async fn get_bed(&self, id: i64) -> Result<Bed, StoreError>;
    async fn list_plantings(&self, bed_id: i64) -> Result<Vec<Planting>, StoreError>;
    async fn create_planting(&self, req: PlantingCreate) -> Result<Planting, StoreError>;
    async fn update_planting(&self, id: i64, patch: PlantingPatch) -> Result<Planting, StoreError>;
    async fn delete_planting(&self, id: i64) -> Result<(), StoreError>;
    async fn list_plants(&self, query: PlantQuery) -> Result<PlantPage, StoreError>;
}
