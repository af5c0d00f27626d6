use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use log::debug;

use crate::data::catalog::{search_plants, seed_plants};
use crate::data::{PlantingStore, StoreError};
use crate::models::bed::Bed;
use crate::models::plant::{PlantPage, PlantQuery, PlantSummary};
use crate::models::planting::{Planting, PlantingCreate, PlantingPatch, PlantingPlant};

const DEFAULT_PER_PAGE: usize = 12;

#[derive(Debug, Default)]
struct Inner {
    beds: HashMap<i64, Bed>,
    plantings: HashMap<i64, Planting>,
    plants: Vec<PlantSummary>,
    next_bed_id: i64,
    next_planting_id: i64,
}

/// In-memory persistence backend, seeded with the built-in plant catalogue.
/// Cheap to clone; clones share state, the way the server shares it across
/// workers via `web::Data`.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                plants: seed_plants(),
                next_bed_id: 1,
                next_planting_id: 1,
                ..Inner::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("store mutex poisoned")
    }

    /// Inserts a bed and returns it with its assigned id.
    pub fn seed_bed(
        &self,
        garden_id: i64,
        name: &str,
        width_ft: Option<i32>,
        length_ft: Option<i32>,
    ) -> Bed {
        let mut inner = self.lock();
        let id = inner.next_bed_id;
        inner.next_bed_id += 1;
        let now = Utc::now();
        let bed = Bed {
            id,
            garden_id,
            name: name.into(),
            width_ft,
            length_ft,
            sun_exposure_override: None,
            soil_amendments: None,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        inner.beds.insert(id, bed.clone());
        bed
    }

    /// Synchronous lookup used by request handlers that need the record
    /// before deciding how to validate a patch.
    pub fn planting(&self, id: i64) -> Result<Planting, StoreError> {
        self.lock()
            .plantings
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("planting", id))
    }

    pub fn plant_summary(&self, id: i64) -> Result<PlantSummary, StoreError> {
        self.lock()
            .plants
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::not_found("plant", id))
    }
}

impl PlantingStore for MemoryStore {
    async fn get_bed(&self, id: i64) -> Result<Bed, StoreError> {
        self.lock()
            .beds
            .get(&id)
            .cloned()
            .ok_or(StoreError::not_found("bed", id))
    }

    async fn list_plantings(&self, bed_id: i64) -> Result<Vec<Planting>, StoreError> {
        let inner = self.lock();
        if !inner.beds.contains_key(&bed_id) {
            return Err(StoreError::not_found("bed", bed_id));
        }
        let mut plantings: Vec<Planting> = inner
            .plantings
            .values()
            .filter(|p| p.bed_id == bed_id)
            .cloned()
            .collect();
        // Stable iteration order for the occupancy builder.
        plantings.sort_by_key(|p| p.id);
        Ok(plantings)
    }

    async fn create_planting(&self, req: PlantingCreate) -> Result<Planting, StoreError> {
        if req.grid_x.is_some() != req.grid_y.is_some() {
            return Err(StoreError::IncompletePosition);
        }
        let plant = self.plant_summary(req.plant_id)?;
        let mut inner = self.lock();
        if !inner.beds.contains_key(&req.bed_id) {
            return Err(StoreError::not_found("bed", req.bed_id));
        }
        let id = inner.next_planting_id;
        inner.next_planting_id += 1;
        let now = Utc::now();
        let planting = Planting {
            id,
            bed_id: req.bed_id,
            plant_id: req.plant_id,
            plant: Some(PlantingPlant {
                id: plant.id,
                common_name: plant.common_name,
                scientific_name: plant.scientific_name,
                plant_type: plant.plant_type,
                spacing_inches: plant.spacing_inches,
                image_url: plant.image_url,
                source: plant.source,
            }),
            status: "active".into(),
            date_planted: None,
            quantity: req.quantity.unwrap_or(1),
            notes: None,
            grid_x: req.grid_x,
            grid_y: req.grid_y,
            is_locked: false,
            created_at: now,
            updated_at: now,
        };
        debug!("created planting {id} in bed {}", req.bed_id);
        inner.plantings.insert(id, planting.clone());
        Ok(planting)
    }

    async fn update_planting(&self, id: i64, patch: PlantingPatch) -> Result<Planting, StoreError> {
        if patch.grid_x.is_some() != patch.grid_y.is_some() {
            return Err(StoreError::IncompletePosition);
        }
        let mut inner = self.lock();
        let planting = inner
            .plantings
            .get_mut(&id)
            .ok_or(StoreError::not_found("planting", id))?;
        if let (Some(x), Some(y)) = (patch.grid_x, patch.grid_y) {
            planting.grid_x = Some(x);
            planting.grid_y = Some(y);
        }
        if let Some(locked) = patch.is_locked {
            planting.is_locked = locked;
        }
        if let Some(status) = patch.status {
            planting.status = status;
        }
        if let Some(notes) = patch.notes {
            planting.notes = Some(notes);
        }
        planting.updated_at = Utc::now();
        Ok(planting.clone())
    }

    async fn delete_planting(&self, id: i64) -> Result<(), StoreError> {
        self.lock()
            .plantings
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::not_found("planting", id))
    }

    async fn list_plants(&self, query: PlantQuery) -> Result<PlantPage, StoreError> {
        let inner = self.lock();
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
        let (items, total) =
            search_plants(&inner.plants, query.name.as_deref(), query.cycle, page, per_page);
        Ok(PlantPage {
            items,
            total,
            page,
            per_page,
        })
    }
}
