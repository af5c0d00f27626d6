use actix_web::{delete, patch, post, web, HttpResponse, Responder};

use crate::api::{store_error_response, ErrorBody};
use crate::data::memory::MemoryStore;
use crate::data::{PlantingStore, StoreError};
use crate::logic::footprint::{footprint_for, planting_footprint};
use crate::logic::occupancy::Occupancy;
use crate::logic::validator::{creation_conflict, placement_valid};
use crate::models::planting::{Planting, PlantingCreate, PlantingPatch};
use crate::models::Coord;

/// POST /api/plantings
/// Creates a planting, optionally anchored on the bed grid. Placement is
/// re-checked server-side with the same conflict rule the picker uses.
#[utoipa::path(
    post,
    path = "/api/plantings",
    tag = "plantings",
    request_body = PlantingCreate,
    responses(
        (status = 201, description = "Created planting", body = Planting),
        (status = 400, description = "Incomplete grid position", body = ErrorBody),
        (status = 404, description = "Bed or plant not found", body = ErrorBody),
        (status = 409, description = "Footprint overlaps another planting", body = ErrorBody),
    )
)]
#[post("/plantings")]
pub async fn create_planting(
    store: web::Data<MemoryStore>,
    body: web::Json<PlantingCreate>,
) -> impl Responder {
    let request = body.into_inner();
    if request.grid_x.is_some() != request.grid_y.is_some() {
        return store_error_response(&StoreError::IncompletePosition);
    }

    if let (Some(x), Some(y)) = (request.grid_x, request.grid_y) {
        let bed = match store.get_bed(request.bed_id).await {
            Ok(bed) => bed,
            Err(err) => return store_error_response(&err),
        };
        let plant = match store.plant_summary(request.plant_id) {
            Ok(plant) => plant,
            Err(err) => return store_error_response(&err),
        };
        if bed.grid_enabled() {
            let plantings = match store.list_plantings(bed.id).await {
                Ok(plantings) => plantings,
                Err(err) => return store_error_response(&err),
            };
            let occupancy = Occupancy::build(&plantings, bed.grid_cols(), bed.grid_rows());
            let fp = footprint_for(plant.spacing_inches);
            if creation_conflict(&occupancy, Coord::new(x, y), fp) {
                return HttpResponse::Conflict().json(ErrorBody::new(
                    "Not enough space — another plant is in the way.",
                ));
            }
        }
    }

    match store.create_planting(request).await {
        Ok(planting) => HttpResponse::Created().json(planting),
        Err(err) => store_error_response(&err),
    }
}

/// PATCH /api/plantings/{id}
/// Partial update. A grid move must supply both coordinates and pass the
/// placement validator, which excludes the planting's own footprint.
#[utoipa::path(
    patch,
    path = "/api/plantings/{id}",
    tag = "plantings",
    params(("id" = i64, Path, description = "Planting id")),
    request_body = PlantingPatch,
    responses(
        (status = 200, description = "Updated planting", body = Planting),
        (status = 400, description = "Incomplete grid position", body = ErrorBody),
        (status = 404, description = "Planting not found", body = ErrorBody),
        (status = 409, description = "Invalid placement", body = ErrorBody),
    )
)]
#[patch("/plantings/{id}")]
pub async fn update_planting(
    store: web::Data<MemoryStore>,
    path: web::Path<i64>,
    body: web::Json<PlantingPatch>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = body.into_inner();
    if patch.grid_x.is_some() != patch.grid_y.is_some() {
        return store_error_response(&StoreError::IncompletePosition);
    }

    if let (Some(x), Some(y)) = (patch.grid_x, patch.grid_y) {
        let planting = match store.planting(id) {
            Ok(planting) => planting,
            Err(err) => return store_error_response(&err),
        };
        let bed = match store.get_bed(planting.bed_id).await {
            Ok(bed) => bed,
            Err(err) => return store_error_response(&err),
        };
        if bed.grid_enabled() {
            let plantings = match store.list_plantings(bed.id).await {
                Ok(plantings) => plantings,
                Err(err) => return store_error_response(&err),
            };
            let occupancy = Occupancy::build(&plantings, bed.grid_cols(), bed.grid_rows());
            let valid = placement_valid(
                &occupancy,
                &plantings,
                Coord::new(x, y),
                planting_footprint(&planting),
                Some(id),
            );
            if !valid {
                return HttpResponse::Conflict().json(ErrorBody::new(
                    "Placement is out of bounds or overlaps another planting.",
                ));
            }
        }
    }

    match store.update_planting(id, patch).await {
        Ok(planting) => HttpResponse::Ok().json(planting),
        Err(err) => store_error_response(&err),
    }
}

/// DELETE /api/plantings/{id}
#[utoipa::path(
    delete,
    path = "/api/plantings/{id}",
    tag = "plantings",
    params(("id" = i64, Path, description = "Planting id")),
    responses(
        (status = 204, description = "Planting removed"),
        (status = 404, description = "Planting not found", body = ErrorBody),
    )
)]
#[delete("/plantings/{id}")]
pub async fn delete_planting(store: web::Data<MemoryStore>, path: web::Path<i64>) -> impl Responder {
    match store.delete_planting(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => store_error_response(&err),
    }
}
