use actix_web::{get, web, HttpResponse, Responder};

use crate::api::{store_error_response, ErrorBody};
use crate::data::memory::MemoryStore;
use crate::data::PlantingStore;
use crate::models::bed::Bed;
use crate::models::planting::Planting;

/// GET /api/beds/{id}
/// Returns a single bed, including the grid dimensions the layout designer
/// needs.
#[utoipa::path(
    get,
    path = "/api/beds/{id}",
    tag = "beds",
    params(("id" = i64, Path, description = "Bed id")),
    responses(
        (status = 200, description = "The bed", body = Bed),
        (status = 404, description = "Bed not found", body = ErrorBody),
    )
)]
#[get("/beds/{id}")]
pub async fn get_bed(store: web::Data<MemoryStore>, path: web::Path<i64>) -> impl Responder {
    match store.get_bed(path.into_inner()).await {
        Ok(bed) => HttpResponse::Ok().json(bed),
        Err(err) => store_error_response(&err),
    }
}

/// GET /api/beds/{id}/plantings
/// Returns every planting in the bed, placed or not. The client rebuilds
/// its occupancy grid from this list after each mutation.
#[utoipa::path(
    get,
    path = "/api/beds/{id}/plantings",
    tag = "beds",
    params(("id" = i64, Path, description = "Bed id")),
    responses(
        (status = 200, description = "Plantings in the bed", body = [Planting]),
        (status = 404, description = "Bed not found", body = ErrorBody),
    )
)]
#[get("/beds/{id}/plantings")]
pub async fn list_bed_plantings(
    store: web::Data<MemoryStore>,
    path: web::Path<i64>,
) -> impl Responder {
    match store.list_plantings(path.into_inner()).await {
        Ok(plantings) => HttpResponse::Ok().json(plantings),
        Err(err) => store_error_response(&err),
    }
}
