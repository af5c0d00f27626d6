use actix_web::{get, web, HttpResponse, Responder};

use crate::api::store_error_response;
use crate::data::memory::MemoryStore;
use crate::data::PlantingStore;
use crate::models::plant::{PlantPage, PlantQuery};

/// GET /api/plants
/// Paginated catalogue search, consumed by the plant picker. `name` is a
/// case-insensitive partial match; `cycle` narrows to one plant type.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    params(PlantQuery),
    responses(
        (status = 200, description = "One page of matching plants", body = PlantPage),
    )
)]
#[get("/plants")]
pub async fn list_plants(
    store: web::Data<MemoryStore>,
    query: web::Query<PlantQuery>,
) -> impl Responder {
    match store.list_plants(query.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => store_error_response(&err),
    }
}
