use utoipa::OpenApi;

use crate::api::ErrorBody;
use crate::models::{
    bed::Bed,
    plant::{PlantPage, PlantSummary, PlantType},
    planting::{Planting, PlantingCreate, PlantingPatch, PlantingPlant},
    Coord,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Bed Layout API",
        description = "Bed layout designer backend: beds expose a one-cell-per-foot planting grid; plantings occupy square footprints derived from plant spacing and can be placed, moved, locked and removed, with server-side overlap validation.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::beds::get_bed,
        crate::api::handlers::beds::list_bed_plantings,
        crate::api::handlers::plantings::create_planting,
        crate::api::handlers::plantings::update_planting,
        crate::api::handlers::plantings::delete_planting,
        crate::api::handlers::plants::list_plants,
    ),
    components(
        schemas(
            // Enums and shared
            PlantType, Coord, ErrorBody,
            // Beds
            Bed,
            // Plantings
            Planting, PlantingPlant, PlantingCreate, PlantingPatch,
            // Plant catalogue
            PlantSummary, PlantPage,
        )
    ),
    tags(
        (name = "beds",      description = "Bed lookup and per-bed planting lists"),
        (name = "plantings", description = "Planting placement — create, move, lock, delete"),
        (name = "plants",    description = "Plant catalogue search for the picker"),
    )
)]
pub struct ApiDoc;
