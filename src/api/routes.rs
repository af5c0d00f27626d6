use actix_web::web;

use crate::api::handlers::{
    beds::{get_bed, list_bed_plantings},
    plantings::{create_planting, delete_planting, update_planting},
    plants::list_plants,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_bed)
            .service(list_bed_plantings)
            .service(create_planting)
            .service(update_planting)
            .service(delete_planting)
            .service(list_plants),
    );
}
