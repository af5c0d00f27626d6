use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use gardenbed::api::openapi::ApiDoc;
use gardenbed::data::memory::MemoryStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let store = MemoryStore::new();
    let demo = store.seed_bed(1, "Kitchen garden bed", Some(8), Some(4));

    let bind_addr = "0.0.0.0:8080";
    println!("🌱 Garden bed layout API started at http://{bind_addr}");
    println!("   GET    /api/beds/{{id}}  (demo bed id: {})", demo.id);
    println!("   GET    /api/beds/{{id}}/plantings");
    println!("   POST   /api/plantings");
    println!("   PATCH  /api/plantings/{{id}}");
    println!("   DELETE /api/plantings/{{id}}");
    println!("   GET    /api/plants");
    println!("   ");
    println!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    println!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(store.clone()))
            .configure(gardenbed::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
