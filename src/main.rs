use actix_web::{middleware::Logger, web, App, HttpServer};
use blogly::config::EnvConfig;
use blogly::db::database_service::DatabaseService;
use blogly::routes::configure_routes;
use blogly::templates::Templates;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("{}:{}", config.host, config.port);

    let database_service = Arc::new(
        DatabaseService::new(
            &config.db_url,
        )
            .await
            .expect("Failed to initialize DatabaseService")
    );
    let templates = web::Data::new(
        Templates::new().expect("Failed to compile templates")
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(templates.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
