mod config;
mod error;
mod handlers;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::config::Config;
use crate::services::storage::Storage;

fn cors_layer(config: &Config) -> Cors {
    if config.is_development || config.cors_domains.is_empty() {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .max_age(3600);
    for domain in &config.cors_domains {
        cors = cors.allowed_origin(domain);
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::new();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let storage = Storage::new(&config.uploads_dir);
    if !storage.root().is_dir() {
        // The uploads directory is expected to be provisioned ahead of time.
        log::warn!(
            "uploads directory {} does not exist; uploads and listings will fail until it is created",
            storage.root().display()
        );
    }

    let bind_addr = format!("0.0.0.0:{}", config.service_port);
    log::info!("Server listening on port {}", config.service_port);

    let config = web::Data::new(config);
    let storage = web::Data::new(storage);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .app_data(storage.clone())
            .wrap(Logger::default())
            .wrap(cors_layer(&config))
            .configure(handlers::routes)
    })
    .bind(bind_addr)?
    .workers(2)
    .run()
    .await
}
