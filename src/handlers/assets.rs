use std::path::Path;

use actix_web::{http::Method, web, HttpResponse};

use crate::config::Config;
use crate::error::ApiError;
use crate::services::storage;

pub async fn index(config: web::Data<Config>, method: Method) -> Result<HttpResponse, ApiError> {
    serve(&config, "index.html", method).await
}

pub async fn serve_asset(
    config: web::Data<Config>,
    asset: web::Path<String>,
    method: Method,
) -> Result<HttpResponse, ApiError> {
    serve(&config, &asset.into_inner(), method).await
}

async fn serve(config: &Config, name: &str, method: Method) -> Result<HttpResponse, ApiError> {
    let dir = Path::new(&config.static_dir);
    match storage::open_in_dir(dir, name).await {
        Some((size, file)) => Ok(super::stream_file(name, size, file, method)),
        None => Err(ApiError::NotFound),
    }
}
