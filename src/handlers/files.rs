use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{http::Method, web, HttpResponse};

use crate::error::ApiError;
use crate::services::storage::Storage;

#[derive(MultipartForm)]
pub struct UploadForm {
    #[multipart(rename = "file")]
    files: Vec<TempFile>,
}

/// POST /upload. One file per request; extra parts under the same field are
/// ignored.
pub async fn upload(
    storage: web::Data<Storage>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> Result<HttpResponse, ApiError> {
    let file = match form.files.into_iter().next() {
        Some(file) => file,
        None => {
            log::warn!("upload request without a file part");
            return Err(ApiError::MissingFile);
        }
    };

    let stored = storage.store(file).map_err(|e| {
        log::error!("failed to persist upload: {}", e);
        ApiError::Store(e)
    })?;

    log::info!(
        "stored {} as {} ({} bytes, {})",
        stored.original_name,
        stored.name,
        stored.size,
        stored.content_type
    );

    Ok(HttpResponse::Ok().body("File uploaded successfully!"))
}

/// GET /files. Raw directory entry names, no filtering.
pub async fn list(storage: web::Data<Storage>) -> Result<HttpResponse, ApiError> {
    let names = storage.list().await.map_err(|e| {
        log::error!("failed to read uploads directory: {}", e);
        ApiError::ReadDir(e)
    })?;

    Ok(HttpResponse::Ok().json(names))
}

/// GET /uploads/{name}. Streams a stored file back out.
pub async fn serve_upload(
    storage: web::Data<Storage>,
    name: web::Path<String>,
    method: Method,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();
    match storage.open(&name).await {
        Some((size, file)) => Ok(super::stream_file(&name, size, file, method)),
        None => Err(ApiError::NotFound),
    }
}
