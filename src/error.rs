use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::io;

/// Request-level failures; wire bodies are fixed strings, detail stays in the
/// server log.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("no file present in upload request")]
    MissingFile,

    #[error("failed to read uploads directory: {0}")]
    ReadDir(#[source] io::Error),

    #[error("failed to persist uploaded file: {0}")]
    Store(#[source] io::Error),

    #[error("file not found")]
    NotFound,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile => StatusCode::BAD_REQUEST,
            ApiError::ReadDir(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::MissingFile => HttpResponse::BadRequest().body("Please upload a file!"),
            ApiError::ReadDir(_) => HttpResponse::InternalServerError().body("Error reading files"),
            ApiError::Store(_) => HttpResponse::InternalServerError().body("Error storing file"),
            ApiError::NotFound => HttpResponse::NotFound().finish(),
        }
    }
}
