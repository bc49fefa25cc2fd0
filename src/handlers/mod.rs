pub mod assets;
pub mod files;

use std::io;

use actix_web::body::SizedStream;
use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use futures_util::{stream, StreamExt};
use tokio_util::io::ReaderStream;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/upload").route(web::post().to(files::upload)))
        .service(web::resource("/files").route(web::get().to(files::list)))
        .service(
            web::resource("/uploads/{name}")
                .route(web::get().to(files::serve_upload))
                .route(web::head().to(files::serve_upload)),
        )
        .service(
            web::resource("/")
                .route(web::get().to(assets::index))
                .route(web::head().to(assets::index)),
        )
        .service(
            web::resource("/{asset}")
                .route(web::get().to(assets::serve_asset))
                .route(web::head().to(assets::serve_asset)),
        );
}

fn stream_file(name: &str, size: u64, file: tokio::fs::File, method: Method) -> HttpResponse {
    let content_type = mime_guess::from_path(name).first_or_octet_stream();

    let stream = match method {
        // data stream for GET requests
        Method::GET => ReaderStream::new(file).boxed_local(),

        // empty stream for HEAD requests
        Method::HEAD => stream::empty::<Result<_, io::Error>>().boxed_local(),

        _ => unreachable!(),
    };

    HttpResponse::Ok()
        .content_type(content_type)
        .no_chunking(size)
        .body(SizedStream::new(size, stream))
}
