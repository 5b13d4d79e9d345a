use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

fn serve_embedded(path: &str) -> Response {
    match Assets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.to_string())],
                file.data,
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

pub(in crate::multicall::alvyad::server) async fn index() -> Response {
    serve_embedded("index.html")
}

pub(in crate::multicall::alvyad::server) async fn monitor() -> Response {
    serve_embedded("monitor.html")
}

pub(in crate::multicall::alvyad::server) async fn allocate() -> Response {
    serve_embedded("allocate.html")
}

pub(in crate::multicall::alvyad::server) async fn asset(Path(path): Path<String>) -> Response {
    serve_embedded(&path)
}
