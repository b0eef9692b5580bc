//! HTTP route handlers for the editor backend.
//!
//! Handlers only translate between HTTP and the `editor` crate: every
//! resolver failure is converted into a response here, so one bad request
//! never takes down the listener.

use std::path::PathBuf;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path as UrlPath, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use editor::core::assets::AssetPath;
use editor::core::images::decode_image_name;
use editor::error::{DatasetError, ServeError};
use editor::io::dataset::save_dataset;
use editor::io::serve::{resolve_asset, resolve_image};
use serde::Serialize;
use serde_json::Value;
use tower_http::services::ServeFile;
use tracing::error;

use crate::state::AppState;

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(editor_page))
        .route("/edit.html", get(editor_page))
        .route("/external_image/{name}", get(external_image))
        .route("/save_cards", post(save_cards))
        .route("/{*path}", get(serve_asset))
        .with_state(state)
}

/// GET / and /edit.html - the editor main page.
async fn editor_page(State(state): State<AppState>, req: Request) -> Response {
    let page = state.config.edit_page_path();
    if !page.is_file() {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }
    match stream_file(page, req).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "error streaming editor page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error serving file").into_response()
        }
    }
}

/// GET /{*path} - allow-listed static assets and the dataset document.
///
/// Any rejection is a plain 404; the response does not distinguish
/// "disallowed" from "absent".
async fn serve_asset(
    State(state): State<AppState>,
    UrlPath(path): UrlPath<String>,
    req: Request,
) -> Response {
    let resolved = AssetPath::parse(&path, &state.config.cards_file)
        .and_then(|asset| resolve_asset(&state.config, &asset));
    match resolved {
        Ok(full) => match stream_file(full, req).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "error streaming asset");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error serving file").into_response()
            }
        },
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// GET /external_image/{name} - card images from the configured image root.
///
/// The filename is screened in its raw percent-encoded form and again after
/// decoding, so neither literal nor encoded traversal sequences reach the
/// filesystem.
async fn external_image(State(state): State<AppState>, req: Request) -> Response {
    let raw = req
        .uri()
        .path()
        .strip_prefix("/external_image/")
        .unwrap_or_default();
    let resolved =
        decode_image_name(raw).and_then(|name| resolve_image(&state.config, &name));
    match resolved {
        Ok(full) => match stream_file(full, req).await {
            Ok(response) => response,
            Err(err) => image_error_response(ServeError::Io(err)),
        },
        Err(err) => image_error_response(err),
    }
}

fn image_error_response(err: ServeError) -> Response {
    match err {
        ServeError::NotFound => (StatusCode::NOT_FOUND, "Image not found"),
        ServeError::InvalidFilename => (StatusCode::BAD_REQUEST, "Invalid filename"),
        ServeError::Configuration(msg) => {
            error!(error = %msg, "image root misconfigured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
        }
        ServeError::Io(err) => {
            error!(error = %err, "error serving image");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error serving image")
        }
    }
    .into_response()
}

/// Stream a resolved file with a content type inferred from its extension.
///
/// `ServeFile` reads the file in chunks, so large assets are never buffered
/// whole; it also honors range and conditional request headers from `req`.
/// I/O failures are returned to the caller, which owns the route-specific
/// error body.
async fn stream_file(path: PathBuf, req: Request) -> Result<Response, std::io::Error> {
    let response = ServeFile::new(path).try_call(req).await?;
    Ok(response.into_response())
}

#[derive(Serialize)]
struct SaveResponse {
    status: &'static str,
    message: String,
}

fn save_error(message: String) -> Json<SaveResponse> {
    Json(SaveResponse {
        status: "error",
        message,
    })
}

/// POST /save_cards - whole-document dataset replace.
async fn save_cards(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<SaveResponse>) {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                save_error("Invalid JSON data received".to_string()),
            );
        }
    };
    match save_dataset(&state.config.cards_path(), &value) {
        Ok(()) => (
            StatusCode::OK,
            Json(SaveResponse {
                status: "success",
                message: "Cards saved successfully".to_string(),
            }),
        ),
        Err(DatasetError::InvalidPayload) => (
            StatusCode::BAD_REQUEST,
            save_error(DatasetError::InvalidPayload.to_string()),
        ),
        Err(DatasetError::Storage(err)) => {
            error!(error = %err, "failed to save dataset");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                save_error(format!("An error occurred: {err:#}")),
            )
        }
    }
}
