use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::AppState;
use crate::favicon::{APPLE_ICON_SIZE, ICON_SIZE, favicon_ico, icon_png};
use favicon_core::{FAVICON_SIZES, FaviconError, IcoError, RenderError, ValidationError};

const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";
const CONTENT_TYPE_ICO: &str = "image/x-icon";
const CONTENT_TYPE_PNG: &str = "image/png";

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn favicon(State(state): State<AppState>) -> Result<Response, AppError> {
    tracing::info!(sizes = ?FAVICON_SIZES, "generating favicon.ico");
    let body = favicon_ico(state.renderer.as_ref())?;
    Ok(image_response(CONTENT_TYPE_ICO, body))
}

pub async fn icon(State(state): State<AppState>) -> Result<Response, AppError> {
    tracing::info!(size = ICON_SIZE, "generating icon.png");
    let body = icon_png(state.renderer.as_ref(), ICON_SIZE)?;
    Ok(image_response(CONTENT_TYPE_PNG, body))
}

pub async fn apple_icon(State(state): State<AppState>) -> Result<Response, AppError> {
    tracing::info!(size = APPLE_ICON_SIZE, "generating apple-icon.png");
    let body = icon_png(state.renderer.as_ref(), APPLE_ICON_SIZE)?;
    Ok(image_response(CONTENT_TYPE_PNG, body))
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

fn image_response(content_type: &'static str, body: Bytes) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        body,
    )
        .into_response()
}

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal(String),
}

impl From<FaviconError> for AppError {
    fn from(err: FaviconError) -> Self {
        match err {
            FaviconError::Validation(validation_err) => validation_err.into(),
            FaviconError::Render(render_err) => render_err.into(),
            FaviconError::Ico(ico_err) => ico_err.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        // サイズは固定値なので、ここに来るのは設定ミスのみ
        tracing::error!(error = %err, "invalid icon parameters");
        AppError::Internal(err.to_string())
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        tracing::error!(error = %err, "icon rendering failed");
        AppError::Internal(err.to_string())
    }
}

impl From<IcoError> for AppError {
    fn from(err: IcoError) -> Self {
        tracing::error!(error = %err, "ico assembly failed");
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
