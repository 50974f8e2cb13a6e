//! System endpoints: health check and plain-text catalog report.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
    shelves: usize,
    readers: usize,
    unplaced_books: usize,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, current timestamp, and catalog sizes.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let library = state.library.lock().await;
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            shelves: library.shelves().len(),
            readers: library.readers().len(),
            unplaced_books: library.pool().len(),
        }),
    )
}

/// `GET /report` — Plain-text listing of every shelf and reader.
#[utoipa::path(
    get,
    path = "/report",
    tag = "System",
    summary = "Catalog report",
    description = "Renders every shelf with its books followed by every reader, as plain text.",
    responses(
        (status = 200, description = "Catalog report", body = String, content_type = "text/plain"),
    )
)]
pub async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let library = state.library.lock().await;
    let mut report = library.display_shelves();
    report.push_str(&library.display_readers());
    report
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/report", get(report_handler))
}
