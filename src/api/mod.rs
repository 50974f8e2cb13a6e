//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`; health and report
//! endpoints live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "shelf-gateway", description = "Library catalog REST API"),
    paths(
        handlers::shelf::create_shelf,
        handlers::shelf::list_shelves,
        handlers::shelf::get_shelf,
        handlers::shelf::delete_shelf,
        handlers::book::create_book,
        handlers::book::list_pool,
        handlers::book::place_book,
        handlers::book::move_book,
        handlers::reader::create_reader,
        handlers::reader::list_readers,
        handlers::reader::get_reader,
        handlers::reader::delete_reader,
        handlers::reader::subscribe,
        handlers::reader::unsubscribe,
        handlers::system::health_handler,
        handlers::system::report_handler,
    ),
    tags(
        (name = "Shelves", description = "Shelf management"),
        (name = "Books", description = "Book creation, placement, and movement"),
        (name = "Readers", description = "Readers and notification subscriptions"),
        (name = "System", description = "Health and reporting"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
