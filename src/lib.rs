//! # shelf-gateway
//!
//! REST API and WebSocket gateway for a small library catalog.
//!
//! Shelves hold books, unplaced books wait in a pool, and readers may
//! subscribe to notifications about catalog changes. The core of the crate
//! is book placement and movement: locating a book in the pool or on a
//! source shelf, choosing the matching [`domain::Transfer`] variant, moving
//! ownership of the book onto the destination shelf, and notifying readers.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── LibraryService (service/)
//!     ├── EventBus / NotificationHub (domain/)
//!     │
//!     └── Catalog, BookPool, Shelf, Transfer (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::LibraryOptions;
use crate::domain::{BookPool, Catalog, EventBus, NotificationHub};
use crate::service::LibraryService;

/// Builds an empty library service with a fresh event bus.
#[must_use]
pub fn build_library(
    event_bus_capacity: usize,
    inbox_capacity: usize,
    options: LibraryOptions,
) -> LibraryService {
    LibraryService::new(
        Catalog::new(),
        BookPool::new(),
        NotificationHub::with_inbox_capacity(inbox_capacity),
        EventBus::new(event_bus_capacity),
        options,
    )
}

/// Builds the full application router (REST, WebSocket, middleware) around
/// the given state.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws::handler::ws_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
