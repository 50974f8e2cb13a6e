//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::EventBus;
use crate::service::LibraryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The library sits behind a single mutex: every operation resolves,
/// transfers, and notifies while holding it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Library service for all business logic.
    pub library: Arc<Mutex<LibraryService>>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}

impl AppState {
    /// Wraps a service in shared state, reusing its event bus.
    #[must_use]
    pub fn new(library: LibraryService) -> Self {
        let event_bus = library.event_bus().clone();
        Self {
            library: Arc::new(Mutex::new(library)),
            event_bus,
        }
    }
}
