//! Service layer: business logic orchestration.
//!
//! [`LibraryService`] resolves names to catalog entities, runs book
//! transfers, and emits events through the [`super::domain::EventBus`]
//! and the reader [`super::domain::NotificationHub`].

pub mod library_service;

pub use library_service::{LibraryService, TransferOutcome};
