//! Domain layer: catalog entities, book transfers, and the event system.
//!
//! This module contains books, shelves, the unplaced-book pool, the
//! catalog registry, the transfer variants used to relocate books, the
//! reader notification hub, and the event bus for broadcasting state
//! changes.

pub mod book;
pub mod book_pool;
pub mod catalog;
pub mod event_bus;
pub mod library_event;
pub mod notification_hub;
pub mod reader;
pub mod shelf;
pub mod transfer;

pub use book::{Book, BookKey};
pub use book_pool::BookPool;
pub use catalog::Catalog;
pub use event_bus::EventBus;
pub use library_event::{LibraryEvent, OrphanedBooks};
pub use notification_hub::NotificationHub;
pub use reader::Reader;
pub use shelf::Shelf;
pub use transfer::{Transfer, TransferKind};
