//! Domain events reflecting catalog mutations.
//!
//! Every successful mutation emits a [`LibraryEvent`] through the
//! [`super::EventBus`]. Events that readers care about also render a
//! human-readable notification via [`LibraryEvent::message`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::transfer::TransferKind;

/// What happened to the books of a deleted shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrphanedBooks {
    /// Books went back to the unplaced-book pool.
    ReturnedToPool,
    /// Books were dropped from the catalog.
    Discarded,
}

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum LibraryEvent {
    /// Emitted when a shelf is created.
    ShelfCreated {
        /// Shelf title.
        shelf: String,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a shelf is deleted.
    ShelfDeleted {
        /// Shelf title.
        shelf: String,
        /// Number of books that were on the shelf.
        book_count: usize,
        /// Where those books went.
        books: OrphanedBooks,
        /// Deletion timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a book is added to the pool.
    BookCreated {
        /// Book title.
        title: String,
        /// Book author.
        author: String,
        /// Number of pages.
        page_count: u32,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a pooled book is placed on a shelf.
    BookPlaced {
        /// Book title.
        title: String,
        /// Book author.
        author: String,
        /// Destination shelf title.
        shelf: String,
        /// Transfer variant used.
        transfer: TransferKind,
        /// Placement timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a book moves between shelves.
    BookMoved {
        /// Book title.
        title: String,
        /// Book author.
        author: String,
        /// Source shelf title.
        source: String,
        /// Destination shelf title.
        destination: String,
        /// Transfer variant used.
        transfer: TransferKind,
        /// Move timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reader registers.
    ReaderCreated {
        /// Reader name.
        reader: String,
        /// Registration timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reader is removed.
    ReaderDeleted {
        /// Reader name.
        reader: String,
        /// Removal timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reader subscribes to notifications.
    ReaderSubscribed {
        /// Reader name.
        reader: String,
        /// Subscription timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a reader unsubscribes from notifications.
    ReaderUnsubscribed {
        /// Reader name.
        reader: String,
        /// Unsubscription timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl LibraryEvent {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::ShelfCreated { .. } => "shelf_created",
            Self::ShelfDeleted { .. } => "shelf_deleted",
            Self::BookCreated { .. } => "book_created",
            Self::BookPlaced { .. } => "book_placed",
            Self::BookMoved { .. } => "book_moved",
            Self::ReaderCreated { .. } => "reader_created",
            Self::ReaderDeleted { .. } => "reader_deleted",
            Self::ReaderSubscribed { .. } => "reader_subscribed",
            Self::ReaderUnsubscribed { .. } => "reader_unsubscribed",
        }
    }

    /// Renders the notification text sent to subscribed readers.
    ///
    /// Reader lifecycle and subscription events return `None`; they are
    /// broadcast on the bus but never delivered to reader inboxes.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::ShelfCreated { shelf, .. } => Some(format!("Added new shelf: {shelf}")),
            Self::ShelfDeleted { shelf, .. } => Some(format!("Removed shelf: {shelf}")),
            Self::BookCreated { title, author, .. } => {
                Some(format!("Added new book: \"{title}\" by {author}"))
            }
            Self::BookPlaced {
                title,
                author,
                shelf,
                ..
            } => Some(format!(
                "Book \"{title}\" by {author} was placed on \"{shelf}\" shelf"
            )),
            Self::BookMoved {
                title,
                author,
                destination,
                ..
            } => Some(format!(
                "Book \"{title}\" by {author} was replaced on \"{destination}\" shelf"
            )),
            Self::ReaderCreated { .. }
            | Self::ReaderDeleted { .. }
            | Self::ReaderSubscribed { .. }
            | Self::ReaderUnsubscribed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placed_message_format() {
        let event = LibraryEvent::BookPlaced {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            shelf: "Fiction".to_string(),
            transfer: TransferKind::FromPool,
            timestamp: Utc::now(),
        };
        assert_eq!(
            event.message().as_deref(),
            Some("Book \"Dune\" by Herbert was placed on \"Fiction\" shelf")
        );
    }

    #[test]
    fn moved_message_names_destination() {
        let event = LibraryEvent::BookMoved {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            source: "A".to_string(),
            destination: "B".to_string(),
            transfer: TransferKind::ShelfToShelf,
            timestamp: Utc::now(),
        };
        assert_eq!(
            event.message().as_deref(),
            Some("Book \"Dune\" by Herbert was replaced on \"B\" shelf")
        );
    }

    #[test]
    fn reader_events_have_no_message() {
        let event = LibraryEvent::ReaderCreated {
            reader: "ann".to_string(),
            timestamp: Utc::now(),
        };
        assert!(event.message().is_none());
        assert_eq!(event.event_type_str(), "reader_created");
    }

    #[test]
    fn serializes_with_event_type_tag() {
        let event = LibraryEvent::ShelfCreated {
            shelf: "Fiction".to_string(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"event_type\":\"shelf_created\""));
        assert!(json.contains("Fiction"));
    }
}
