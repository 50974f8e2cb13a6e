//! Book transfer variants.
//!
//! A [`Transfer`] is chosen per call from where the book currently lives
//! and consumed by [`Transfer::execute`]. Nothing is retained between
//! calls.

use serde::Serialize;
use utoipa::ToSchema;

use super::book::{Book, BookKey};
use super::shelf::Shelf;
use crate::error::LibraryError;

/// Discriminator for the two transfer variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// The book came out of the unplaced-book pool.
    FromPool,
    /// The book moves from one shelf to another.
    ShelfToShelf,
}

/// A single pending relocation of a book onto a destination shelf.
#[derive(Debug)]
pub enum Transfer {
    /// The book has already been released by the pool and only needs a
    /// destination.
    FromPool(Book),
    /// The book is still on the source shelf at index `source`.
    ShelfToShelf {
        /// Title and author of the book to move.
        key: BookKey,
        /// Index of the source shelf.
        source: usize,
    },
}

impl Transfer {
    /// Returns which variant this is.
    #[must_use]
    pub const fn kind(&self) -> TransferKind {
        match self {
            Self::FromPool(_) => TransferKind::FromPool,
            Self::ShelfToShelf { .. } => TransferKind::ShelfToShelf,
        }
    }

    /// Moves the book onto `shelves[destination]` and returns a reference
    /// to it in its new place.
    ///
    /// Shelf indices are checked before anything is removed, so a failed
    /// transfer leaves every shelf untouched. When source and destination
    /// are the same shelf the book is re-appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::BookNotFound`] if the book is not on the
    /// source shelf, or [`LibraryError::Internal`] if an index is out of
    /// range.
    pub fn execute(self, shelves: &mut [Shelf], destination: usize) -> Result<&Book, LibraryError> {
        if destination >= shelves.len() {
            return Err(LibraryError::Internal(format!(
                "destination shelf index {destination} out of range"
            )));
        }

        let book = match self {
            Self::FromPool(book) => book,
            Self::ShelfToShelf { key, source } => {
                let source_shelf = shelves.get_mut(source).ok_or_else(|| {
                    LibraryError::Internal(format!("source shelf index {source} out of range"))
                })?;
                source_shelf
                    .remove_book(&key)
                    .ok_or(LibraryError::BookNotFound(key.title))?
            }
        };

        let destination_shelf = shelves.get_mut(destination).ok_or_else(|| {
            LibraryError::Internal(format!(
                "destination shelf index {destination} out of range"
            ))
        })?;
        destination_shelf.add_book(book);
        destination_shelf
            .books()
            .last()
            .ok_or_else(|| LibraryError::Internal("placed book vanished".to_string()))
    }
}
