//! Book DTOs for creation, pool listing, placement, and movement.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Book;

/// Request body for `POST /books`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Number of pages.
    pub page_count: u32,
}

/// A book as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDto {
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Number of pages.
    pub page_count: u32,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().to_string(),
            author: book.author().to_string(),
            page_count: book.page_count(),
        }
    }
}

/// Response body for `GET /books/pool`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PoolResponse {
    /// Unplaced books in queue order.
    pub data: Vec<BookDto>,
    /// Number of unplaced books.
    pub count: usize,
}

/// Request body for `POST /books/place`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceBookRequest {
    /// Title of the pooled book.
    pub book_title: String,
    /// Title of the destination shelf.
    pub shelf_title: String,
}

/// Request body for `POST /books/move`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveBookRequest {
    /// Title of the book to move.
    pub book_title: String,
    /// Title of the shelf the book is on.
    pub source_title: String,
    /// Title of the shelf to move it to.
    pub destination_title: String,
}
