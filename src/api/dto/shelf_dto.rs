//! Shelf DTOs for create, get, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book_dto::BookDto;
use super::common_dto::PaginationMeta;
use crate::domain::Shelf;

/// Request body for `POST /shelves`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShelfRequest {
    /// Shelf title (unique).
    pub title: String,
}

/// A shelf and its books.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShelfDto {
    /// Shelf title.
    pub title: String,
    /// Number of books on the shelf.
    pub book_count: usize,
    /// Books in placement order.
    pub books: Vec<BookDto>,
}

impl From<&Shelf> for ShelfDto {
    fn from(shelf: &Shelf) -> Self {
        Self {
            title: shelf.title().to_string(),
            book_count: shelf.len(),
            books: shelf.books().iter().map(BookDto::from).collect(),
        }
    }
}

/// Paginated list response for `GET /shelves`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ShelfListResponse {
    /// Shelves in creation order.
    pub data: Vec<ShelfDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
