//! Library error types with HTTP status code mapping.
//!
//! [`LibraryError`] is the central error type for the catalog. Every
//! failure aborts its operation before any state is mutated. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "shelf not found: Fiction",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Catalog error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2099 | Not Found       | 404 Not Found              |
/// | 2100–2199 | Conflict        | 409 Conflict               |
/// | 3000–3999 | Server          | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// No shelf has the given title.
    #[error("shelf not found: {0}")]
    ShelfNotFound(String),

    /// The source or destination shelf of a move could not be resolved.
    #[error("source shelf \"{source_shelf}\" or destination shelf \"{destination_shelf}\" not found")]
    ShelvesNotFound {
        /// Requested source shelf title.
        source_shelf: String,
        /// Requested destination shelf title.
        destination_shelf: String,
    },

    /// No book with the given title where it was looked for.
    #[error("book not found: {0}")]
    BookNotFound(String),

    /// No reader has the given name.
    #[error("reader not found: {0}")]
    ReaderNotFound(String),

    /// The unplaced-book pool ran out while retrieving a book.
    #[error("book pool is empty")]
    PoolEmpty,

    /// A shelf with the given title already exists.
    #[error("shelf already exists: {0}")]
    ShelfExists(String),

    /// A reader with the given name already exists.
    #[error("reader already exists: {0}")]
    ReaderExists(String),

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal invariant violated.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LibraryError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::ShelfNotFound(_) => 2001,
            Self::ShelvesNotFound { .. } => 2002,
            Self::BookNotFound(_) => 2003,
            Self::ReaderNotFound(_) => 2004,
            Self::ShelfExists(_) => 2101,
            Self::ReaderExists(_) => 2102,
            Self::Internal(_) => 3000,
            Self::PoolEmpty => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::ShelfNotFound(_)
            | Self::ShelvesNotFound { .. }
            | Self::BookNotFound(_)
            | Self::ReaderNotFound(_) => StatusCode::NOT_FOUND,
            Self::ShelfExists(_) | Self::ReaderExists(_) => StatusCode::CONFLICT,
            Self::PoolEmpty | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_map_to_404() {
        for err in [
            LibraryError::ShelfNotFound("A".to_string()),
            LibraryError::BookNotFound("Dune".to_string()),
            LibraryError::ReaderNotFound("ann".to_string()),
            LibraryError::ShelvesNotFound {
                source_shelf: "A".to_string(),
                destination_shelf: "B".to_string(),
            },
        ] {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn messages_name_the_missing_entity() {
        let err = LibraryError::ShelvesNotFound {
            source_shelf: "A".to_string(),
            destination_shelf: "B".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "source shelf \"A\" or destination shelf \"B\" not found"
        );
        assert_eq!(
            LibraryError::BookNotFound("Dune".to_string()).to_string(),
            "book not found: Dune"
        );
    }

    #[test]
    fn into_response_sets_status() {
        let response = LibraryError::ShelfExists("A".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
