//! Book handlers: create, pool listing, place, move.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{BookDto, CreateBookRequest, MoveBookRequest, PlaceBookRequest, PoolResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, LibraryError};
use crate::service::TransferOutcome;

/// `POST /books` — Create a book in the unplaced-book pool.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidRequest`] on a blank title or author.
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "Books",
    summary = "Create a book",
    description = "Adds a new book to the unplaced-book pool and notifies subscribed readers.",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookDto),
        (status = 400, description = "Blank title or author", body = ErrorResponse),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(req): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    state
        .library
        .lock()
        .await
        .create_book(&req.title, &req.author, req.page_count)?;

    let book = BookDto {
        title: req.title,
        author: req.author,
        page_count: req.page_count,
    };
    Ok((StatusCode::CREATED, Json(book)))
}

/// `GET /books/pool` — List unplaced books.
///
/// # Errors
///
/// Never fails today; the signature matches the other handlers.
#[utoipa::path(
    get,
    path = "/api/v1/books/pool",
    tag = "Books",
    summary = "List unplaced books",
    description = "Returns the books waiting in the pool, in queue order.",
    responses(
        (status = 200, description = "Pool contents", body = PoolResponse),
    )
)]
pub async fn list_pool(State(state): State<AppState>) -> Result<impl IntoResponse, LibraryError> {
    let library = state.library.lock().await;
    let data: Vec<BookDto> = library.pool_books().map(BookDto::from).collect();
    let count = data.len();
    Ok(Json(PoolResponse { data, count }))
}

/// `POST /books/place` — Place a pooled book on a shelf.
///
/// # Errors
///
/// Returns [`LibraryError::ShelfNotFound`] or [`LibraryError::BookNotFound`].
#[utoipa::path(
    post,
    path = "/api/v1/books/place",
    tag = "Books",
    summary = "Place a book",
    description = "Takes a book out of the unplaced-book pool and appends it to a shelf.",
    request_body = PlaceBookRequest,
    responses(
        (status = 200, description = "Book placed", body = TransferOutcome),
        (status = 404, description = "Shelf or book not found", body = ErrorResponse),
    )
)]
pub async fn place_book(
    State(state): State<AppState>,
    Json(req): Json<PlaceBookRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    let outcome = state
        .library
        .lock()
        .await
        .place_book(&req.book_title, &req.shelf_title)?;
    Ok(Json(outcome))
}

/// `POST /books/move` — Move a book between shelves.
///
/// # Errors
///
/// Returns [`LibraryError::ShelvesNotFound`] or [`LibraryError::BookNotFound`].
#[utoipa::path(
    post,
    path = "/api/v1/books/move",
    tag = "Books",
    summary = "Move a book",
    description = "Moves a book from one shelf to another. Source and destination may be the same shelf.",
    request_body = MoveBookRequest,
    responses(
        (status = 200, description = "Book moved", body = TransferOutcome),
        (status = 404, description = "Shelf or book not found", body = ErrorResponse),
    )
)]
pub async fn move_book(
    State(state): State<AppState>,
    Json(req): Json<MoveBookRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    let outcome = state.library.lock().await.move_book(
        &req.book_title,
        &req.source_title,
        &req.destination_title,
    )?;
    Ok(Json(outcome))
}

/// Book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", post(create_book))
        .route("/books/pool", get(list_pool))
        .route("/books/place", post(place_book))
        .route("/books/move", post(move_book))
}
