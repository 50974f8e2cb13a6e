//! Shelf handlers: create, list, get, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateShelfRequest, FormatParams, PaginationParams, ShelfDto, ShelfListResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, LibraryError};

/// `POST /shelves` — Create an empty shelf.
///
/// # Errors
///
/// Returns [`LibraryError`] on a blank or duplicate title.
#[utoipa::path(
    post,
    path = "/api/v1/shelves",
    tag = "Shelves",
    summary = "Create a shelf",
    description = "Registers an empty shelf and notifies subscribed readers.",
    request_body = CreateShelfRequest,
    responses(
        (status = 201, description = "Shelf created", body = ShelfDto),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 409, description = "Shelf already exists", body = ErrorResponse),
    )
)]
pub async fn create_shelf(
    State(state): State<AppState>,
    Json(req): Json<CreateShelfRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    let mut library = state.library.lock().await;
    library.create_shelf(&req.title)?;
    let shelf = ShelfDto::from(library.shelf(&req.title)?);
    Ok((StatusCode::CREATED, Json(shelf)))
}

/// `GET /shelves` — List shelves with their books.
///
/// # Errors
///
/// Never fails today; the signature matches the other handlers.
#[utoipa::path(
    get,
    path = "/api/v1/shelves",
    tag = "Shelves",
    summary = "List shelves",
    description = "Returns a paginated list of shelves in creation order, each with its books.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated shelf list", body = ShelfListResponse),
    )
)]
pub async fn list_shelves(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, LibraryError> {
    let library = state.library.lock().await;
    let shelves: Vec<ShelfDto> = library.shelves().iter().map(ShelfDto::from).collect();
    let (data, pagination) = params.paginate(shelves);
    Ok(Json(ShelfListResponse { data, pagination }))
}

/// `GET /shelves/{title}` — Get one shelf.
///
/// # Errors
///
/// Returns [`LibraryError::ShelfNotFound`] if the shelf does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/shelves/{title}",
    tag = "Shelves",
    summary = "Get a shelf",
    description = "Returns a single shelf with its books. Pass `format=text` for the plain-text rendering.",
    params(
        ("title" = String, Path, description = "Shelf title"),
        FormatParams,
    ),
    responses(
        (status = 200, description = "Shelf details", body = ShelfDto),
        (status = 404, description = "Shelf not found", body = ErrorResponse),
    )
)]
pub async fn get_shelf(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(format): Query<FormatParams>,
) -> Result<Response, LibraryError> {
    let library = state.library.lock().await;
    if format.wants_text() {
        return Ok(library.display_shelf(&title)?.into_response());
    }
    Ok(Json(ShelfDto::from(library.shelf(&title)?)).into_response())
}

/// `DELETE /shelves/{title}` — Remove a shelf.
///
/// # Errors
///
/// Returns [`LibraryError::ShelfNotFound`] if the shelf does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/shelves/{title}",
    tag = "Shelves",
    summary = "Delete a shelf",
    description = "Removes a shelf. Its books are returned to the pool or discarded depending on SHELF_DELETE_POLICY.",
    params(
        ("title" = String, Path, description = "Shelf title"),
    ),
    responses(
        (status = 204, description = "Shelf deleted"),
        (status = 404, description = "Shelf not found", body = ErrorResponse),
    )
)]
pub async fn delete_shelf(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<impl IntoResponse, LibraryError> {
    state.library.lock().await.delete_shelf(&title)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shelf management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shelves", post(create_shelf).get(list_shelves))
        .route("/shelves/{title}", get(get_shelf).delete(delete_shelf))
}
