//! Reader handlers: register, list, get, delete, subscribe, unsubscribe.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreateReaderRequest, FormatParams, PaginationParams, ReaderDetailResponse, ReaderDto,
    ReaderListResponse, SubscriptionResponse,
};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, LibraryError};

/// `POST /readers` — Register a reader.
///
/// # Errors
///
/// Returns [`LibraryError`] on a blank or duplicate name.
#[utoipa::path(
    post,
    path = "/api/v1/readers",
    tag = "Readers",
    summary = "Register a reader",
    description = "Registers a reader. New readers are not subscribed to notifications.",
    request_body = CreateReaderRequest,
    responses(
        (status = 201, description = "Reader registered", body = ReaderDto),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 409, description = "Reader already exists", body = ErrorResponse),
    )
)]
pub async fn create_reader(
    State(state): State<AppState>,
    Json(req): Json<CreateReaderRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    state.library.lock().await.create_reader(&req.name)?;
    let reader = ReaderDto {
        name: req.name,
        subscribed: false,
    };
    Ok((StatusCode::CREATED, Json(reader)))
}

/// `GET /readers` — List readers.
///
/// # Errors
///
/// Never fails today; the signature matches the other handlers.
#[utoipa::path(
    get,
    path = "/api/v1/readers",
    tag = "Readers",
    summary = "List readers",
    description = "Returns a paginated list of readers with their subscription state.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated reader list", body = ReaderListResponse),
    )
)]
pub async fn list_readers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, LibraryError> {
    let library = state.library.lock().await;
    let readers: Vec<ReaderDto> = library
        .readers()
        .iter()
        .map(|r| ReaderDto {
            name: r.name().to_string(),
            subscribed: library.is_subscribed(r.name()),
        })
        .collect();
    let (data, pagination) = params.paginate(readers);
    Ok(Json(ReaderListResponse { data, pagination }))
}

/// `GET /readers/{name}` — Get one reader with their inbox.
///
/// # Errors
///
/// Returns [`LibraryError::ReaderNotFound`] if the reader does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/readers/{name}",
    tag = "Readers",
    summary = "Get a reader",
    description = "Returns a reader, their subscription state, and every notification delivered to them. Pass `format=text` for the plain-text rendering.",
    params(
        ("name" = String, Path, description = "Reader name"),
        FormatParams,
    ),
    responses(
        (status = 200, description = "Reader details", body = ReaderDetailResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse),
    )
)]
pub async fn get_reader(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(format): Query<FormatParams>,
) -> Result<Response, LibraryError> {
    let library = state.library.lock().await;
    if format.wants_text() {
        return Ok(library.display_reader(&name)?.into_response());
    }
    let inbox = library.inbox(&name)?;
    Ok(Json(ReaderDetailResponse {
        subscribed: library.is_subscribed(&name),
        name,
        inbox,
    })
    .into_response())
}

/// `DELETE /readers/{name}` — Remove a reader.
///
/// # Errors
///
/// Returns [`LibraryError::ReaderNotFound`] if the reader does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/readers/{name}",
    tag = "Readers",
    summary = "Delete a reader",
    description = "Removes a reader along with their subscription and inbox.",
    params(
        ("name" = String, Path, description = "Reader name"),
    ),
    responses(
        (status = 204, description = "Reader deleted"),
        (status = 404, description = "Reader not found", body = ErrorResponse),
    )
)]
pub async fn delete_reader(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, LibraryError> {
    state.library.lock().await.delete_reader(&name)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /readers/{name}/subscription` — Subscribe a reader.
///
/// # Errors
///
/// Returns [`LibraryError::ReaderNotFound`] if the reader does not exist.
#[utoipa::path(
    post,
    path = "/api/v1/readers/{name}/subscription",
    tag = "Readers",
    summary = "Subscribe a reader",
    description = "Subscribes a reader to notifications. Subscribing twice has no further effect.",
    params(
        ("name" = String, Path, description = "Reader name"),
    ),
    responses(
        (status = 200, description = "Reader subscribed", body = SubscriptionResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse),
    )
)]
pub async fn subscribe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, LibraryError> {
    let changed = state.library.lock().await.subscribe(&name)?;
    Ok(Json(SubscriptionResponse {
        reader: name,
        subscribed: true,
        changed,
    }))
}

/// `DELETE /readers/{name}/subscription` — Unsubscribe a reader.
///
/// # Errors
///
/// Returns [`LibraryError::ReaderNotFound`] if the reader does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/readers/{name}/subscription",
    tag = "Readers",
    summary = "Unsubscribe a reader",
    description = "Stops notifications for a reader. Unsubscribing a reader who is not subscribed is a no-op.",
    params(
        ("name" = String, Path, description = "Reader name"),
    ),
    responses(
        (status = 200, description = "Reader unsubscribed", body = SubscriptionResponse),
        (status = 404, description = "Reader not found", body = ErrorResponse),
    )
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, LibraryError> {
    let changed = state.library.lock().await.unsubscribe(&name)?;
    Ok(Json(SubscriptionResponse {
        reader: name,
        subscribed: false,
        changed,
    }))
}

/// Reader management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/readers", post(create_reader).get(list_readers))
        .route("/readers/{name}", get(get_reader).delete(delete_reader))
        .route(
            "/readers/{name}/subscription",
            post(subscribe).delete(unsubscribe),
        )
}
