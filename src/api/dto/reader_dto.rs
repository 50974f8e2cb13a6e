//! Reader DTOs for registration, listing, and subscriptions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;

/// Request body for `POST /readers`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReaderRequest {
    /// Reader name (unique).
    pub name: String,
}

/// Reader summary for list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReaderDto {
    /// Reader name.
    pub name: String,
    /// Whether the reader currently receives notifications.
    pub subscribed: bool,
}

/// Single reader detail for `GET /readers/{name}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReaderDetailResponse {
    /// Reader name.
    pub name: String,
    /// Whether the reader currently receives notifications.
    pub subscribed: bool,
    /// Notifications delivered so far, oldest first.
    pub inbox: Vec<String>,
}

/// Paginated list response for `GET /readers`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReaderListResponse {
    /// Readers in registration order.
    pub data: Vec<ReaderDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Response body for subscription changes.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscriptionResponse {
    /// Reader name.
    pub reader: String,
    /// Subscription state after the call.
    pub subscribed: bool,
    /// Whether the call changed anything.
    pub changed: bool,
}
