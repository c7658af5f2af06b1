//! Handler for mapping creation.

use axum::{Json, extract::State};

use crate::api::dto::create::{CreateRequest, CreateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "http://example.com/some/long/path",
///   "id": "custom"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "urlId": "bX3",
///   "shortUrl": "http://localhost:3000/bX3",
///   "authToken": "h&fQ1..."
/// }
/// ```
///
/// The auth token is returned exactly once; no other operation reveals it.
///
/// # Errors
///
/// Returns 400 Bad Request for a missing URL or invalid identifier and
/// 409 Conflict when the requested identifier is already taken.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequest>,
) -> Result<Json<CreateResponse>, AppError> {
    let target = payload.url.unwrap_or_default();

    let created = state.mapping_service.create(payload.id, target).await?;

    let short_url = state.mapping_service.short_url(&state.base_url, &created.id);

    Ok(Json(CreateResponse {
        url_id: created.id,
        short_url,
        auth_token: created.auth_token,
    }))
}
