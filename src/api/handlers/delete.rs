//! Handler for mapping deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::middleware::auth::SuppliedToken;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a mapping.
///
/// # Endpoint
///
/// `DELETE /{id}`
///
/// The mapping's visit records are removed with it. On any non-authorized
/// outcome nothing is mutated.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown identifier, 400 Bad Request when no
/// token is supplied, and 403 Forbidden for a wrong token.
pub async fn delete_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    SuppliedToken(token): SuppliedToken,
) -> Result<StatusCode, AppError> {
    state
        .mapping_service
        .delete(&id, token.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
