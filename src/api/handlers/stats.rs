//! Handler for per-client visit statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::api::middleware::auth::SuppliedToken;
use crate::error::AppError;
use crate::state::AppState;

/// Returns per-client redirect counts for an identifier.
///
/// # Endpoint
///
/// `GET /{id}/stats`
///
/// The authorization gate runs before the counters are read; its outcome
/// ordering (unknown id, then missing credential, then mismatch) is what the
/// client observes.
///
/// # Response
///
/// ```json
/// { "1.2.3.4": 2, "5.6.7.8": 1 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found for an unknown identifier, 400 Bad Request when no
/// token is supplied, and 403 Forbidden for a wrong token.
pub async fn stats_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    SuppliedToken(token): SuppliedToken,
) -> Result<Json<StatsResponse>, AppError> {
    state.auth_service.authorize(&id, token.as_deref()).await?;

    let records = state.redirect_service.stats(&id).await?;

    Ok(Json(StatsResponse::from(records)))
}
