//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an identifier to its target URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// Resolving the identifier also accrues the visit counter for the peer
/// address; the two are one operation, so stats read directly after a
/// redirect already include it.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .redirect_service
        .resolve(&id, &addr.ip().to_string())
        .await?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]))
}
