//! Auth token extraction.
//!
//! The credential travels as a Bearer token in the `Authorization` header,
//! with a `token` query parameter as fallback; the header wins when both are
//! present.
//!
//! Extraction never rejects: whether a missing credential is an error (and
//! which one) depends on the authorization gate's outcome ordering, so the
//! decision stays with the gate rather than the transport layer.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum_auth::AuthBearer;
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// The credential a request carried, if any.
///
/// # Example
///
/// ```text
/// DELETE /abc HTTP/1.1
/// Authorization: Bearer hunter2
/// ```
///
/// or `DELETE /abc?token=hunter2`.
pub struct SuppliedToken(pub Option<String>);

impl<S> FromRequestParts<S> for SuppliedToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(AuthBearer(token)) = AuthBearer::from_request_parts(parts, &()).await {
            return Ok(Self(Some(token)));
        }

        let token = Query::<TokenQuery>::from_request_parts(parts, &())
            .await
            .ok()
            .and_then(|Query(q)| q.token);

        Ok(Self(token))
    }
}
