//! DTOs for the create endpoint.

use serde::{Deserialize, Serialize};

/// Request to create a shortened URL.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    /// Destination URL. Required; its absence is reported by the core, not
    /// by deserialization, so the error carries the right taxonomy code.
    pub url: Option<String>,

    /// Optional caller-chosen identifier (validated for length and alphabet).
    pub id: Option<String>,
}

/// Response for a successfully created mapping.
///
/// `auth_token` is revealed here and never again.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub url_id: String,
    pub short_url: String,
    pub auth_token: String,
}
