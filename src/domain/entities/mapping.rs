//! Mapping entity representing a shortened URL.

/// A short identifier bound to a target URL.
///
/// The `auth_token` is fixed at creation and never changes for the life of
/// the mapping; it is the only credential for stats reads and deletion.
#[derive(Debug, Clone)]
pub struct UrlMapping {
    pub id: String,
    pub target: String,
    pub auth_token: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: String, target: String, auth_token: String) -> Self {
        Self {
            id,
            target,
            auth_token,
        }
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub id: String,
    pub target: String,
    pub auth_token: String,
}
