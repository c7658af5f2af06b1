//! Redirect resolution and visit statistics.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::VisitRecord;
use crate::domain::repositories::{MappingRepository, VisitRepository};
use crate::error::AppError;

/// Resolves identifiers to their targets and accrues per-client visit counts.
pub struct RedirectService<M: MappingRepository, V: VisitRepository> {
    mappings: Arc<M>,
    visits: Arc<V>,
}

impl<M: MappingRepository, V: VisitRepository> RedirectService<M, V> {
    /// Creates a new redirect service.
    pub fn new(mappings: Arc<M>, visits: Arc<V>) -> Self {
        Self { mappings, visits }
    }

    /// Resolves `id` to its target URL, recording the visit for `client_ip`.
    ///
    /// The visit upsert is atomic: once this returns, the pair's counter is
    /// at least 1 and every successful call moved it by exactly 1. The caller
    /// issues the actual redirect with the returned target.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `id`.
    pub async fn resolve(&self, id: &str, client_ip: &str) -> Result<String, AppError> {
        let mapping = self
            .mappings
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown identifier", json!({ "id": id })))?;

        self.visits.record_visit(id, client_ip).await?;

        Ok(mapping.target)
    }

    /// Returns the visit counters for `id`.
    ///
    /// No authorization is performed here; callers run the gate first.
    pub async fn stats(&self, id: &str) -> Result<Vec<VisitRecord>, AppError> {
        self.visits.visits_for(id).await
    }
}
