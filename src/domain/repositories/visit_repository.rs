//! Repository trait for visit counters.

use async_trait::async_trait;

use crate::domain::entities::VisitRecord;
use crate::error::AppError;

/// Repository interface for per-client visit counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteVisitRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Records one visit for the (`id`, `client_ip`) pair.
    ///
    /// Must be a single atomic insert-or-increment: a counter is never
    /// observable at 0 after this call returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the mapping vanished before the
    /// write (foreign-key violation).
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, id: &str, client_ip: &str) -> Result<(), AppError>;

    /// Returns all visit counters for one identifier.
    ///
    /// An identifier with no visits yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn visits_for(&self, id: &str) -> Result<Vec<VisitRecord>, AppError>;
}
