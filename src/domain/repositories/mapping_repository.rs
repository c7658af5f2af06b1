//! Repository trait for mapping data access.

use async_trait::async_trait;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;

/// Repository interface for managing url mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// Uniqueness of the identifier is enforced by the store's primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::IdConflict`] if the identifier already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, mapping: NewMapping) -> Result<(), AppError>;

    /// Finds a mapping by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find(&self, id: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Reports whether a mapping with this identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: &str) -> Result<bool, AppError>;

    /// Removes a mapping and its visit records in one transaction.
    ///
    /// Returns `Ok(true)` if the mapping existed and was removed, `Ok(false)`
    /// if there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
