//! Authorization gate for protected operations on a mapping.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Decides whether a protected operation on an identifier is permitted.
///
/// The outcome order is part of the contract: existence is checked before
/// credential presence, and presence before comparison. The user-visible
/// error code depends on this order, so callers must not short-circuit
/// differently.
pub struct AuthService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> AuthService<R> {
    /// Creates a new authorization gate.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Authorizes `supplied` against the token stored for `id`.
    ///
    /// Comparison is exact string equality. It is not constant-time, which
    /// is accepted for this threat model.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - no mapping for `id`
    /// - [`AppError::MissingCredential`] - no token supplied
    /// - [`AppError::Mismatch`] - supplied token differs from the stored one
    pub async fn authorize(&self, id: &str, supplied: Option<&str>) -> Result<(), AppError> {
        let mapping = self
            .repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown identifier", json!({ "id": id })))?;

        let supplied = supplied.ok_or_else(|| {
            AppError::missing_credential("No auth token supplied", json!({ "id": id }))
        })?;

        if supplied != mapping.auth_token {
            return Err(AppError::mismatch("Wrong auth token", json!({ "id": id })));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockMappingRepository;

    fn stored_mapping() -> UrlMapping {
        UrlMapping::new(
            "abc".to_string(),
            "http://example.com".to_string(),
            "right-token".to_string(),
        )
    }

    #[tokio::test]
    async fn test_unknown_id_wins_over_missing_credential() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo));

        // No credential either, but the id is checked first.
        let result = service.authorize("nope", None).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_missing_credential_wins_over_comparison() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_find()
            .times(1)
            .returning(|_| Ok(Some(stored_mapping())));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.authorize("abc", None).await;

        assert!(matches!(result, Err(AppError::MissingCredential { .. })));
    }

    #[tokio::test]
    async fn test_wrong_token_is_mismatch() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_find()
            .times(1)
            .returning(|_| Ok(Some(stored_mapping())));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.authorize("abc", Some("wrong-token")).await;

        assert!(matches!(result, Err(AppError::Mismatch { .. })));
    }

    #[tokio::test]
    async fn test_exact_token_is_authorized() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_find()
            .times(1)
            .returning(|_| Ok(Some(stored_mapping())));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.authorize("abc", Some("right-token")).await;

        assert!(result.is_ok());
    }
}
