//! Mapping lifecycle: creation and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::application::services::{AuthService, IdAllocator};
use crate::config::IdPolicy;
use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::id_gen::{generate_token, validate_requested_id};

/// Insert attempts for allocator-chosen identifiers before the conflict is
/// surfaced to the caller.
const MAX_CREATE_ATTEMPTS: usize = 3;

/// What a successful create hands back to the caller.
///
/// The token is returned exactly once, here; no later operation reveals it.
#[derive(Debug, Clone)]
pub struct CreatedMapping {
    pub id: String,
    pub auth_token: String,
}

/// Coordinates mapping creation and deletion against the allocator, the
/// authorization gate, and the store.
pub struct MappingService<R: MappingRepository> {
    repository: Arc<R>,
    auth: Arc<AuthService<R>>,
    allocator: IdAllocator<R>,
    policy: IdPolicy,
}

impl<R: MappingRepository> MappingService<R> {
    /// Creates a new lifecycle service.
    pub fn new(repository: Arc<R>, auth: Arc<AuthService<R>>, policy: IdPolicy) -> Self {
        let allocator = IdAllocator::new(repository.clone(), policy.clone());

        Self {
            repository,
            auth,
            allocator,
            policy,
        }
    }

    /// Creates a mapping and returns its identifier and auth token.
    ///
    /// A requested identifier is validated for length (1..=`max_id_len`) and
    /// alphabet membership before the insert is attempted; the store's
    /// primary key decides conflicts. Without a requested identifier the
    /// allocator picks one, and an insert race lost to a concurrent writer
    /// is retried a bounded number of times.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidId`] - requested identifier fails validation
    /// - [`AppError::MissingTarget`] - `target` is empty
    /// - [`AppError::IdConflict`] - requested identifier already exists, or
    ///   every allocation attempt lost its insert race
    /// - [`AppError::AllocationExhausted`] - no free identifier below the
    ///   length bound
    pub async fn create(
        &self,
        requested_id: Option<String>,
        target: String,
    ) -> Result<CreatedMapping, AppError> {
        if let Some(ref id) = requested_id {
            validate_requested_id(id, &self.policy.alphabet, self.policy.max_id_len)?;
        }

        if target.is_empty() {
            return Err(AppError::missing_target(
                "No target URL supplied",
                json!({ "field": "url" }),
            ));
        }

        match requested_id {
            Some(id) => {
                let auth_token = generate_token(self.policy.token_len);

                self.repository
                    .insert(NewMapping {
                        id: id.clone(),
                        target,
                        auth_token: auth_token.clone(),
                    })
                    .await?;

                Ok(CreatedMapping { id, auth_token })
            }
            None => self.create_with_allocated_id(target).await,
        }
    }

    /// Allocate-then-insert cycle for automatic identifiers.
    ///
    /// The allocator's probe and the insert are separate statements, so two
    /// concurrent creates can pick the same fresh identifier; the loser sees
    /// the primary-key conflict and retries with a new candidate.
    async fn create_with_allocated_id(&self, target: String) -> Result<CreatedMapping, AppError> {
        let mut last_conflict = None;

        for attempt in 0..MAX_CREATE_ATTEMPTS {
            let id = self.allocator.allocate().await?;
            let auth_token = generate_token(self.policy.token_len);

            match self
                .repository
                .insert(NewMapping {
                    id: id.clone(),
                    target: target.clone(),
                    auth_token: auth_token.clone(),
                })
                .await
            {
                Ok(()) => return Ok(CreatedMapping { id, auth_token }),
                Err(AppError::IdConflict { message, details }) => {
                    tracing::warn!(attempt, id = %id, "allocated identifier lost insert race");
                    last_conflict = Some(AppError::IdConflict { message, details });
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_conflict.unwrap_or_else(|| {
            AppError::conflict("Identifier already exists", json!({}))
        }))
    }

    /// Deletes a mapping after running the authorization gate.
    ///
    /// On any non-authorized outcome the store is left untouched. Visit
    /// records are removed together with the mapping.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - unknown identifier
    /// - [`AppError::MissingCredential`] / [`AppError::Mismatch`] - gate
    ///   outcomes, in gate order
    pub async fn delete(&self, id: &str, supplied: Option<&str>) -> Result<(), AppError> {
        self.auth.authorize(id, supplied).await?;

        let removed = self.repository.delete(id).await?;

        if !removed {
            // The row vanished between the gate check and the delete.
            return Err(AppError::not_found(
                "Unknown identifier",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Constructs the full short URL for an identifier.
    pub fn short_url(&self, base_url: &str, id: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), id)
    }
}
