//! Identifier allocation over an expanding keyspace.

use std::sync::Arc;

use serde_json::json;

use crate::config::IdPolicy;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::id_gen::random_id;

/// Allocates identifiers guaranteed absent from the store at probe time.
///
/// Candidates are drawn at random, starting at length 1 and growing only
/// when a length's keyspace yields nothing. Random probing amortizes well
/// while the keyspace is sparse; no uniformity across calls is promised,
/// only collision avoidance.
pub struct IdAllocator<R: MappingRepository> {
    repository: Arc<R>,
    policy: IdPolicy,
}

impl<R: MappingRepository> IdAllocator<R> {
    /// Creates a new allocator.
    pub fn new(repository: Arc<R>, policy: IdPolicy) -> Self {
        Self { repository, policy }
    }

    /// Returns an identifier with no existing mapping in the store.
    ///
    /// For each candidate length `L` in `1..max_id_len` (the maximum length
    /// itself is reserved for client-requested identifiers), up to
    /// `alphabet_len^L` random draws are probed against the store; the first
    /// free candidate wins. The per-length cap bounds worst-case work at the
    /// keyspace size for that length.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] when every length below the
    /// bound has been probed without finding a free identifier. With the
    /// default 62-character alphabet this is practically unreachable.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn allocate(&self) -> Result<String, AppError> {
        let alphabet_len = self.policy.alphabet.chars().count() as u64;

        for len in 1..self.policy.max_id_len {
            let attempts = alphabet_len.saturating_pow(len as u32);

            for _ in 0..attempts {
                let candidate = random_id(&self.policy.alphabet, len);

                if !self.repository.exists(&candidate).await? {
                    return Ok(candidate);
                }
            }

            tracing::debug!(len, "length exhausted, widening search");
        }

        Err(AppError::allocation_exhausted(
            "No free identifier below the configured length bound",
            json!({ "max_id_len": self.policy.max_id_len }),
        ))
    }
}
