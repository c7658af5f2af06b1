use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Request-scoped error taxonomy.
///
/// Every failure a handler can surface is one of these variants; the wire
/// status and machine-readable code are fixed per variant in [`IntoResponse`].
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown identifier on a read or authorization path.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// A credential was required but none was supplied.
    #[error("{message}")]
    MissingCredential { message: String, details: Value },
    /// A credential was supplied but does not match the stored token.
    #[error("{message}")]
    Mismatch { message: String, details: Value },
    /// A requested identifier failed length or charset validation.
    #[error("{message}")]
    InvalidId { message: String, details: Value },
    /// The identifier already exists, or a create lost an insert race.
    #[error("{message}")]
    IdConflict { message: String, details: Value },
    /// Create was called without a destination URL.
    #[error("{message}")]
    MissingTarget { message: String, details: Value },
    /// The allocator ran out of candidate identifiers below the length bound.
    #[error("{message}")]
    AllocationExhausted { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn missing_credential(message: impl Into<String>, details: Value) -> Self {
        Self::MissingCredential {
            message: message.into(),
            details,
        }
    }
    pub fn mismatch(message: impl Into<String>, details: Value) -> Self {
        Self::Mismatch {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_id(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidId {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::IdConflict {
            message: message.into(),
            details,
        }
    }
    pub fn missing_target(message: impl Into<String>, details: Value) -> Self {
        Self::MissingTarget {
            message: message.into(),
            details,
        }
    }
    pub fn allocation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::MissingCredential { message, details } => (
                StatusCode::BAD_REQUEST,
                "missing_credential",
                message,
                details,
            ),
            AppError::Mismatch { message, details } => {
                (StatusCode::FORBIDDEN, "mismatch", message, details)
            }
            AppError::InvalidId { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_id", message, details)
            }
            AppError::IdConflict { message, details } => {
                (StatusCode::CONFLICT, "id_conflict", message, details)
            }
            AppError::MissingTarget { message, details } => {
                (StatusCode::BAD_REQUEST, "missing_target", message, details)
            }
            AppError::AllocationExhausted { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "allocation_exhausted",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a sqlx error onto the taxonomy.
///
/// A unique violation is an identifier conflict (the `urls` primary key is
/// the only unique constraint in the schema). A foreign-key violation means
/// the referenced mapping vanished between lookup and write.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict("Identifier already exists", json!({}));
        }
        if db.is_foreign_key_violation() {
            return AppError::not_found("Unknown identifier", json!({}));
        }
    }

    AppError::internal("Database error", json!({}))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::not_found("x", json!({})).into_response().status(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::missing_credential("x", json!({}))
                    .into_response()
                    .status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::mismatch("x", json!({})).into_response().status(),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::invalid_id("x", json!({})).into_response().status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::conflict("x", json!({})).into_response().status(),
                StatusCode::CONFLICT,
            ),
            (
                AppError::missing_target("x", json!({}))
                    .into_response()
                    .status(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::allocation_exhausted("x", json!({}))
                    .into_response()
                    .status(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (got, want) in cases {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::mismatch("Wrong token", json!({"id": "abc"}));
        assert_eq!(err.to_string(), "Wrong token");
    }

    #[test]
    fn test_plain_sqlx_error_is_internal() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
