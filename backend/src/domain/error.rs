//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the domain only decides which failure category applies.
//!
//! "Not found" on reads is deliberately absent from this module: lookups
//! return `Ok(None)` so adapters can tell a missing row apart from a failed
//! query.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Caller-supplied data fails a syntactic or domain rule.
    InvalidInput,
    /// A cross-service existence check reported the referenced entity absent.
    ReferencedEntityMissing,
    /// A remote dependency failed (transport, timeout or unexpected status).
    DependencyUnavailable,
    /// The repository failed to read or write.
    StorageError,
}

/// Domain error payload.
///
/// # Examples
/// ```
/// use storefront::domain::{Error, ErrorCode};
///
/// let err = Error::referenced_entity_missing("user not found");
/// assert_eq!(err.code(), ErrorCode::ReferencedEntityMissing);
/// assert_eq!(err.to_string(), "user not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error with the given category and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Whether the failure originates in infrastructure rather than the caller.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::DependencyUnavailable | ErrorCode::StorageError
        )
    }

    /// Convenience constructor for [`ErrorCode::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorCode::ReferencedEntityMissing`].
    pub fn referenced_entity_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ReferencedEntityMissing, message)
    }

    /// Convenience constructor for [`ErrorCode::DependencyUnavailable`].
    pub fn dependency_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DependencyUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageError`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
