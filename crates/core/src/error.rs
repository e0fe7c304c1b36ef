//! Domain error type shared across crates.

use crate::types::DbId;

/// Domain-level errors produced by core logic and surfaced to callers.
///
/// The API layer maps each variant onto an HTTP status and a stable error
/// code; nothing here knows about HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
