//! Refresh-token session model and DTOs.

use sqlx::FromRow;
use wayfarer_core::types::{DbId, Timestamp};

/// Session row from the `sessions` table.
///
/// `refresh_token_hash` is the SHA-256 hex digest of the opaque refresh
/// token; the plaintext never touches the database.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
