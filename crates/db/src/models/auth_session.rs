use sqlx::FromRow;

use kino_core::types::{DbId, Timestamp};

/// A row from the `auth_sessions` table.
///
/// One row per active refresh token. Only the SHA-256 hash of the token is
/// stored; the plaintext lives solely with the client.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}
