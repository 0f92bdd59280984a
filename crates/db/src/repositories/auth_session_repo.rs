//! Repository for the `auth_sessions` table (refresh tokens).

use sqlx::PgPool;

use kino_core::types::{DbId, Timestamp};

use crate::models::auth_session::AuthSession;

/// Column list for `auth_sessions` queries.
const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, created_at";

/// Stores and resolves hashed refresh tokens.
pub struct AuthSessionRepo;

impl AuthSessionRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        refresh_token_hash: &str,
        expires_at: Timestamp,
    ) -> Result<AuthSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_sessions (user_id, refresh_token_hash, expires_at) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthSession>(&query)
            .bind(user_id)
            .bind(refresh_token_hash)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Resolve a refresh token hash to its session, if one exists.
    pub async fn find_by_token_hash(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<Option<AuthSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_sessions WHERE refresh_token_hash = $1");
        sqlx::query_as::<_, AuthSession>(&query)
            .bind(refresh_token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Delete a session by token hash (logout / rotation).
    /// Returns `false` if no such session existed.
    pub async fn delete_by_token_hash(
        pool: &PgPool,
        refresh_token_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auth_sessions WHERE refresh_token_hash = $1")
            .bind(refresh_token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
