//! Repository for the `users` table.

use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, username, email, password_hash, created_at";

/// Provides account lookup and creation for authentication.
pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Create an account. `password_hash` must already be an Argon2id PHC
    /// string; plaintext never reaches this layer.
    pub async fn create(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await
    }
}
