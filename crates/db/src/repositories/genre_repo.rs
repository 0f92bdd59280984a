//! Repository for the `genres` table.

use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

/// Column list for `genres` queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!("INSERT INTO genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Update a genre; absent fields keep their current value.
    /// Returns `None` if the genre does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!(
            "UPDATE genres SET name = COALESCE($2, name) WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre. Returns `false` if the genre did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
