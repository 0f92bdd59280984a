//! Repository for the `actors` table.

use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::actor::{Actor, CreateActor, UpdateActor};

/// Column list for `actors` queries, including the derived full name.
const COLUMNS: &str = "id, first_name, last_name, first_name || ' ' || last_name AS full_name";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (first_name, last_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Update an actor; absent fields keep their current value.
    /// Returns `None` if the actor does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors \
             SET first_name = COALESCE($2, first_name), \
                 last_name = COALESCE($3, last_name) \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor. Returns `false` if the actor did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
