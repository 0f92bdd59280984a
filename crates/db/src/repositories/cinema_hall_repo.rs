//! Repository for the `cinema_halls` table.

use sqlx::PgPool;

use kino_core::types::DbId;

use crate::models::cinema_hall::{CinemaHall, CreateCinemaHall, UpdateCinemaHall};

/// Column list for `cinema_halls` queries, including the derived capacity.
const COLUMNS: &str = "id, name, rows, seats_in_row, rows * seats_in_row AS capacity";

/// Provides CRUD operations for cinema halls.
pub struct CinemaHallRepo;

impl CinemaHallRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CinemaHall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema_halls ORDER BY id");
        sqlx::query_as::<_, CinemaHall>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CinemaHall>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinema_halls WHERE id = $1");
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateCinemaHall,
    ) -> Result<CinemaHall, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinema_halls (name, rows, seats_in_row) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_in_row)
            .fetch_one(pool)
            .await
    }

    /// Update a hall; absent fields keep their current value.
    /// Returns `None` if the hall does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCinemaHall,
    ) -> Result<Option<CinemaHall>, sqlx::Error> {
        let query = format!(
            "UPDATE cinema_halls \
             SET name = COALESCE($2, name), \
                 rows = COALESCE($3, rows), \
                 seats_in_row = COALESCE($4, seats_in_row) \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CinemaHall>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.rows)
            .bind(input.seats_in_row)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hall. Returns `false` if the hall did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cinema_halls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
