use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::DbId;

/// A row from the `cinema_halls` table, with the derived `capacity` column
/// (`rows * seats_in_row`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CinemaHall {
    pub id: DbId,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i32,
}

/// DTO for `POST /cinema-halls` and full `PUT` replacement.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCinemaHall {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "rows must be positive"))]
    pub rows: i32,
    #[validate(range(min = 1, message = "seats_in_row must be positive"))]
    pub seats_in_row: i32,
}

/// DTO for `PATCH /cinema-halls/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCinemaHall {
    pub name: Option<String>,
    pub rows: Option<i32>,
    pub seats_in_row: Option<i32>,
}
