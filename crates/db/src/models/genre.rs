use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::DbId;

/// A row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for `POST /genres` and full `PUT` replacement.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// DTO for `PATCH /genres/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateGenre {
    pub name: Option<String>,
}
