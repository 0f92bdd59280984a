use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::DbId;

/// A row from the `actors` table, with the derived `full_name` column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

/// DTO for `POST /actors` and full `PUT` replacement.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
}

/// DTO for `PATCH /actors/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateActor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
