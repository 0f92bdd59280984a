use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// The password hash never leaves the server; it is skipped on serialization.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for `POST /auth/register`. `password` is hashed before storage.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}
