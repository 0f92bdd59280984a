//! Movie entity models, representation shapes, and the list filter spec.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use kino_core::types::DbId;

use super::actor::Actor;
use super::genre::Genre;

/// Write representation: the mutable shape used for create/update responses.
/// Associations are rendered as id arrays.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Running time in minutes.
    pub duration: i32,
    pub genres: Vec<DbId>,
    pub actors: Vec<DbId>,
}

/// List representation: compact, with associations flattened to names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieListItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration: i32,
    /// Genre names, sorted.
    pub genres: Vec<String>,
    /// Actor full names, sorted.
    pub actors: Vec<String>,
}

/// Detail representation: full nested genre and actor objects.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<Genre>,
    pub actors: Vec<Actor>,
}

/// DTO for `POST /movies` and full `PUT` replacement.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i32,
    #[serde(default)]
    pub genres: Vec<DbId>,
    #[serde(default)]
    pub actors: Vec<DbId>,
}

/// DTO for `PATCH /movies/{id}`. Absent fields are left unchanged,
/// including the association lists.
#[derive(Debug, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub genres: Option<Vec<DbId>>,
    pub actors: Option<Vec<DbId>>,
}

/// Eagerly-built filter spec for the movie list query.
///
/// All present predicates AND-combine. Id lists match movies having at
/// least one association with an id in the list.
#[derive(Debug, Default)]
pub struct MovieFilter {
    /// Case-insensitive substring match on title.
    pub title: Option<String>,
    pub actor_ids: Option<Vec<DbId>>,
    pub genre_ids: Option<Vec<DbId>>,
}
