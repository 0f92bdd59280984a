//! Handlers for the `/genres` resource.
//!
//! Genres have a single representation, so every operation renders the
//! write shape.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::types::DbId;
use kino_db::models::genre::{CreateGenre, UpdateGenre};
use kino_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /api/v1/genres/{id}
pub async fn get_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::find_by_id(&state.pool, genre_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }))?;
    Ok(Json(DataResponse { data: genre }))
}

/// POST /api/v1/genres
pub async fn create_genre(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let genre = GenreRepo::create(&state.pool, &input).await?;

    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: genre })))
}

/// PUT /api/v1/genres/{id}
///
/// Full replacement: the payload must carry every mutable field.
pub async fn update_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let update = UpdateGenre {
        name: Some(input.name),
    };
    let genre = GenreRepo::update(&state.pool, genre_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }))?;

    tracing::info!(genre_id, "Genre updated");

    Ok(Json(DataResponse { data: genre }))
}

/// PATCH /api/v1/genres/{id}
pub async fn patch_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
    Json(input): Json<UpdateGenre>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreRepo::update(&state.pool, genre_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }))?;

    tracing::info!(genre_id, "Genre updated");

    Ok(Json(DataResponse { data: genre }))
}

/// DELETE /api/v1/genres/{id}
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GenreRepo::delete(&state.pool, genre_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }));
    }

    tracing::info!(genre_id, "Genre deleted");

    Ok(StatusCode::NO_CONTENT)
}
