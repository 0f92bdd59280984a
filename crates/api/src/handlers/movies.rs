//! Handlers for the `/movies` resource.
//!
//! The list operation renders the compact shape and accepts `title`,
//! `actors`, and `genres` filters; retrieve renders the nested detail
//! shape; writes render the id-array write shape. Shape selection goes
//! through [`shape_for`] on every request.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::params::parse_id_list;
use kino_core::types::DbId;
use kino_db::models::movie::{CreateMovie, MovieFilter, UpdateMovie};
use kino_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::{non_empty, MovieListParams};
use crate::representation::{shape_for, EntityKind, Operation, Shape};
use crate::response::DataResponse;
use crate::state::AppState;

/// Build the movie filter spec from raw query parameters.
///
/// Malformed id lists fail with `InvalidParameter`; present-but-empty
/// parameters are treated as absent.
fn build_filter(params: &MovieListParams) -> Result<MovieFilter, CoreError> {
    let mut filter = MovieFilter::default();

    if let Some(title) = non_empty(&params.title) {
        filter.title = Some(title.to_string());
    }
    if let Some(actors) = non_empty(&params.actors) {
        filter.actor_ids = Some(parse_id_list(actors)?);
    }
    if let Some(genres) = non_empty(&params.genres) {
        filter.genre_ids = Some(parse_id_list(genres)?);
    }

    Ok(filter)
}

/// Render a single movie in the requested shape.
async fn render_movie(pool: &PgPool, movie_id: DbId, shape: Shape) -> AppResult<serde_json::Value> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })
    };

    let value = match shape {
        Shape::List => {
            let item = MovieRepo::list_item(pool, movie_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(item)
        }
        Shape::Detail => {
            let detail = MovieRepo::find_detail(pool, movie_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(detail)
        }
        Shape::Write => {
            let movie = MovieRepo::find_by_id(pool, movie_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(movie)
        }
    };

    value.map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))
}

/// GET /api/v1/movies
///
/// Supports `title` (substring), `actors` (CSV ids), `genres` (CSV ids).
/// All provided filters AND-combine; the result is duplicate-free.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = build_filter(&params)?;
    let movies = MovieRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse { data: movies }))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shape = shape_for(EntityKind::Movie, Operation::Retrieve);
    let movie = render_movie(&state.pool, movie_id, shape).await?;

    Ok(Json(DataResponse { data: movie }))
}

/// POST /api/v1/movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    let shape = shape_for(EntityKind::Movie, Operation::Create);
    let rendered = render_movie(&state.pool, movie.id, shape).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: rendered })))
}

/// PUT /api/v1/movies/{id}
///
/// Full replacement, including the association lists.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let update = UpdateMovie {
        title: Some(input.title),
        description: Some(input.description),
        duration: Some(input.duration),
        genres: Some(input.genres),
        actors: Some(input.actors),
    };
    MovieRepo::update(&state.pool, movie_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id, "Movie updated");

    let shape = shape_for(EntityKind::Movie, Operation::Update);
    let rendered = render_movie(&state.pool, movie_id, shape).await?;

    Ok(Json(DataResponse { data: rendered }))
}

/// PATCH /api/v1/movies/{id}
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    MovieRepo::update(&state.pool, movie_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;

    tracing::info!(movie_id, "Movie updated");

    let shape = shape_for(EntityKind::Movie, Operation::PartialUpdate);
    let rendered = render_movie(&state.pool, movie_id, shape).await?;

    Ok(Json(DataResponse { data: rendered }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, movie_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }));
    }

    tracing::info!(movie_id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
