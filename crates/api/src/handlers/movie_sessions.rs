//! Handlers for the `/movie-sessions` resource.
//!
//! The list operation annotates every session with `tickets_available`
//! and accepts `movie` (CSV ids) and `date` (YYYY-MM-DD) filters.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use kino_core::error::CoreError;
use kino_core::params::{parse_date, parse_id_list};
use kino_core::types::DbId;
use kino_db::models::movie_session::{
    CreateMovieSession, MovieSessionFilter, UpdateMovieSession,
};
use kino_db::repositories::MovieSessionRepo;

use crate::error::{AppError, AppResult};
use crate::query::{non_empty, MovieSessionListParams};
use crate::representation::{shape_for, EntityKind, Operation, Shape};
use crate::response::DataResponse;
use crate::state::AppState;

/// Build the session filter spec from raw query parameters.
fn build_filter(params: &MovieSessionListParams) -> Result<MovieSessionFilter, CoreError> {
    let mut filter = MovieSessionFilter::default();

    if let Some(movie) = non_empty(&params.movie) {
        filter.movie_ids = Some(parse_id_list(movie)?);
    }
    if let Some(date) = non_empty(&params.date) {
        filter.date = Some(parse_date(date)?);
    }

    Ok(filter)
}

/// Render a single session in the requested shape.
async fn render_session(
    pool: &PgPool,
    session_id: DbId,
    shape: Shape,
) -> AppResult<serde_json::Value> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "MovieSession",
            id: session_id,
        })
    };

    let value = match shape {
        Shape::List => {
            let item = MovieSessionRepo::list_item(pool, session_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(item)
        }
        Shape::Detail => {
            let detail = MovieSessionRepo::find_detail(pool, session_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(detail)
        }
        Shape::Write => {
            let session = MovieSessionRepo::find_by_id(pool, session_id)
                .await?
                .ok_or_else(not_found)?;
            serde_json::to_value(session)
        }
    };

    value.map_err(|e| AppError::InternalError(format!("Serialization error: {e}")))
}

/// GET /api/v1/movie-sessions
///
/// Supports `movie` (CSV ids) and `date` (YYYY-MM-DD); filters AND-combine.
pub async fn list_movie_sessions(
    State(state): State<AppState>,
    Query(params): Query<MovieSessionListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = build_filter(&params)?;
    let sessions = MovieSessionRepo::list(&state.pool, &filter).await?;

    Ok(Json(DataResponse { data: sessions }))
}

/// GET /api/v1/movie-sessions/{id}
pub async fn get_movie_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shape = shape_for(EntityKind::MovieSession, Operation::Retrieve);
    let session = render_session(&state.pool, session_id, shape).await?;

    Ok(Json(DataResponse { data: session }))
}

/// POST /api/v1/movie-sessions
pub async fn create_movie_session(
    State(state): State<AppState>,
    Json(input): Json<CreateMovieSession>,
) -> AppResult<impl IntoResponse> {
    let session = MovieSessionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        session_id = session.id,
        movie_id = session.movie_id,
        cinema_hall_id = session.cinema_hall_id,
        "Movie session created",
    );

    let shape = shape_for(EntityKind::MovieSession, Operation::Create);
    let rendered = render_session(&state.pool, session.id, shape).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: rendered })))
}

/// PUT /api/v1/movie-sessions/{id}
pub async fn update_movie_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<CreateMovieSession>,
) -> AppResult<impl IntoResponse> {
    let update = UpdateMovieSession {
        show_time: Some(input.show_time),
        movie_id: Some(input.movie_id),
        cinema_hall_id: Some(input.cinema_hall_id),
    };
    MovieSessionRepo::update(&state.pool, session_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieSession",
            id: session_id,
        }))?;

    tracing::info!(session_id, "Movie session updated");

    let shape = shape_for(EntityKind::MovieSession, Operation::Update);
    let rendered = render_session(&state.pool, session_id, shape).await?;

    Ok(Json(DataResponse { data: rendered }))
}

/// PATCH /api/v1/movie-sessions/{id}
pub async fn patch_movie_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
    Json(input): Json<UpdateMovieSession>,
) -> AppResult<impl IntoResponse> {
    MovieSessionRepo::update(&state.pool, session_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MovieSession",
            id: session_id,
        }))?;

    tracing::info!(session_id, "Movie session updated");

    let shape = shape_for(EntityKind::MovieSession, Operation::PartialUpdate);
    let rendered = render_session(&state.pool, session_id, shape).await?;

    Ok(Json(DataResponse { data: rendered }))
}

/// DELETE /api/v1/movie-sessions/{id}
pub async fn delete_movie_session(
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieSessionRepo::delete(&state.pool, session_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MovieSession",
            id: session_id,
        }));
    }

    tracing::info!(session_id, "Movie session deleted");

    Ok(StatusCode::NO_CONTENT)
}
