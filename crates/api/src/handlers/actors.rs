//! Handlers for the `/actors` resource.
//!
//! Actors have a single representation, so every operation renders the
//! write shape (including the derived `full_name`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::types::DbId;
use kino_db::models::actor::{CreateActor, UpdateActor};
use kino_db::repositories::ActorRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/actors
pub async fn list_actors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: actors }))
}

/// GET /api/v1/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorRepo::find_by_id(&state.pool, actor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }))?;
    Ok(Json(DataResponse { data: actor }))
}

/// POST /api/v1/actors
pub async fn create_actor(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let actor = ActorRepo::create(&state.pool, &input).await?;

    tracing::info!(actor_id = actor.id, full_name = %actor.full_name, "Actor created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: actor })))
}

/// PUT /api/v1/actors/{id}
pub async fn update_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
    Json(input): Json<CreateActor>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let update = UpdateActor {
        first_name: Some(input.first_name),
        last_name: Some(input.last_name),
    };
    let actor = ActorRepo::update(&state.pool, actor_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }))?;

    tracing::info!(actor_id, "Actor updated");

    Ok(Json(DataResponse { data: actor }))
}

/// PATCH /api/v1/actors/{id}
pub async fn patch_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorRepo::update(&state.pool, actor_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }))?;

    tracing::info!(actor_id, "Actor updated");

    Ok(Json(DataResponse { data: actor }))
}

/// DELETE /api/v1/actors/{id}
pub async fn delete_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ActorRepo::delete(&state.pool, actor_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
        }));
    }

    tracing::info!(actor_id, "Actor deleted");

    Ok(StatusCode::NO_CONTENT)
}
