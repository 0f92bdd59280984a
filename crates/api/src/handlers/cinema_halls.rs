//! Handlers for the `/cinema-halls` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::types::DbId;
use kino_db::models::cinema_hall::{CreateCinemaHall, UpdateCinemaHall};
use kino_db::repositories::CinemaHallRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cinema-halls
pub async fn list_cinema_halls(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let halls = CinemaHallRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: halls }))
}

/// GET /api/v1/cinema-halls/{id}
pub async fn get_cinema_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let hall = CinemaHallRepo::find_by_id(&state.pool, hall_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id: hall_id,
        }))?;
    Ok(Json(DataResponse { data: hall }))
}

/// POST /api/v1/cinema-halls
pub async fn create_cinema_hall(
    State(state): State<AppState>,
    Json(input): Json<CreateCinemaHall>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let hall = CinemaHallRepo::create(&state.pool, &input).await?;

    tracing::info!(
        hall_id = hall.id,
        name = %hall.name,
        capacity = hall.capacity,
        "Cinema hall created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: hall })))
}

/// PUT /api/v1/cinema-halls/{id}
pub async fn update_cinema_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<DbId>,
    Json(input): Json<CreateCinemaHall>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let update = UpdateCinemaHall {
        name: Some(input.name),
        rows: Some(input.rows),
        seats_in_row: Some(input.seats_in_row),
    };
    let hall = CinemaHallRepo::update(&state.pool, hall_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id: hall_id,
        }))?;

    tracing::info!(hall_id, "Cinema hall updated");

    Ok(Json(DataResponse { data: hall }))
}

/// PATCH /api/v1/cinema-halls/{id}
pub async fn patch_cinema_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<DbId>,
    Json(input): Json<UpdateCinemaHall>,
) -> AppResult<impl IntoResponse> {
    let hall = CinemaHallRepo::update(&state.pool, hall_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id: hall_id,
        }))?;

    tracing::info!(hall_id, "Cinema hall updated");

    Ok(Json(DataResponse { data: hall }))
}

/// DELETE /api/v1/cinema-halls/{id}
pub async fn delete_cinema_hall(
    State(state): State<AppState>,
    Path(hall_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CinemaHallRepo::delete(&state.pool, hall_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CinemaHall",
            id: hall_id,
        }));
    }

    tracing::info!(hall_id, "Cinema hall deleted");

    Ok(StatusCode::NO_CONTENT)
}
