//! Handlers for the `/orders` resource.
//!
//! All operations require authentication and are scoped to the requesting
//! principal. Another user's order id behaves exactly like a missing id.
//! On create, the owning user is forced server-side; a caller-supplied
//! owner field is ignored by deserialization.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;
use validator::Validate;

use kino_core::error::CoreError;
use kino_core::types::DbId;
use kino_db::models::order::{CreateOrder, TicketSeat, UpdateOrder};
use kino_db::repositories::order_repo::clamp_page_size;
use kino_db::repositories::{MovieSessionRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::query::OrderListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;
use crate::middleware::auth::AuthUser;

/// Check every requested seat against the bounds of its session's hall.
///
/// A missing session is `NotFound`; an out-of-range row or seat is a
/// `Validation` error naming the offending field.
async fn validate_tickets(pool: &PgPool, tickets: &[TicketSeat]) -> AppResult<()> {
    for ticket in tickets {
        let bounds = MovieSessionRepo::hall_bounds(pool, ticket.movie_session_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "MovieSession",
                id: ticket.movie_session_id,
            }))?;

        if ticket.row < 1 || ticket.row > bounds.rows {
            return Err(AppError::Core(CoreError::Validation(format!(
                "row must be in range 1..={} (got {})",
                bounds.rows, ticket.row
            ))));
        }
        if ticket.seat < 1 || ticket.seat > bounds.seats_in_row {
            return Err(AppError::Core(CoreError::Validation(format!(
                "seat must be in range 1..={} (got {})",
                bounds.seats_in_row, ticket.seat
            ))));
        }
    }
    Ok(())
}

/// GET /api/v1/orders
///
/// Paginated listing of the principal's orders, newest first.
/// `page_size` overrides the default of 5, clamped to 10; `page` selects
/// the 1-based page number.
pub async fn list_orders(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = clamp_page_size(params.page_size);

    let page_result = OrderRepo::list_for_user(&state.pool, auth.user_id, page, page_size).await?;

    Ok(Json(PaginatedResponse {
        data: page_result.orders,
        page,
        page_size,
        total: page_result.total,
    }))
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_for_user(&state.pool, auth.user_id, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    Ok(Json(DataResponse { data: order }))
}

/// POST /api/v1/orders
///
/// The owning user is always the authenticated principal, regardless of
/// anything in the payload.
pub async fn create_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_tickets(&state.pool, &input.tickets).await?;

    let order_id = OrderRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        order_id,
        user_id = auth.user_id,
        ticket_count = input.tickets.len(),
        "Order created",
    );

    let order = OrderRepo::find_for_user(&state.pool, auth.user_id, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// PUT /api/v1/orders/{id}
///
/// Replaces the order's ticket set.
pub async fn update_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_tickets(&state.pool, &input.tickets).await?;

    let replaced =
        OrderRepo::replace_tickets(&state.pool, auth.user_id, order_id, &input.tickets).await?;
    if !replaced {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }));
    }

    tracing::info!(order_id, user_id = auth.user_id, "Order tickets replaced");

    let order = OrderRepo::find_for_user(&state.pool, auth.user_id, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    Ok(Json(DataResponse { data: order }))
}

/// PATCH /api/v1/orders/{id}
///
/// The ticket list is the only mutable field; an absent list is a no-op.
pub async fn patch_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
    Json(input): Json<UpdateOrder>,
) -> AppResult<impl IntoResponse> {
    if let Some(tickets) = &input.tickets {
        if tickets.is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "an order must contain at least one ticket".into(),
            )));
        }
        validate_tickets(&state.pool, tickets).await?;

        let replaced =
            OrderRepo::replace_tickets(&state.pool, auth.user_id, order_id, tickets).await?;
        if !replaced {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Order",
                id: order_id,
            }));
        }

        tracing::info!(order_id, user_id = auth.user_id, "Order tickets replaced");
    }

    let order = OrderRepo::find_for_user(&state.pool, auth.user_id, order_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }))?;

    Ok(Json(DataResponse { data: order }))
}

/// DELETE /api/v1/orders/{id}
pub async fn delete_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(order_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = OrderRepo::delete_for_user(&state.pool, auth.user_id, order_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id: order_id,
        }));
    }

    tracing::info!(order_id, user_id = auth.user_id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}
