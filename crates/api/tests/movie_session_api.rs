//! HTTP-level integration tests for the `/movie-sessions` resource:
//! CRUD, representation shapes, seat availability, and list filtering.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_auth, register_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_movie(pool: &PgPool, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/movies",
        serde_json::json!({
            "title": title,
            "description": format!("About {title}"),
            "duration": 120,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_hall(pool: &PgPool, name: &str, rows: i32, seats_in_row: i32) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/cinema-halls",
        serde_json::json!({"name": name, "rows": rows, "seats_in_row": seats_in_row}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_session(pool: &PgPool, movie_id: i64, hall_id: i64, show_time: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/movie-sessions",
        serde_json::json!({
            "show_time": show_time,
            "movie_id": movie_id,
            "cinema_hall_id": hall_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Book `count` seats in the given session for a fresh user, filling
/// 8-seat rows front to back.
async fn book_seats(pool: &PgPool, session_id: i64, count: i32) {
    let (token, _) = register_user(pool, "booker").await;
    let tickets: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "movie_session_id": session_id,
                "row": i / 8 + 1,
                "seat": i % 8 + 1,
            })
        })
        .collect();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/orders",
        serde_json::json!({"tickets": tickets}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Representation shapes
// ---------------------------------------------------------------------------

/// Create returns the write shape: plain foreign-key ids.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_session_returns_write_shape(pool: PgPool) {
    let movie_id = create_movie(&pool, "Dune").await;
    let hall_id = create_hall(&pool, "Blue", 10, 8).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/movie-sessions",
        serde_json::json!({
            "show_time": "2026-09-01T18:00:00Z",
            "movie_id": movie_id,
            "cinema_hall_id": hall_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["movie_id"], movie_id);
    assert_eq!(json["data"]["cinema_hall_id"], hall_id);
}

/// List annotates each session with titles, hall info, and availability.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_sessions_returns_annotated_shape(pool: PgPool) {
    let movie_id = create_movie(&pool, "Dune").await;
    let hall_id = create_hall(&pool, "Blue", 10, 8).await;
    create_session(&pool, movie_id, hall_id, "2026-09-01T18:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie-sessions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["movie_title"], "Dune");
    assert_eq!(sessions[0]["cinema_hall_name"], "Blue");
    assert_eq!(sessions[0]["cinema_hall_capacity"], 80);
    assert_eq!(sessions[0]["tickets_available"], 80);
}

/// Availability is hall capacity minus booked tickets.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_tickets_available_subtracts_bookings(pool: PgPool) {
    let movie_id = create_movie(&pool, "Dune").await;
    let hall_id = create_hall(&pool, "Blue", 10, 8).await;
    let session_id = create_session(&pool, movie_id, hall_id, "2026-09-01T18:00:00Z").await;

    book_seats(&pool, session_id, 12).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie-sessions").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["tickets_available"], 68);
}

/// Retrieve nests the movie, the hall, and the taken seats.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_session_returns_detail_shape(pool: PgPool) {
    let movie_id = create_movie(&pool, "Arrival").await;
    let hall_id = create_hall(&pool, "Red", 5, 5).await;
    let session_id = create_session(&pool, movie_id, hall_id, "2026-09-02T20:00:00Z").await;

    book_seats(&pool, session_id, 2).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movie-sessions/{session_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["movie"]["title"], "Arrival");
    assert_eq!(json["data"]["cinema_hall"]["name"], "Red");

    let taken = json["data"]["taken_places"].as_array().unwrap();
    assert_eq!(taken.len(), 2);
    assert_eq!(taken[0]["row"], 1);
}

// ---------------------------------------------------------------------------
// List filters
// ---------------------------------------------------------------------------

/// `movie` filters by movie id (CSV of ids).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_movie_filter(pool: PgPool) {
    let m1 = create_movie(&pool, "First").await;
    let m2 = create_movie(&pool, "Second").await;
    let hall_id = create_hall(&pool, "Blue", 4, 4).await;
    create_session(&pool, m1, hall_id, "2026-09-01T18:00:00Z").await;
    create_session(&pool, m2, hall_id, "2026-09-01T21:00:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/movie-sessions?movie={m1}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let sessions = json["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["movie_title"], "First");
}

/// `date` matches the calendar date of `show_time`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_date_filter(pool: PgPool) {
    let movie_id = create_movie(&pool, "Dune").await;
    let hall_id = create_hall(&pool, "Blue", 4, 4).await;
    create_session(&pool, movie_id, hall_id, "2026-09-01T23:30:00Z").await;
    create_session(&pool, movie_id, hall_id, "2026-09-02T00:30:00Z").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie-sessions?date=2026-09-01").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// A calendar-invalid date fails with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_date_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie-sessions?date=2024-02-30").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_PARAMETER");
}

/// A non-zero-padded date is rejected, not silently reinterpreted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_unpadded_date_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/movie-sessions?date=2024-2-3").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Referential integrity
// ---------------------------------------------------------------------------

/// A session pointing at a missing movie fails with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_session_with_missing_movie_returns_400(pool: PgPool) {
    let hall_id = create_hall(&pool, "Blue", 4, 4).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/movie-sessions",
        serde_json::json!({
            "show_time": "2026-09-01T18:00:00Z",
            "movie_id": 999999,
            "cinema_hall_id": hall_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
