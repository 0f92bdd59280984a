//! HTTP-level integration tests for the catalog resources: genres, actors,
//! and cinema halls.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Genre CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_genre_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", serde_json::json!({"name": "Drama"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Drama");
    assert!(json["data"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_genre_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/v1/genres", serde_json::json!({"name": "Comedy"})).await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Comedy");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_genre_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/genres/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_genre_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", serde_json::json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_genre_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/genres", serde_json::json!({"name": "Horror"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/genres", serde_json::json!({"name": "Horror"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_genre_via_put(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/v1/genres", serde_json::json!({"name": "Old"})).await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/genres/{id}"),
        serde_json::json!({"name": "New"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "New");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_genre_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp =
        post_json(app, "/api/v1/genres", serde_json::json!({"name": "Delete Me"})).await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/genres/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_genres(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/genres", serde_json::json!({"name": "G1"})).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/genres", serde_json::json!({"name": "G2"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/genres").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Actor CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_actor_includes_full_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/actors",
        serde_json::json!({"first_name": "Grace", "last_name": "Hopper"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["first_name"], "Grace");
    assert_eq!(json["data"]["last_name"], "Hopper");
    assert_eq!(json["data"]["full_name"], "Grace Hopper");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_actor_updates_single_field(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/actors",
        serde_json::json!({"first_name": "Alan", "last_name": "Turing"}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/actors/{id}"),
        serde_json::json!({"last_name": "Kay"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["first_name"], "Alan");
    assert_eq!(json["data"]["full_name"], "Alan Kay");
}

// ---------------------------------------------------------------------------
// Cinema hall CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cinema_hall_computes_capacity(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/cinema-halls",
        serde_json::json!({"name": "Blue", "rows": 10, "seats_in_row": 8}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["capacity"], 80);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_cinema_hall_rejects_nonpositive_dimensions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/cinema-halls",
        serde_json::json!({"name": "Bad", "rows": 0, "seats_in_row": 8}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_cinema_hall_recomputes_capacity(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(
        app,
        "/api/v1/cinema-halls",
        serde_json::json!({"name": "Red", "rows": 5, "seats_in_row": 5}),
    )
    .await;
    let created = body_json(create_resp).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/cinema-halls/{id}"),
        serde_json::json!({"rows": 7}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["capacity"], 35);
}
