pub mod actors;
pub mod auth;
pub mod cinema_halls;
pub mod genres;
pub mod health;
pub mod movie_sessions;
pub mod movies;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/refresh             refresh (public)
/// /auth/logout              logout (requires auth)
///
/// /genres                   list, create
/// /genres/{id}              get, put, patch, delete
///
/// /actors                   list, create
/// /actors/{id}              get, put, patch, delete
///
/// /cinema-halls             list, create
/// /cinema-halls/{id}        get, put, patch, delete
///
/// /movies                   list (?title, ?actors, ?genres), create
/// /movies/{id}              get, put, patch, delete
///
/// /movie-sessions           list (?movie, ?date), create
/// /movie-sessions/{id}      get, put, patch, delete
///
/// /orders                   list (paginated, own orders), create
/// /orders/{id}              get, put, patch, delete (own orders)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Catalog resources.
        .nest("/genres", genres::router())
        .nest("/actors", actors::router())
        .nest("/cinema-halls", cinema_halls::router())
        .nest("/movies", movies::router())
        .nest("/movie-sessions", movie_sessions::router())
        // Ticket orders, scoped to the authenticated user.
        .nest("/orders", orders::router())
}
