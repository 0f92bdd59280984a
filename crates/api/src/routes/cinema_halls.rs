//! Route definitions for the `/cinema-halls` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cinema_halls;
use crate::state::AppState;

/// Routes mounted at `/cinema-halls`.
///
/// ```text
/// GET    /      -> list_cinema_halls
/// POST   /      -> create_cinema_hall
/// GET    /{id}  -> get_cinema_hall
/// PUT    /{id}  -> update_cinema_hall
/// PATCH  /{id}  -> patch_cinema_hall
/// DELETE /{id}  -> delete_cinema_hall
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(cinema_halls::list_cinema_halls).post(cinema_halls::create_cinema_hall),
        )
        .route(
            "/{id}",
            get(cinema_halls::get_cinema_hall)
                .put(cinema_halls::update_cinema_hall)
                .patch(cinema_halls::patch_cinema_hall)
                .delete(cinema_halls::delete_cinema_hall),
        )
}
