//! Route definitions for the `/genres` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
///
/// ```text
/// GET    /      -> list_genres
/// POST   /      -> create_genre
/// GET    /{id}  -> get_genre
/// PUT    /{id}  -> update_genre
/// PATCH  /{id}  -> patch_genre
/// DELETE /{id}  -> delete_genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/{id}",
            get(genres::get_genre)
                .put(genres::update_genre)
                .patch(genres::patch_genre)
                .delete(genres::delete_genre),
        )
}
