//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /      -> list_movies (?title, ?actors, ?genres)
/// POST   /      -> create_movie
/// GET    /{id}  -> get_movie
/// PUT    /{id}  -> update_movie
/// PATCH  /{id}  -> patch_movie
/// DELETE /{id}  -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/{id}",
            get(movies::get_movie)
                .put(movies::update_movie)
                .patch(movies::patch_movie)
                .delete(movies::delete_movie),
        )
}
