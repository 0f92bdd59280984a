//! Route definitions for the `/movie-sessions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie_sessions;
use crate::state::AppState;

/// Routes mounted at `/movie-sessions`.
///
/// ```text
/// GET    /      -> list_movie_sessions (?movie, ?date)
/// POST   /      -> create_movie_session
/// GET    /{id}  -> get_movie_session
/// PUT    /{id}  -> update_movie_session
/// PATCH  /{id}  -> patch_movie_session
/// DELETE /{id}  -> delete_movie_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movie_sessions::list_movie_sessions).post(movie_sessions::create_movie_session),
        )
        .route(
            "/{id}",
            get(movie_sessions::get_movie_session)
                .put(movie_sessions::update_movie_session)
                .patch(movie_sessions::patch_movie_session)
                .delete(movie_sessions::delete_movie_session),
        )
}
