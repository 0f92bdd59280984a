//! Route definitions for the `/actors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /      -> list_actors
/// POST   /      -> create_actor
/// GET    /{id}  -> get_actor
/// PUT    /{id}  -> update_actor
/// PATCH  /{id}  -> patch_actor
/// DELETE /{id}  -> delete_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actors::list_actors).post(actors::create_actor))
        .route(
            "/{id}",
            get(actors::get_actor)
                .put(actors::update_actor)
                .patch(actors::patch_actor)
                .delete(actors::delete_actor),
        )
}
