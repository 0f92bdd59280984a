//! Route definitions for the `/orders` resource.
//!
//! All endpoints require authentication and operate on the caller's own
//! orders only.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /      -> list_orders (?page, ?page_size)
/// POST   /      -> create_order
/// GET    /{id}  -> get_order
/// PUT    /{id}  -> update_order
/// PATCH  /{id}  -> patch_order
/// DELETE /{id}  -> delete_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .patch(orders::patch_order)
                .delete(orders::delete_order),
        )
}
