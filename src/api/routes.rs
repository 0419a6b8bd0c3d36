//! API route configuration.

use crate::api::handlers::{
    analytics_handler, create_link_handler, delete_link_handler, get_link_handler,
    link_method_override_handler, list_links_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`                          - List links, newest first
/// - `POST   /links`                          - Create a link
/// - `GET    /links/analytics`                - Totals, top 5 and 10 newest links
/// - `GET    /links/{code}`                   - Fetch a link (no click counted)
/// - `PUT    /links/{code}`                   - Change URL and/or rename
/// - `DELETE /links/{code}`                   - Delete a link
/// - `POST   /links/{code}?_method=DELETE`    - Delete via HTML form
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/links/analytics", get(analytics_handler))
        .route(
            "/links/{code}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler)
                .post(link_method_override_handler),
        )
}
