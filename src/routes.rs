//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{code}`  - Short link redirect (302)
//! - `DELETE /{code}`  - Delete a short link
//! - `GET    /api/health` - Health check
//! - `/api/links/*`    - Link management (see [`crate::api::routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on link routes (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{delete_link_handler, health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application router without path normalization.
///
/// `rate_limit` of `None` disables the per-IP limiter, which also lifts the
/// requirement to serve with connect info.
pub fn router(state: AppState, rate_limit: Option<RateLimit>) -> Router {
    let link_router = Router::new()
        .route("/{code}", get(redirect_handler).delete(delete_link_handler))
        .nest("/api", api::routes::link_routes());

    let link_router = match rate_limit {
        Some(limit) => link_router.layer(rate_limit::layer(limit)),
        None => link_router,
    };

    Router::new()
        .route("/api/health", get(health_handler))
        .merge(link_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/api/links/` and
/// `/api/links` reach the same handler.
pub fn app_router(state: AppState, rate_limit: Option<RateLimit>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, rate_limit))
}
