//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State handed to every handler through axum's `State` extractor.
///
/// Cloning is cheap; the service and its store are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
