//! Handler for the analytics summary.

use axum::{Json, extract::State};

use crate::domain::entities::Analytics;
use crate::error::AppError;
use crate::state::AppState;

/// Returns totals and leaderboards across all links.
///
/// # Endpoint
///
/// `GET /api/links/analytics`
///
/// # Response
///
/// ```json
/// {
///   "totalLinks": 2,
///   "totalClicks": 7,
///   "topLinks": [
///     { "code": "abc123", "url": "https://example.com", "clicks": 7, "lastClicked": "2026-01-01T12:00:00Z" }
///   ],
///   "recentLinks": [
///     { "code": "xyz789", "url": "https://rust-lang.org", "createdAt": "2026-01-01T11:00:00Z", "clicks": 0 }
///   ]
/// }
/// ```
///
/// `topLinks` holds at most 5 entries ordered by clicks, `recentLinks` at most
/// 10 ordered by creation time, newest first.
pub async fn analytics_handler(State(state): State<AppState>) -> Result<Json<Analytics>, AppError> {
    let analytics = state.link_service.analytics().await?;
    Ok(Json(analytics))
}
