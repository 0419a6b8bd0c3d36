//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Validate the code shape
/// 2. Increment the click counter and stamp `lastClicked` (one store call)
/// 3. Return `302 Found` with the target in `Location`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = path?;
    let url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
