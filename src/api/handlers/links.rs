//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeletedResponse, MethodOverride, UpdateLinkRequest};
use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validation::is_valid_code;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Link>>, AppError> {
    let links = state.link_service.list().await?;
    Ok(Json(links))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "code": "abc123" }
/// ```
///
/// `code` is optional; a random 6–8 character code is generated when absent.
///
/// # Response
///
/// `201 Created` with the stored link:
///
/// ```json
/// {
///   "code": "abc123",
///   "url": "https://example.com",
///   "clicks": 0,
///   "createdAt": "2026-01-01T12:00:00Z",
///   "lastClicked": null
/// }
/// ```
///
/// # Errors
///
/// - 400 if the URL or the custom code is invalid
/// - 409 if the custom code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Link>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create(
            payload.url.as_deref().unwrap_or_default(),
            payload.code.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Returns a single link. Reading a link does not count as a click.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// - 400 if the code is malformed
/// - 404 if no link has this code
pub async fn get_link_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<Link>, AppError> {
    let Path(code) = path?;
    let link = state.link_service.get(&code).await?;
    Ok(Json(link))
}

/// Changes a link's target URL and/or renames it.
///
/// # Endpoint
///
/// `PUT /api/links/{code}`
///
/// # Request Body
///
/// ```json
/// { "url": "https://new-destination.com", "newCode": "xyz789" }
/// ```
///
/// At least one field is required. Clicks and creation time are preserved
/// across a rename.
///
/// # Errors
///
/// - 400 if a code or the URL is malformed, or the body is empty
/// - 404 if no link has this code
/// - 409 if `newCode` belongs to another link
pub async fn update_link_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<Link>, AppError> {
    let Path(code) = path?;
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .update(&code, payload.url.as_deref(), payload.new_code.as_deref())
        .await?;

    Ok(Json(link))
}

/// Deletes a link permanently.
///
/// # Endpoints
///
/// - `DELETE /api/links/{code}`
/// - `DELETE /{code}`
///
/// # Response
///
/// `200 OK` with `{"ok": true}`.
///
/// # Errors
///
/// - 400 if the code is malformed
/// - 404 if the link does not exist or was already deleted
pub async fn delete_link_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(code) = path?;
    state.link_service.delete(&code).await?;
    Ok(Json(DeletedResponse { ok: true }))
}

/// Form-friendly delete: `POST /api/links/{code}?_method=DELETE`.
///
/// Any other POST to a link is rejected.
///
/// # Errors
///
/// - 400 if the code is malformed or `_method` is not `DELETE`
/// - 404 as for [`delete_link_handler`]
pub async fn link_method_override_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    query: Result<Query<MethodOverride>, QueryRejection>,
) -> Result<Json<DeletedResponse>, AppError> {
    let Path(code) = path?;
    let Query(method) = query?;

    if !is_valid_code(code.trim()) {
        return Err(AppError::bad_request(
            "Invalid code format",
            json!({ "code": code }),
        ));
    }

    if !method.is_delete() {
        return Err(AppError::bad_request(
            "Unsupported POST action",
            json!({ "method": method.method }),
        ));
    }

    delete_link_handler(Ok(Path(code)), State(state)).await
}
