//! DTOs for the link management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/links`.
///
/// `url` is optional at the serde level so that a missing field is reported
/// as "Invalid URL" by the service instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The URL to shorten.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: Option<String>,

    /// Optional custom short code (6–8 alphanumeric characters).
    #[validate(length(max = 64, message = "Code must be 6–8 alphanumeric characters"))]
    pub code: Option<String>,
}

/// Request body for `PUT /api/links/{code}`.
///
/// Both fields are optional, but at least one must be non-blank.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    /// New destination URL.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: Option<String>,

    /// Renames the link.
    #[validate(length(max = 64, message = "New code must be 6–8 alphanumeric characters"))]
    pub new_code: Option<String>,
}

/// Query string of `POST /api/links/{code}`, used by HTML forms that cannot
/// send `DELETE`.
#[derive(Debug, Default, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

impl MethodOverride {
    pub fn is_delete(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|m| m.trim().eq_ignore_ascii_case("DELETE"))
    }
}

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_accepts_camel_case() {
        let req: UpdateLinkRequest =
            serde_json::from_value(json!({ "url": "https://a.com", "newCode": "xyz789" }))
                .unwrap();

        assert_eq!(req.url.as_deref(), Some("https://a.com"));
        assert_eq!(req.new_code.as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_create_request_url_too_long() {
        let req = CreateLinkRequest {
            url: Some(format!("https://example.com/{}", "a".repeat(2048))),
            code: None,
        };

        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("url"));
    }

    #[test]
    fn test_create_request_missing_fields_pass_validation() {
        let req: CreateLinkRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.url.is_none());
    }

    #[test]
    fn test_method_override() {
        let delete = MethodOverride {
            method: Some("DELETE".to_string()),
        };
        let lower = MethodOverride {
            method: Some("delete".to_string()),
        };
        let other = MethodOverride {
            method: Some("PATCH".to_string()),
        };

        assert!(delete.is_delete());
        assert!(lower.is_delete());
        assert!(!other.is_delete());
        assert!(!MethodOverride::default().is_delete());
    }
}
