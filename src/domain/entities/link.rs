//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short code mapped to its target URL, with click counters.
///
/// Serialized with camelCase keys, which is the shape every JSON endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a fresh link with zero clicks.
    pub fn new(code: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            url,
            clicks: 0,
            created_at,
            last_clicked: None,
        }
    }

    /// Records one traversal of the short link.
    pub fn register_click(&mut self, at: DateTime<Utc>) {
        self.clicks += 1;
        self.last_clicked = Some(at);
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub url: String,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub url: Option<String>,
    /// Renames the link when set.
    pub code: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new("abc123".to_string(), "https://example.com".to_string(), now);

        assert_eq!(link.code, "abc123");
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(link.last_clicked.is_none());
    }

    #[test]
    fn test_register_click() {
        let mut link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );
        let at = Utc::now();

        link.register_click(at);
        link.register_click(at);

        assert_eq!(link.clicks, 2);
        assert_eq!(link.last_clicked, Some(at));
    }

    #[test]
    fn test_link_serializes_camel_case() {
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
        );

        let value = serde_json::to_value(&link).unwrap();

        assert_eq!(value["code"], json!("abc123"));
        assert_eq!(value["url"], json!("https://example.com"));
        assert_eq!(value["clicks"], json!(0));
        assert!(value["createdAt"].is_string());
        assert!(value["lastClicked"].is_null());
    }

    #[test]
    fn test_link_patch_is_empty() {
        assert!(LinkPatch::default().is_empty());

        let patch = LinkPatch {
            url: Some("https://example.com".to_string()),
            code: None,
        };
        assert!(!patch.is_empty());
    }
}
