//! Aggregated link analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of entries in [`Analytics::top_links`].
pub const TOP_LINKS_LIMIT: i64 = 5;

/// Number of entries in [`Analytics::recent_links`].
pub const RECENT_LINKS_LIMIT: i64 = 10;

/// Dashboard summary across all links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_links: i64,
    pub total_clicks: i64,
    pub top_links: Vec<TopLink>,
    pub recent_links: Vec<RecentLink>,
}

/// A most-clicked link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopLink {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
}

/// A recently created link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentLink {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<super::Link> for TopLink {
    fn from(link: super::Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
        }
    }
}

impl From<super::Link> for RecentLink {
    fn from(link: super::Link) -> Self {
        Self {
            code: link.code,
            url: link.url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
