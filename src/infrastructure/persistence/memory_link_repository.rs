//! Process-local link repository.
//!
//! Used when no database is configured and by the HTTP test suite. Data does not
//! survive a restart.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, LinkPatch, NewLink, RecentLink, TopLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A stored link plus its insertion sequence, used to order links created
/// within the same clock tick.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    link: Link,
}

#[derive(Debug, Default)]
struct Inner {
    next_seq: u64,
    links: HashMap<String, Entry>,
}

impl Inner {
    /// Entries sorted newest first.
    fn newest_first(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.links.values().collect();
        entries.sort_by(|a, b| {
            b.link
                .created_at
                .cmp(&a.link.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        entries
    }
}

/// In-memory [`LinkRepository`] guarded by a single async `RwLock`.
///
/// Every mutating method takes the write lock for its whole duration, so
/// check-and-insert and read-modify-write are atomic here just as they are
/// under the PostgreSQL primary key.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory link store");
        Self::default()
    }
}

fn duplicate(code: &str) -> AppError {
    AppError::conflict("Code already exists", json!({ "code": code }))
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.links.contains_key(&new_link.code) {
            return Err(duplicate(&new_link.code));
        }

        let link = Link::new(new_link.code, new_link.url, Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.links.insert(
            link.code.clone(),
            Entry {
                seq,
                link: link.clone(),
            },
        );

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.get(code).map(|entry| entry.link.clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.contains_key(code))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.links.get_mut(code).map(|entry| {
            entry.link.register_click(Utc::now());
            entry.link.clone()
        }))
    }

    async fn update(&self, code: &str, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().await;

        if !inner.links.contains_key(code) {
            return Ok(None);
        }

        if let Some(new_code) = patch.code.as_deref()
            && new_code != code
            && inner.links.contains_key(new_code)
        {
            return Err(duplicate(new_code));
        }

        let Some(mut entry) = inner.links.remove(code) else {
            return Ok(None);
        };

        if let Some(url) = patch.url {
            entry.link.url = url;
        }
        if let Some(new_code) = patch.code {
            entry.link.code = new_code;
        }

        let link = entry.link.clone();
        inner.links.insert(link.code.clone(), entry);

        Ok(Some(link))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.links.remove(code).is_some())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .newest_first()
            .into_iter()
            .map(|entry| entry.link.clone())
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.len() as i64)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.links.values().map(|entry| entry.link.clicks).sum())
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopLink>, AppError> {
        let inner = self.inner.read().await;

        // Stable sort keeps newest-first among equal click counts.
        let mut entries = inner.newest_first();
        entries.sort_by(|a, b| b.link.clicks.cmp(&a.link.clicks));

        Ok(entries
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|entry| TopLink::from(entry.link.clone()))
            .collect())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<RecentLink>, AppError> {
        let inner = self.inner.read().await;

        Ok(inner
            .newest_first()
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|entry| RecentLink::from(entry.link.clone()))
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(link.clicks, 0);

        let found = repo.find_by_code("abc123").await.unwrap();
        assert_eq!(found, Some(link));
        assert!(repo.exists("abc123").await.unwrap());
        assert!(!repo.exists("zzz999").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        let err = repo
            .create(new_link("abc123", "https://other.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        let kept = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(kept.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_record_click_increments() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        repo.record_click("abc123").await.unwrap();
        let link = repo.record_click("abc123").await.unwrap().unwrap();

        assert_eq!(link.clicks, 2);
        assert!(link.last_clicked.is_some());
        assert!(repo.record_click("zzz999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_renames_and_keeps_counters() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        repo.record_click("abc123").await.unwrap();

        let patch = LinkPatch {
            url: Some("https://new.com".to_string()),
            code: Some("xyz789".to_string()),
        };
        let link = repo.update("abc123", patch).await.unwrap().unwrap();

        assert_eq!(link.code, "xyz789");
        assert_eq!(link.url, "https://new.com");
        assert_eq!(link.clicks, 1);
        assert!(!repo.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_rename_onto_existing_conflicts() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://a.com")).await.unwrap();
        repo.create(new_link("xyz789", "https://b.com")).await.unwrap();

        let patch = LinkPatch {
            url: None,
            code: Some("xyz789".to_string()),
        };
        let err = repo.update("abc123", patch).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        let untouched = repo.find_by_code("xyz789").await.unwrap().unwrap();
        assert_eq!(untouched.url, "https://b.com");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryLinkRepository::new();
        let patch = LinkPatch {
            url: Some("https://new.com".to_string()),
            code: None,
        };
        assert!(repo.update("abc123", patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryLinkRepository::new();
        repo.create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.delete("abc123").await.unwrap());
        assert!(!repo.delete("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryLinkRepository::new();
        for code in ["first1", "second", "third3"] {
            repo.create(new_link(code, "https://example.com"))
                .await
                .unwrap();
        }

        let codes: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();

        assert_eq!(codes, vec!["third3", "second", "first1"]);
    }

    #[tokio::test]
    async fn test_aggregates() {
        let repo = InMemoryLinkRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.total_clicks().await.unwrap(), 0);
        assert!(repo.top_by_clicks(5).await.unwrap().is_empty());

        for code in ["aaaaaa", "bbbbbb", "cccccc"] {
            repo.create(new_link(code, "https://example.com"))
                .await
                .unwrap();
        }
        for _ in 0..3 {
            repo.record_click("bbbbbb").await.unwrap();
        }
        repo.record_click("aaaaaa").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.total_clicks().await.unwrap(), 4);

        let top: Vec<String> = repo
            .top_by_clicks(2)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.code)
            .collect();
        assert_eq!(top, vec!["bbbbbb", "aaaaaa"]);

        let recent = repo.recent(10).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].code, "cccccc");
    }
}
