//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink, RecentLink, TopLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links` primary key; a duplicate insert or
/// rename surfaces as [`AppError::Conflict`] through `From<sqlx::Error>`.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (code, url)
            VALUES ($1, $2)
            RETURNING code, url, clicks, created_at, last_clicked
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, url, clicks, created_at, last_clicked
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE code = $1)")
            .bind(code)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(exists)
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_clicked = NOW()
            WHERE code = $1
            RETURNING code, url, clicks, created_at, last_clicked
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn update(&self, code: &str, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET url = COALESCE($2, url),
                code = COALESCE($3, code)
            WHERE code = $1
            RETURNING code, url, clicks, created_at, last_clicked
            "#,
        )
        .bind(code)
        .bind(patch.url)
        .bind(patch.code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT code, url, clicks, created_at, last_clicked
            FROM links
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopLink>, AppError> {
        let links = sqlx::query_as::<_, TopLink>(
            r#"
            SELECT code, url, clicks, last_clicked
            FROM links
            ORDER BY clicks DESC, created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<RecentLink>, AppError> {
        let links = sqlx::query_as::<_, RecentLink>(
            r#"
            SELECT code, url, created_at, clicks
            FROM links
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
