//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink, RecentLink, TopLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Links are keyed by their code. Implementations must enforce code uniqueness
/// themselves (the service's existence check is not atomic), reporting a
/// duplicate as [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns whether a link with this code exists.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter and stamps `last_clicked`.
    ///
    /// Returns the updated link, or `Ok(None)` if the code is unknown.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Applies a partial update, possibly renaming the link.
    ///
    /// Returns `Ok(None)` if no link matches `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the rename target is already taken.
    async fn update(&self, code: &str, patch: LinkPatch) -> Result<Option<Link>, AppError>;

    /// Removes a link.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if none matched.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Lists every link, newest first.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Counts all links.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums the click counters of all links (0 when empty).
    async fn total_clicks(&self) -> Result<i64, AppError>;

    /// The `limit` most-clicked links, ties broken by newest first.
    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<TopLink>, AppError>;

    /// The `limit` most recently created links.
    async fn recent(&self, limit: i64) -> Result<Vec<RecentLink>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
