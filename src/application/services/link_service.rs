//! Link creation, resolution, and management service.

use std::sync::Arc;

use crate::domain::entities::{
    Analytics, Link, LinkPatch, NewLink, RECENT_LINKS_LIMIT, TOP_LINKS_LIMIT,
};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{is_valid_code, is_valid_url};
use serde_json::json;

/// Default number of generated codes tried before giving up on a create.
pub const DEFAULT_CODE_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving and managing shortened links.
///
/// Validates all input before touching the store. Existence checks are
/// advisory; code uniqueness under concurrent writers is left to the store.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    max_generation_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_repository,
            max_generation_attempts: DEFAULT_CODE_GENERATION_ATTEMPTS,
        }
    }

    /// Overrides how many generated codes are tried per create.
    pub fn with_generation_attempts(mut self, attempts: usize) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    /// Creates a short link.
    ///
    /// Uses `custom_code` when supplied, otherwise a generated one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - URL is missing or not an absolute URL
    /// - Custom code does not match `^[A-Za-z0-9]{6,8}$`
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Internal`] if every generated code collided.
    pub async fn create(&self, url: &str, custom_code: Option<&str>) -> Result<Link, AppError> {
        let url = url.trim();
        if url.is_empty() || !is_valid_url(url) {
            return Err(AppError::bad_request("Invalid URL", json!({ "url": url })));
        }

        let custom_code = custom_code.map(str::trim).filter(|c| !c.is_empty());

        let code = match custom_code {
            Some(custom) => {
                if !is_valid_code(custom) {
                    return Err(AppError::bad_request(
                        "Code must be 6–8 alphanumeric characters",
                        json!({ "code": custom }),
                    ));
                }

                if self.link_repository.exists(custom).await? {
                    return Err(AppError::conflict(
                        "Code already exists",
                        json!({ "code": custom }),
                    ));
                }

                custom.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        let link = self
            .link_repository
            .create(NewLink {
                code,
                url: url.to_string(),
            })
            .await?;

        tracing::info!(code = %link.code, url = %link.url, "Short link created");

        Ok(link)
    }

    /// Resolves a code for redirect, counting the click.
    ///
    /// The increment and `last_clicked` stamp happen in a single store call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] for an unknown one.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let code = checked_code(code)?;

        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        tracing::debug!(code, clicks = link.clicks, "Short link resolved");

        Ok(link.url)
    }

    /// Fetches a link without touching its counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] for an unknown one.
    pub async fn get(&self, code: &str) -> Result<Link, AppError> {
        let code = checked_code(code)?;

        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Changes the target URL and/or renames a link.
    ///
    /// Blank fields are treated as absent. A rename to a code held by another
    /// link is refused rather than overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code, the new code or the URL is
    /// malformed, or if neither field is provided.
    /// Returns [`AppError::NotFound`] if no link matches `code`.
    /// Returns [`AppError::Conflict`] if `new_code` is already taken.
    pub async fn update(
        &self,
        code: &str,
        url: Option<&str>,
        new_code: Option<&str>,
    ) -> Result<Link, AppError> {
        let code = checked_code(code)?;

        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let new_code = new_code.map(str::trim).filter(|c| !c.is_empty());

        if let Some(new_code) = new_code
            && !is_valid_code(new_code)
        {
            return Err(AppError::bad_request(
                "New code must be 6–8 alphanumeric characters",
                json!({ "newCode": new_code }),
            ));
        }

        if let Some(url) = url
            && !is_valid_url(url)
        {
            return Err(AppError::bad_request("Invalid URL", json!({ "url": url })));
        }

        if url.is_none() && new_code.is_none() {
            return Err(AppError::bad_request(
                "URL or new code is required",
                json!({ "code": code }),
            ));
        }

        let patch = LinkPatch {
            url: url.map(str::to_string),
            code: new_code.filter(|c| *c != code).map(str::to_string),
        };

        if patch.is_empty() {
            // Renaming a link to its own code is a no-op.
            return self.get(code).await;
        }

        if let Some(target) = patch.code.as_deref() {
            // An absent source reports 404 even when the target is taken.
            if !self.link_repository.exists(code).await? {
                return Err(not_found(code));
            }

            if self.link_repository.exists(target).await? {
                return Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": target }),
                ));
            }
        }

        let renamed_to = patch.code.clone();

        let link = self
            .link_repository
            .update(code, patch)
            .await?
            .ok_or_else(|| not_found(code))?;

        match renamed_to {
            Some(new_code) => tracing::info!(from = code, to = %new_code, "Short link renamed"),
            None => tracing::info!(code, "Short link updated"),
        }

        Ok(link)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed code and
    /// [`AppError::NotFound`] if nothing was deleted, including a repeated delete.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let code = checked_code(code)?;

        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found(
                "Not found or already deleted",
                json!({ "code": code }),
            ));
        }

        tracing::info!(code, "Short link deleted");

        Ok(())
    }

    /// Lists every link, newest first.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Builds the dashboard summary: totals, top 5 by clicks, 10 newest.
    pub async fn analytics(&self) -> Result<Analytics, AppError> {
        let total_links = self.link_repository.count().await?;
        let total_clicks = self.link_repository.total_clicks().await?;
        let top_links = self.link_repository.top_by_clicks(TOP_LINKS_LIMIT).await?;
        let recent_links = self.link_repository.recent(RECENT_LINKS_LIMIT).await?;

        Ok(Analytics {
            total_links,
            total_clicks,
            top_links,
            recent_links,
        })
    }

    /// Checks that the link store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Draws generated codes until one is free in the store.
    ///
    /// The check is advisory: a concurrent insert of the same code still fails
    /// at the store with [`AppError::Conflict`].
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_generation_attempts {
            let code = generate_code();

            if !self.link_repository.exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(code, attempt, "Generated code collided");
        }

        tracing::warn!(
            attempts = self.max_generation_attempts,
            "Failed to generate a free short code"
        );

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": self.max_generation_attempts }),
        ))
    }
}

/// Trims a path code and checks its shape.
fn checked_code(code: &str) -> Result<&str, AppError> {
    let code = code.trim();

    if !is_valid_code(code) {
        return Err(AppError::bad_request(
            "Invalid code format",
            json!({ "code": code }),
        ));
    }

    Ok(code)
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Not found", json!({ "code": code }))
}
