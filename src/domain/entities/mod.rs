//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code mapped to a target URL
//! - [`Analytics`] - Aggregated counters and leaderboards over all links
//!
//! Creation and partial updates use separate input types: [`NewLink`] and
//! [`LinkPatch`].

pub mod analytics;
pub mod link;

pub use analytics::{Analytics, RECENT_LINKS_LIMIT, RecentLink, TOP_LINKS_LIMIT, TopLink};
pub use link::{Link, LinkPatch, NewLink};
