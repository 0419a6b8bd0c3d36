//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for size limits.
//! Shape rules for URLs and codes are enforced by the link service.

pub mod health;
pub mod link;
