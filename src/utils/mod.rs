//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random short code generation
//! - [`validation`] - URL and short code predicates

pub mod code_generator;
pub mod validation;
