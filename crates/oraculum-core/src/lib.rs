//! Oraculum Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Oraculum
//! crates. It has no internal Oraculum dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::slugs::{is_normalized_slug, normalize_slug};
