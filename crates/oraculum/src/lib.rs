//! Oraculum content fabric — umbrella crate.
//!
//! This crate re-exports all Oraculum components for convenience.
//! Use feature flags to enable specific serving surfaces.

pub use oraculum_content as content;
pub use oraculum_core as core;
pub use oraculum_query as query;
pub use oraculum_studio as studio;

#[cfg(feature = "mcp")]
pub use oraculum_mcp as mcp;

#[cfg(feature = "api")]
pub use oraculum_api as api;

#[cfg(feature = "cli")]
pub use oraculum_cli as cli;
