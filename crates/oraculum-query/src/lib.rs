//! Lookup and filter services over the Oraculum catalog.
//!
//! Both services are pure functions of their inputs: no state, no external
//! resources, no side effects. They are safe to recompute on every
//! keystroke, and absence (an unknown slug, an empty filter result) is an
//! expected outcome, not an error.
//!
//! # Modules
//!
//! - [`lookup`]: slug resolution and positional previous/next navigation
//! - [`filter`]: multi-facet substring filtering of the prompt library

pub mod filter;
pub mod lookup;

// Re-exports — lookup
pub use lookup::{Neighbors, principle_by_slug, principle_neighbors};

// Re-exports — filter
pub use filter::{CategoryFacet, LibraryFilter, PrincipleFacet, filter_prompts};
