//! Content schema and builtin catalog for Oraculum.
//!
//! This crate owns the authoritative content of the fabric: the seven
//! strategic principles and the prompt library. All of it is compiled-in,
//! constructed once, and never mutated afterward — there is no
//! create/update/delete lifecycle, only "present for the lifetime of the
//! process".
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     oraculum-content                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Principle, Story, ReflectionPrompt, ExtractionPrompt       │
//! │  PromptEntry, Category                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  placeholder — "Coming soon..." authoring convention        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Catalog — validated, read-only access to the collections   │
//! │  builtin — the authored records                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Placeholder convention
//!
//! Sections whose copy has not been written yet are authored with the
//! sentinel [`placeholder::PLACEHOLDER`]. The schema collapses that sentinel
//! to `None` at construction time (via [`placeholder::authored`]), so no
//! consumer can accidentally render it.

pub mod builtin;
pub mod catalog;
pub mod placeholder;
pub mod principle;
pub mod prompt;

// Re-exports — schema
pub use principle::{ExtractionPrompt, Principle, ReflectionPrompt, Story};
pub use prompt::{Category, PromptEntry};

// Re-exports — catalog
pub use catalog::Catalog;
