//! CLI command implementations.
//!
//! Each command writes its report to a caller-supplied writer so tests can
//! capture output. Unknown slugs and ids surface as [`crate::Error`] values
//! that `main` turns into a message and a nonzero exit code.

pub mod copy;
pub mod list;
pub mod search;
pub mod show;
pub mod workflows;
