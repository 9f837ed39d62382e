//! # oraculum-cli
//!
//! Command-line interface for the Oraculum content fabric:
//! - Browse the seven principles (`list`, `show`, with previous/next links)
//! - Search the prompt library with facets (`search`)
//! - Copy a principle's extraction prompt (`copy`)
//! - Explore the guided workflows (`workflows`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod commands;
pub mod copy;
pub mod error;

pub use error::{Error, Result};
