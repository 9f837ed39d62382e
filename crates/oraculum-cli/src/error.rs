//! Error types for oraculum-cli.

use thiserror::Error;

/// Result type alias for oraculum-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oraculum-cli.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A slug or id did not resolve. Recoverable: the command prints the
    /// message and exits nonzero, nothing panics.
    #[error("no {resource} found for '{key}'")]
    NotFound {
        /// Resource kind ("principle", "workflow").
        resource: &'static str,
        /// The key that failed to resolve.
        key: String,
    },

    /// An unrecognized category facet value.
    #[error("unknown category: {0} (expected one of DIAGNOSIS, STRATEGY, EXECUTION, REFRAME, THINKING, POSITIONING, ALL)")]
    UnknownCategory(String),

    /// Terminal/pipe write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// A principle slug that did not resolve.
    pub fn principle_not_found(slug: impl Into<String>) -> Self {
        Error::NotFound {
            resource: "principle",
            key: slug.into(),
        }
    }

    /// A workflow id that did not resolve.
    pub fn workflow_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            resource: "workflow",
            key: id.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
