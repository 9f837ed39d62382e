//! Error types for oraculum-core.

use thiserror::Error;

/// Result type alias for oraculum-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oraculum-core.
///
/// Absence of content (an unknown slug, an empty filter result) is not an
/// error anywhere in Oraculum — those are expressed as `Option`/empty
/// collections. The only failure the core knows about is a catalog whose
/// compiled-in data violates its own invariants, which is fatal at startup.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Compiled-in catalog data violates a structural invariant.
    #[error("Catalog invariant violation: {message}")]
    Catalog {
        /// Which invariant failed and on which record.
        message: String,
    },
}

impl Error {
    /// Creates a new catalog invariant error.
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Error::Catalog {
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = Error::catalog("duplicate slug 'irreplaceability'");
        assert_eq!(
            err.to_string(),
            "Catalog invariant violation: duplicate slug 'irreplaceability'"
        );
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
