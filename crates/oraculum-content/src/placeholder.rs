//! The "not yet written" authoring convention.
//!
//! Some sections of the principle pages ship before their copy is written.
//! The authoring side marks those with a sentinel string; the schema turns
//! the sentinel into `None` so views render the section as absent instead of
//! printing the sentinel.

/// Sentinel used by content authors for sections without copy.
///
/// Compared exactly after trimming. Anything else is real content.
pub const PLACEHOLDER: &str = "Coming soon...";

/// Collapse authored text to `None` when it is the placeholder sentinel.
///
/// # Examples
///
/// ```
/// use oraculum_content::placeholder::authored;
///
/// assert_eq!(authored("Coming soon..."), None);
/// assert_eq!(authored("  Coming soon...  "), None);
/// assert_eq!(authored("Real copy."), Some("Real copy.".to_string()));
/// ```
pub fn authored(text: &str) -> Option<String> {
    if text.trim() == PLACEHOLDER {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authored_collapses_sentinel() {
        assert_eq!(authored(PLACEHOLDER), None);
    }

    #[test]
    fn test_authored_trims_before_comparing() {
        assert_eq!(authored("  Coming soon...\n"), None);
    }

    #[test]
    fn test_authored_keeps_real_content() {
        assert_eq!(authored("The owner is too close."), Some("The owner is too close.".to_string()));
    }

    #[test]
    fn test_authored_keeps_content_containing_sentinel() {
        // Only an exact sentinel is a placeholder.
        let text = "Coming soon... and other announcements.";
        assert_eq!(authored(text), Some(text.to_string()));
    }
}
