//! Slug normalization utilities.
//!
//! Principles and workflows are addressed externally by slug. Authored data
//! uses lowercase kebab-case; these helpers normalize arbitrary input (URL
//! segments, CLI arguments) to the same form before lookup.

/// Normalize an identifier to lowercase kebab-case.
///
/// Performs the following transformations:
/// 1. Trims leading/trailing whitespace
/// 2. Converts to lowercase
/// 3. Replaces underscores with hyphens
/// 4. Collapses runs of whitespace into single hyphens
///
/// # Examples
///
/// ```
/// use oraculum_core::util::slugs::normalize_slug;
///
/// assert_eq!(normalize_slug("Perceptual Asymmetry"), "perceptual-asymmetry");
/// assert_eq!(normalize_slug("guaranteed_upside"), "guaranteed-upside");
/// assert_eq!(normalize_slug("  Super   Synthesis  "), "super-synthesis");
/// ```
pub fn normalize_slug(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace('_', " ") // Convert underscores to spaces first
        .split_whitespace() // Split on any whitespace, collapsing multiples
        .collect::<Vec<&str>>()
        .join("-")
}

/// Returns `true` if the input is already in normalized slug form.
///
/// Normalized slugs are non-empty, lowercase, and use single hyphens
/// between alphanumeric segments.
///
/// # Examples
///
/// ```
/// use oraculum_core::util::slugs::is_normalized_slug;
///
/// assert!(is_normalized_slug("perceptual-asymmetry"));
/// assert!(!is_normalized_slug("Perceptual Asymmetry"));
/// assert!(!is_normalized_slug(""));
/// ```
pub fn is_normalized_slug(input: &str) -> bool {
    !input.is_empty() && normalize_slug(input) == input
}
