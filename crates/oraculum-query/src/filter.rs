//! Multi-facet substring filtering of the prompt library.
//!
//! A prompt is included iff every active facet holds AND the case-folded
//! query is a substring of its title or template. The filter is stable
//! (output preserves input order) and pure.

use std::fmt;

use oraculum_content::{Category, PromptEntry};

/// Category facet: either inactive (`All`) or an equality constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFacet {
    /// No category constraint. Displays as `ALL`.
    #[default]
    All,
    /// Only prompts in this category.
    Only(Category),
}

impl CategoryFacet {
    /// Display form used by filter chips (`ALL`).
    pub const ALL_LABEL: &'static str = "ALL";

    /// Parse from the display form, case-insensitively.
    ///
    /// Returns `None` for unknown category names.
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(CategoryFacet::All);
        }
        input.parse().ok().map(CategoryFacet::Only)
    }

    fn matches(&self, entry: &PromptEntry) -> bool {
        match self {
            CategoryFacet::All => true,
            CategoryFacet::Only(category) => entry.category == *category,
        }
    }
}

impl fmt::Display for CategoryFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFacet::All => f.write_str(Self::ALL_LABEL),
            CategoryFacet::Only(category) => category.fmt(f),
        }
    }
}

/// Principle facet: either inactive (`All`) or an equality constraint on the
/// prompt's associated principle display name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrincipleFacet {
    /// No principle constraint. Displays as `ALL PRINCIPLES`.
    #[default]
    All,
    /// Only prompts associated with this principle (display name form).
    Only(String),
}

impl PrincipleFacet {
    /// Display form used by filter chips (`ALL PRINCIPLES`).
    pub const ALL_LABEL: &'static str = "ALL PRINCIPLES";

    /// Parse from the display form, case-insensitively.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(Self::ALL_LABEL) {
            PrincipleFacet::All
        } else {
            PrincipleFacet::Only(trimmed.to_uppercase())
        }
    }

    fn matches(&self, entry: &PromptEntry) -> bool {
        match self {
            PrincipleFacet::All => true,
            PrincipleFacet::Only(name) => entry.principle.eq_ignore_ascii_case(name),
        }
    }
}

impl fmt::Display for PrincipleFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipleFacet::All => f.write_str(Self::ALL_LABEL),
            PrincipleFacet::Only(name) => f.write_str(name),
        }
    }
}

/// The complete filter state of the library view.
///
/// `Default` is the "clear filters" state: empty query, both facets
/// inactive, flagship toggle off — which matches every prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryFilter {
    /// Free-text query; empty matches everything.
    pub query: String,
    /// Category facet.
    pub category: CategoryFacet,
    /// Associated-principle facet.
    pub principle: PrincipleFacet,
    /// When set, only flagship ("Genius Extraction") prompts pass.
    pub flagship_only: bool,
}

impl LibraryFilter {
    /// Returns `true` when the filter is in its default (cleared) state.
    ///
    /// Empty-state views use this to decide whether to offer a reset
    /// affordance.
    pub fn is_default(&self) -> bool {
        *self == LibraryFilter::default()
    }

    fn matches(&self, entry: &PromptEntry) -> bool {
        self.category.matches(entry)
            && self.principle.matches(entry)
            && (!self.flagship_only || entry.flagship)
            && matches_query(entry, &self.query)
    }
}

/// Case-insensitive substring match over the searchable text fields.
///
/// Searches in: title, template.
fn matches_query(entry: &PromptEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();

    entry.title.to_lowercase().contains(&query_lower)
        || entry.template.to_lowercase().contains(&query_lower)
}

/// Apply a filter to the prompt library.
///
/// Returns the matching subset in the input's original relative order. An
/// empty result is a valid output (the consuming view renders an empty
/// state), never an error.
pub fn filter_prompts<'a>(prompts: &'a [PromptEntry], filter: &LibraryFilter) -> Vec<&'a PromptEntry> {
    prompts.iter().filter(|p| filter.matches(p)).collect()
}

// ============================================================================
// Tests
// ============================================================================
