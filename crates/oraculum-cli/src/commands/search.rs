//! `oraculum search` — faceted search over the prompt library.

use std::io::Write;

use oraculum_content::Catalog;
use oraculum_query::{CategoryFacet, LibraryFilter, PrincipleFacet, filter_prompts};

use crate::{Error, Result};

/// Search options, straight from the command line.
#[derive(Debug, Default)]
pub struct SearchOpts {
    /// Free-text query.
    pub query: Option<String>,
    /// Category facet display form.
    pub category: Option<String>,
    /// Principle facet display form.
    pub principle: Option<String>,
    /// Restrict to flagship prompts.
    pub flagship_only: bool,
}

impl SearchOpts {
    fn into_filter(self) -> Result<LibraryFilter> {
        let category = match self.category.as_deref() {
            None => CategoryFacet::All,
            Some(input) => CategoryFacet::parse(input)
                .ok_or_else(|| Error::UnknownCategory(input.to_string()))?,
        };
        let principle = match self.principle.as_deref() {
            None => PrincipleFacet::All,
            Some(input) => PrincipleFacet::parse(input),
        };
        Ok(LibraryFilter {
            query: self.query.unwrap_or_default(),
            category,
            principle,
            flagship_only: self.flagship_only,
        })
    }
}

/// Run a library search and print the matches.
///
/// An empty result is not an error: the command prints an empty state with
/// a hint on how to clear the filters.
pub fn run(out: &mut impl Write, catalog: &Catalog, opts: SearchOpts) -> Result<()> {
    let filter = opts.into_filter()?;
    let results = filter_prompts(catalog.prompts(), &filter);

    if results.is_empty() {
        writeln!(out, "No prompts match your filters.")?;
        if !filter.is_default() {
            writeln!(out, "Clear them: run `oraculum search` with no arguments.")?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{} prompt{} found",
        results.len(),
        if results.len() == 1 { "" } else { "s" }
    )?;
    for entry in results {
        writeln!(out)?;
        if entry.flagship {
            writeln!(out, "  [{}] {} ★", entry.category, entry.title)?;
        } else {
            writeln!(out, "  [{}] {}", entry.category, entry.title)?;
        }
        writeln!(out, "      {}", entry.description)?;
        writeln!(out, "      principle: {} | tags: {}", entry.principle, entry.tags.join(", "))?;
        if let Some(url) = &entry.external_tool_url {
            writeln!(out, "      open: {url}")?;
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn search(opts: SearchOpts) -> String {
        let mut out = Vec::new();
        run(&mut out, Catalog::builtin(), opts).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_search_without_filters_lists_everything() {
        let text = search(SearchOpts::default());
        assert!(text.contains("6 prompts found"));
        assert!(text.contains("Hidden Asset Discovery Audit"));
        assert!(text.contains("Irreplaceability Audit"));
    }

    #[test]
    fn test_search_by_query() {
        let text = search(SearchOpts {
            query: Some("growth".to_string()),
            ..Default::default()
        });
        assert!(text.contains("Three Ways Growth Calculator"));
        assert!(!text.contains("Partnership Preeminence Script"));
    }

    #[test]
    fn test_search_flagship_marks_entries() {
        let text = search(SearchOpts {
            flagship_only: true,
            ..Default::default()
        });
        assert!(text.contains("3 prompts found"));
        assert!(text.contains("★"));
    }

    #[test]
    fn test_search_empty_state_offers_reset() {
        let text = search(SearchOpts {
            query: Some("zzz-no-match".to_string()),
            ..Default::default()
        });
        assert!(text.contains("No prompts match your filters."));
        assert!(text.contains("Clear them"));
    }

    #[test]
    fn test_search_unknown_category_errors() {
        let mut out = Vec::new();
        let err = run(
            &mut out,
            Catalog::builtin(),
            SearchOpts {
                category: Some("MARKETING".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownCategory(_)));
    }

    #[test]
    fn test_search_external_tool_links_are_printed() {
        let text = search(SearchOpts {
            query: Some("hidden asset".to_string()),
            ..Default::default()
        });
        assert!(text.contains("open: https://jayi.app/prompt/hidden-asset"));
    }
}
