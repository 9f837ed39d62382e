//! MCP tools for the prompt library.
//!
//! Provides `LibraryTools` that delegates to the filter service. Zero
//! matches is a successful call with an empty result list.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use oraculum_content::{Catalog, Category, PromptEntry};
use oraculum_query::{CategoryFacet, LibraryFilter, PrincipleFacet, filter_prompts};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{make_tool, parse_args, serialize_response};

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for the search tool. Every dimension is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SearchArgs {
    /// Free-text query; empty or omitted matches everything.
    #[serde(default)]
    pub query: String,
    /// Category facet (display form, e.g. "STRATEGY"); omit or "ALL" for no
    /// constraint.
    pub category: Option<String>,
    /// Associated-principle facet (display form); omit or "ALL PRINCIPLES"
    /// for no constraint.
    pub principle: Option<String>,
    /// Restrict to flagship ("Genius Extraction") prompts.
    #[serde(default)]
    pub flagship_only: bool,
}

impl SearchArgs {
    fn into_filter(self) -> Result<LibraryFilter, ErrorData> {
        let category = match self.category.as_deref() {
            None => CategoryFacet::All,
            Some(input) => CategoryFacet::parse(input).ok_or_else(|| {
                ErrorData::invalid_params(format!("unknown category: {input}"), None)
            })?,
        };
        let principle = match self.principle.as_deref() {
            None => PrincipleFacet::All,
            Some(input) => PrincipleFacet::parse(input),
        };
        Ok(LibraryFilter {
            query: self.query,
            category,
            principle,
            flagship_only: self.flagship_only,
        })
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response from `search_prompts`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchPromptsResponse {
    /// Query that was executed.
    pub query: String,
    /// Number of matching prompts.
    pub total: usize,
    /// Matches, in catalog order.
    pub results: Vec<PromptEntry>,
}

/// Response from `list_categories`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListCategoriesResponse {
    /// Category display forms, in display order.
    pub categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// LibraryTools
// ---------------------------------------------------------------------------

/// MCP tools over the prompt library.
///
/// Generates two tools:
/// - `search_prompts` — faceted substring search
/// - `list_categories` — the category facet values
pub struct LibraryTools {
    catalog: &'static Catalog,
}

impl LibraryTools {
    /// Create library tools over a catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    fn search(&self, args: SearchArgs) -> Result<SearchPromptsResponse, ErrorData> {
        let filter = args.into_filter()?;
        let results: Vec<PromptEntry> = filter_prompts(self.catalog.prompts(), &filter)
            .into_iter()
            .cloned()
            .collect();
        Ok(SearchPromptsResponse {
            query: filter.query,
            total: results.len(),
            results,
        })
    }
}

impl ToolRegistry for LibraryTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "search_prompts",
                "Search the prompt library with free text and facets",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Substring to match in title or template (case-insensitive)"
                        },
                        "category": {
                            "type": "string",
                            "description": "Category facet, e.g. STRATEGY; ALL for no constraint"
                        },
                        "principle": {
                            "type": "string",
                            "description": "Associated principle, e.g. PERCEPTUAL ASYMMETRY; ALL PRINCIPLES for no constraint"
                        },
                        "flagship_only": {
                            "type": "boolean",
                            "description": "Only flagship (Genius Extraction) prompts"
                        }
                    }
                }),
            ),
            make_tool(
                "list_categories",
                "List the prompt category facet values",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        match name {
            "search_prompts" => {
                let outcome = parse_args::<SearchArgs>(args).and_then(|args| self.search(args));
                Some(Box::pin(async move {
                    outcome.and_then(|response| serialize_response(&response))
                }))
            }
            "list_categories" => {
                let response = ListCategoriesResponse {
                    categories: Category::ALL.iter().map(|c| c.to_string()).collect(),
                };
                Some(Box::pin(async move { serialize_response(&response) }))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tools() -> LibraryTools {
        LibraryTools::new(Catalog::builtin())
    }

    #[test]
    fn test_tool_listing() {
        let tools = tools();
        assert_eq!(tools.tool_count(), 2);
        assert!(tools.has_tool("search_prompts"));
        assert!(tools.has_tool("list_categories"));
    }

    #[test]
    fn test_search_defaults_match_everything() {
        let response = tools().search(SearchArgs::default()).unwrap();
        assert_eq!(response.total, 6);
    }

    #[test]
    fn test_search_by_query() {
        let response = tools()
            .search(SearchArgs {
                query: "growth".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert!(
            response
                .results
                .iter()
                .any(|p| p.title == "Three Ways Growth Calculator")
        );
    }

    #[test]
    fn test_search_flagship_only() {
        let response = tools()
            .search(SearchArgs {
                flagship_only: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.total, 3);
        assert!(response.results.iter().all(|p| p.flagship));
    }

    #[test]
    fn test_search_unknown_category_is_invalid_params() {
        let err = tools()
            .search(SearchArgs {
                category: Some("MARKETING".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.message.contains("unknown category"));
    }

    #[test]
    fn test_search_no_match_is_empty_success() {
        let response = tools()
            .search(SearchArgs {
                query: "zzz-no-match".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.total, 0);
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_call_search_prompts() {
        let result = tools()
            .call("search_prompts", json!({"query": "moat"}))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[tokio::test]
    async fn test_call_list_categories() {
        let result = tools().call("list_categories", json!({})).unwrap().await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_call_unknown_tool_is_none() {
        assert!(tools().call("unknown", json!({})).is_none());
    }
}
