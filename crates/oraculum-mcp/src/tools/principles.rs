//! MCP tools for principle lookup and navigation.
//!
//! Provides `PrincipleTools` that resolves slugs against the catalog. An
//! unknown slug is a successful call with a not-found payload — the agent
//! is expected to handle absence, not retry.

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use oraculum_content::{Catalog, Principle};
use oraculum_query::{principle_by_slug, principle_neighbors};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{make_tool, parse_args, serialize_response};

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for slug-addressed tools.
#[derive(Debug, Deserialize)]
pub struct SlugArgs {
    /// Principle slug (normalized before lookup).
    pub slug: String,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Compact principle listing for overviews and navigation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrincipleSummary {
    /// Stable slug.
    pub slug: String,
    /// 1-based ordinal.
    pub number: u32,
    /// Display title.
    pub title: String,
    /// Uppercase tagline.
    pub subtitle: String,
    /// One-sentence statement.
    pub core_principle: String,
    /// Whether the attached extraction prompt is flagship.
    pub flagship: bool,
}

impl From<&Principle> for PrincipleSummary {
    fn from(principle: &Principle) -> Self {
        Self {
            slug: principle.slug.clone(),
            number: principle.number,
            title: principle.title.clone(),
            subtitle: principle.subtitle.clone(),
            core_principle: principle.core_principle.clone(),
            flagship: principle.extraction_prompt.flagship,
        }
    }
}

/// Response from `list_principles`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListPrinciplesResponse {
    /// Number of principles.
    pub total: usize,
    /// Summaries in number order.
    pub principles: Vec<PrincipleSummary>,
}

/// Response from `get_principle`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetPrincipleResponse {
    /// Whether the slug resolved.
    pub found: bool,
    /// The slug that was looked up.
    pub slug: String,
    /// Full record when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principle: Option<Principle>,
}

/// Response from `get_neighbors`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetNeighborsResponse {
    /// Whether the slug resolved.
    pub found: bool,
    /// The slug that was looked up.
    pub slug: String,
    /// Principle at ordinal −1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PrincipleSummary>,
    /// Principle at ordinal +1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PrincipleSummary>,
}

// ---------------------------------------------------------------------------
// PrincipleTools
// ---------------------------------------------------------------------------

/// MCP tools over the principle collection.
///
/// Generates three tools:
/// - `list_principles` — all seven, in number order
/// - `get_principle` — full record by slug
/// - `get_neighbors` — previous/next navigation by slug
pub struct PrincipleTools {
    catalog: &'static Catalog,
}

impl PrincipleTools {
    /// Create principle tools over a catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    fn list_principles(&self) -> ListPrinciplesResponse {
        let principles: Vec<PrincipleSummary> = self
            .catalog
            .principles()
            .iter()
            .map(PrincipleSummary::from)
            .collect();
        ListPrinciplesResponse {
            total: principles.len(),
            principles,
        }
    }

    fn get_principle(&self, args: SlugArgs) -> GetPrincipleResponse {
        let principle = principle_by_slug(self.catalog, &args.slug).cloned();
        GetPrincipleResponse {
            found: principle.is_some(),
            slug: args.slug,
            principle,
        }
    }

    fn get_neighbors(&self, args: SlugArgs) -> GetNeighborsResponse {
        match principle_neighbors(self.catalog, &args.slug) {
            Some(neighbors) => GetNeighborsResponse {
                found: true,
                slug: args.slug,
                previous: neighbors.previous.map(PrincipleSummary::from),
                next: neighbors.next.map(PrincipleSummary::from),
            },
            None => GetNeighborsResponse {
                found: false,
                slug: args.slug,
                previous: None,
                next: None,
            },
        }
    }
}

impl ToolRegistry for PrincipleTools {
    fn tools(&self) -> Vec<Tool> {
        let slug_schema = serde_json::json!({
            "type": "object",
            "properties": {
                "slug": {
                    "type": "string",
                    "description": "Principle slug, e.g. 'perceptual-asymmetry'"
                }
            },
            "required": ["slug"]
        });

        vec![
            make_tool(
                "list_principles",
                "List all seven strategic principles in order",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            make_tool(
                "get_principle",
                "Get the full record of one principle by slug",
                slug_schema.clone(),
            ),
            make_tool(
                "get_neighbors",
                "Get the previous/next principles around a slug",
                slug_schema,
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        match name {
            "list_principles" => {
                let response = self.list_principles();
                Some(Box::pin(async move { serialize_response(&response) }))
            }
            "get_principle" => {
                let outcome = parse_args::<SlugArgs>(args).map(|args| self.get_principle(args));
                Some(Box::pin(async move {
                    outcome.and_then(|response| serialize_response(&response))
                }))
            }
            "get_neighbors" => {
                let outcome = parse_args::<SlugArgs>(args).map(|args| self.get_neighbors(args));
                Some(Box::pin(async move {
                    outcome.and_then(|response| serialize_response(&response))
                }))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
