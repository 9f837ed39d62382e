//! Route handlers.
//!
//! Handlers are thin adapters: parse the request, call the pure
//! lookup/filter services, shape the JSON. Catalog access is a shared
//! `&'static` — no locks, no contention.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Json;
use serde::{Deserialize, Serialize};

use oraculum_content::{Catalog, Principle, PromptEntry};
use oraculum_query::{
    CategoryFacet, LibraryFilter, PrincipleFacet, filter_prompts, principle_by_slug,
    principle_neighbors,
};
use oraculum_studio::{Workflow, workflow_by_id, workflows};

use crate::error::ApiError;

/// Build the API router over a catalog.
pub fn router(catalog: &'static Catalog) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/principles", get(list_principles))
        .route("/api/principles/{slug}", get(get_principle))
        .route("/api/principles/{slug}/neighbors", get(get_neighbors))
        .route("/api/prompts", get(search_prompts))
        .route("/api/workflows", get(list_workflows))
        .route("/api/workflows/{id}", get(get_workflow))
        .with_state(catalog)
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthzResponse {
    /// Always "ok" while the process serves.
    pub status: String,
}

/// Compact principle listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipleSummary {
    /// Stable slug.
    pub slug: String,
    /// 1-based ordinal.
    pub number: u32,
    /// Display title.
    pub title: String,
    /// One-sentence statement.
    pub core_principle: String,
}

impl From<&Principle> for PrincipleSummary {
    fn from(principle: &Principle) -> Self {
        Self {
            slug: principle.slug.clone(),
            number: principle.number,
            title: principle.title.clone(),
            core_principle: principle.core_principle.clone(),
        }
    }
}

/// Response for `/api/principles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPrinciplesResponse {
    /// Number of principles.
    pub total: usize,
    /// Summaries in number order.
    pub principles: Vec<PrincipleSummary>,
}

/// Response for `/api/principles/{slug}/neighbors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborsResponse {
    /// The resolved slug.
    pub slug: String,
    /// Principle at ordinal −1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PrincipleSummary>,
    /// Principle at ordinal +1, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PrincipleSummary>,
}

/// Query-string parameters for `/api/prompts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptsQuery {
    /// Free-text query.
    #[serde(default)]
    pub q: String,
    /// Category facet display form; omit or `ALL` for no constraint.
    pub category: Option<String>,
    /// Principle facet display form; omit or `ALL PRINCIPLES` for none.
    pub principle: Option<String>,
    /// Restrict to flagship prompts.
    #[serde(default)]
    pub flagship: bool,
}

/// Response for `/api/prompts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsResponse {
    /// Query that was executed.
    pub query: String,
    /// Number of matches.
    pub total: usize,
    /// Matches, in catalog order. Empty is a valid result, not an error.
    pub results: Vec<PromptEntry>,
}

/// Compact workflow listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Stable id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Principle(s) it draws on.
    pub principle: String,
    /// Rough total duration.
    pub estimated_time: String,
    /// Number of steps.
    pub step_count: usize,
}

impl From<&Workflow> for WorkflowSummary {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id.clone(),
            title: workflow.title.clone(),
            principle: workflow.principle.clone(),
            estimated_time: workflow.estimated_time.clone(),
            step_count: workflow.steps.len(),
        }
    }
}

/// Response for `/api/workflows`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWorkflowsResponse {
    /// Number of workflows.
    pub total: usize,
    /// Summaries in authored order.
    pub workflows: Vec<WorkflowSummary>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse {
        status: "ok".to_string(),
    })
}

async fn list_principles(State(catalog): State<&'static Catalog>) -> Json<ListPrinciplesResponse> {
    let principles: Vec<PrincipleSummary> = catalog
        .principles()
        .iter()
        .map(PrincipleSummary::from)
        .collect();
    Json(ListPrinciplesResponse {
        total: principles.len(),
        principles,
    })
}

async fn get_principle(
    State(catalog): State<&'static Catalog>,
    Path(slug): Path<String>,
) -> Result<Json<Principle>, ApiError> {
    principle_by_slug(catalog, &slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::principle_not_found(slug))
}

async fn get_neighbors(
    State(catalog): State<&'static Catalog>,
    Path(slug): Path<String>,
) -> Result<Json<NeighborsResponse>, ApiError> {
    let neighbors = principle_neighbors(catalog, &slug)
        .ok_or_else(|| ApiError::principle_not_found(slug.clone()))?;
    Ok(Json(NeighborsResponse {
        slug,
        previous: neighbors.previous.map(PrincipleSummary::from),
        next: neighbors.next.map(PrincipleSummary::from),
    }))
}

async fn search_prompts(
    State(catalog): State<&'static Catalog>,
    Query(params): Query<PromptsQuery>,
) -> Result<Json<PromptsResponse>, ApiError> {
    let filter = filter_from_query(params)?;
    let results: Vec<PromptEntry> = filter_prompts(catalog.prompts(), &filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(PromptsResponse {
        query: filter.query,
        total: results.len(),
        results,
    }))
}

async fn list_workflows() -> Json<ListWorkflowsResponse> {
    let summaries: Vec<WorkflowSummary> = workflows().iter().map(WorkflowSummary::from).collect();
    Json(ListWorkflowsResponse {
        total: summaries.len(),
        workflows: summaries,
    })
}

async fn get_workflow(Path(id): Path<String>) -> Result<Json<Workflow>, ApiError> {
    workflow_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::workflow_not_found(id))
}

fn filter_from_query(params: PromptsQuery) -> Result<LibraryFilter, ApiError> {
    let category = match params.category.as_deref() {
        None => CategoryFacet::All,
        Some(input) => CategoryFacet::parse(input).ok_or_else(|| ApiError::BadRequest {
            message: format!("unknown category: {input}"),
        })?,
    };
    let principle = match params.principle.as_deref() {
        None => PrincipleFacet::All,
        Some(input) => PrincipleFacet::parse(input),
    };
    Ok(LibraryFilter {
        query: params.q,
        category,
        principle,
        flagship_only: params.flagship,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    #[tokio::test]
    async fn test_healthz() {
        let Json(response) = healthz().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_list_principles_in_order() {
        let Json(response) = list_principles(State(catalog())).await;
        assert_eq!(response.total, 7);
        assert_eq!(response.principles[0].slug, "perceptual-asymmetry");
        assert_eq!(response.principles[6].slug, "constraint-inversion");
    }

    #[tokio::test]
    async fn test_get_principle_found() {
        let Json(principle) = get_principle(State(catalog()), Path("guaranteed-upside".to_string()))
            .await
            .unwrap();
        assert_eq!(principle.number, 6);
    }

    #[tokio::test]
    async fn test_get_principle_unknown_slug_is_404() {
        let err = get_principle(State(catalog()), Path("no-such-principle".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_neighbors_interior() {
        let Json(response) = get_neighbors(State(catalog()), Path("super-synthesis".to_string()))
            .await
            .unwrap();
        assert_eq!(response.previous.unwrap().slug, "irreplaceability");
        assert_eq!(response.next.unwrap().slug, "infinite-leverage");
    }

    #[tokio::test]
    async fn test_get_neighbors_unknown_slug_is_404() {
        let err = get_neighbors(State(catalog()), Path("nope".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_prompts_defaults() {
        let Json(response) = search_prompts(State(catalog()), Query(PromptsQuery::default()))
            .await
            .unwrap();
        assert_eq!(response.total, 6);
    }

    #[tokio::test]
    async fn test_search_prompts_facets() {
        let params = PromptsQuery {
            category: Some("EXECUTION".to_string()),
            flagship: true,
            ..Default::default()
        };
        let Json(response) = search_prompts(State(catalog()), Query(params)).await.unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.results[0].title, "Partnership Preeminence Script");
    }

    #[tokio::test]
    async fn test_search_prompts_unknown_category_is_400() {
        let params = PromptsQuery {
            category: Some("MARKETING".to_string()),
            ..Default::default()
        };
        let err = search_prompts(State(catalog()), Query(params)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_prompts_empty_result_is_success() {
        let params = PromptsQuery {
            q: "zzz-no-match".to_string(),
            ..Default::default()
        };
        let Json(response) = search_prompts(State(catalog()), Query(params)).await.unwrap();
        assert_eq!(response.total, 0);
    }

    #[tokio::test]
    async fn test_get_workflow_found_and_missing() {
        let Json(workflow) = get_workflow(Path("strategic-stacking".to_string())).await.unwrap();
        assert_eq!(workflow.steps.len(), 5);

        let err = get_workflow(Path("missing".to_string())).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_router_builds() {
        let _ = router(catalog());
    }
}
