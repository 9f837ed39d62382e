//! MCP tools for the guided workflows.

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use oraculum_studio::{Workflow, workflow_by_id, workflows};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{make_tool, parse_args, serialize_response};

// ---------------------------------------------------------------------------
// Argument and response types
// ---------------------------------------------------------------------------

/// Arguments for `get_workflow`.
#[derive(Debug, Deserialize)]
pub struct WorkflowArgs {
    /// Workflow id (normalized before lookup).
    pub id: String,
}

/// Compact workflow listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Stable id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// What the workflow produces.
    pub description: String,
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
            description: workflow.description.clone(),
            principle: workflow.principle.clone(),
            estimated_time: workflow.estimated_time.clone(),
            step_count: workflow.steps.len(),
        }
    }
}

/// Response from `list_workflows`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListWorkflowsResponse {
    /// Number of workflows.
    pub total: usize,
    /// Summaries in authored order.
    pub workflows: Vec<WorkflowSummary>,
}

/// Response from `get_workflow`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetWorkflowResponse {
    /// Whether the id resolved.
    pub found: bool,
    /// The id that was looked up.
    pub id: String,
    /// Full workflow when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,
}

// ---------------------------------------------------------------------------
// StudioTools
// ---------------------------------------------------------------------------

/// MCP tools over the guided workflows.
///
/// Generates two tools:
/// - `list_workflows` — workflow summaries
/// - `get_workflow` — full workflow by id
#[derive(Default)]
pub struct StudioTools;

impl StudioTools {
    /// Create studio tools.
    pub fn new() -> Self {
        Self
    }

    fn list_workflows(&self) -> ListWorkflowsResponse {
        let summaries: Vec<WorkflowSummary> =
            workflows().iter().map(WorkflowSummary::from).collect();
        ListWorkflowsResponse {
            total: summaries.len(),
            workflows: summaries,
        }
    }

    fn get_workflow(&self, args: WorkflowArgs) -> GetWorkflowResponse {
        let workflow = workflow_by_id(&args.id).cloned();
        GetWorkflowResponse {
            found: workflow.is_some(),
            id: args.id,
            workflow,
        }
    }
}

impl ToolRegistry for StudioTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "list_workflows",
                "List the guided workflows",
                serde_json::json!({
                    "type": "object",
                    "properties": {}
                }),
            ),
            make_tool(
                "get_workflow",
                "Get a guided workflow with all of its steps by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Workflow id, e.g. 'strategic-stacking'"
                        }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        match name {
            "list_workflows" => {
                let response = self.list_workflows();
                Some(Box::pin(async move { serialize_response(&response) }))
            }
            "get_workflow" => {
                let outcome = parse_args::<WorkflowArgs>(args).map(|args| self.get_workflow(args));
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_listing() {
        let tools = StudioTools::new();
        assert_eq!(tools.tool_count(), 2);
        assert!(tools.has_tool("list_workflows"));
        assert!(tools.has_tool("get_workflow"));
    }

    #[test]
    fn test_list_workflows() {
        let response = StudioTools::new().list_workflows();
        assert_eq!(response.total, 2);
        assert_eq!(response.workflows[0].id, "strategic-stacking");
        assert_eq!(response.workflows[0].step_count, 5);
    }

    #[test]
    fn test_get_workflow_found() {
        let response = StudioTools::new().get_workflow(WorkflowArgs {
            id: "partnership-accelerator".to_string(),
        });
        assert!(response.found);
        assert_eq!(response.workflow.unwrap().steps.len(), 3);
    }

    #[test]
    fn test_get_workflow_not_found_is_a_payload() {
        let response = StudioTools::new().get_workflow(WorkflowArgs {
            id: "no-such-workflow".to_string(),
        });
        assert!(!response.found);
        assert!(response.workflow.is_none());
    }

    #[tokio::test]
    async fn test_call_get_workflow() {
        let result = StudioTools::new()
            .call("get_workflow", json!({"id": "strategic-stacking"}))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_call_unknown_tool_is_none() {
        assert!(StudioTools::new().call("unknown", json!({})).is_none());
    }
}
