//! Health check tool.
//!
//! Reports server status, tool count, and version information.

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{make_tool, serialize_response};

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered tools.
    pub tool_count: usize,
}

/// A tool registry that provides the `health` tool.
///
/// Captures server metadata at construction time and reports it when the
/// tool is called.
pub struct HealthTools {
    server_name: String,
    version: String,
    total_tool_count: usize,
}

impl HealthTools {
    /// Create health tools with server metadata.
    ///
    /// `total_tool_count` should include the health tool itself.
    pub fn new(
        server_name: impl Into<String>,
        version: impl Into<String>,
        total_tool_count: usize,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            version: version.into(),
            total_tool_count,
        }
    }
}

impl ToolRegistry for HealthTools {
    fn tools(&self) -> Vec<Tool> {
        vec![make_tool(
            "health",
            "Check server health and status",
            serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        )]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        if name != "health" {
            return None;
        }

        let response = HealthResponse {
            status: "healthy".to_string(),
            server_name: self.server_name.clone(),
            version: self.version.clone(),
            tool_count: self.total_tool_count,
        };

        Some(Box::pin(async move { serialize_response(&response) }))
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
    fn test_health_tools_listing() {
        let tools = HealthTools::new("oraculum", "0.1.0", 8);
        assert_eq!(tools.tool_count(), 1);
        assert!(tools.has_tool("health"));
        assert!(!tools.has_tool("other"));
    }

    #[tokio::test]
    async fn test_health_call_reports_metadata() {
        let tools = HealthTools::new("oraculum", "0.1.0", 8);
        let result = tools.call("health", json!({})).unwrap().await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(!result.content.is_empty());
    }

    #[test]
    fn test_health_unknown_tool_is_none() {
        let tools = HealthTools::new("oraculum", "0.1.0", 1);
        assert!(tools.call("unknown", json!({})).is_none());
    }

    #[test]
    fn test_health_response_roundtrip() {
        let json = r#"{"status":"healthy","server_name":"oraculum","version":"0.1.0","tool_count":8}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.tool_count, 8);
    }
}
