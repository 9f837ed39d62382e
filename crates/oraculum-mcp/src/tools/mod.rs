//! Tool sets exposed by the Oraculum MCP server.
//!
//! # Modules
//!
//! - [`principles`]: principle lookup and navigation
//! - [`library`]: faceted prompt search
//! - [`studio`]: guided workflows
//! - [`health`]: server status

pub mod health;
pub mod library;
pub mod principles;
pub mod studio;

pub use health::HealthTools;
pub use library::LibraryTools;
pub use principles::PrincipleTools;
pub use studio::StudioTools;

use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde_json::Value;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers shared by the tool sets
// ---------------------------------------------------------------------------

fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

pub(crate) fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    let mut tool = Tool::default();
    tool.name = name.to_string().into();
    tool.description = Some(description.to_string().into());
    tool.input_schema = json_schema(schema);
    tool
}

pub(crate) fn serialize_response<T: serde::Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

pub(crate) fn parse_args<T: serde::de::DeserializeOwned>(args: Value) -> Result<T, ErrorData> {
    serde_json::from_value(args).map_err(|e| ErrorData::invalid_params(e.to_string(), None))
}
