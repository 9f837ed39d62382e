//! The MCP server handler.
//!
//! `OraculumMcpServer` is a thin rmcp `ServerHandler` over a
//! [`ToolRegistry`]: tool listing and dispatch live in the registry, the
//! handler only adapts them to the protocol.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use serde_json::Value;

use crate::registry::ToolRegistry;

/// Server metadata reported during initialization.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// One-paragraph description, sent as protocol instructions.
    pub description: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "oraculum".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Oraculum content fabric: seven strategic principles, a searchable \
                          prompt library, and guided workflows. Slugs that do not resolve come \
                          back as found=false payloads, not errors."
                .to_string(),
        }
    }
}

/// MCP server over a tool registry.
pub struct OraculumMcpServer {
    registry: Box<dyn ToolRegistry>,
    config: ServerConfig,
}

impl OraculumMcpServer {
    /// Create a server from a registry and metadata.
    pub fn new<R: ToolRegistry + 'static>(registry: R, config: ServerConfig) -> Self {
        Self {
            registry: Box::new(registry),
            config,
        }
    }

    /// Number of tools the server exposes.
    pub fn tool_count(&self) -> usize {
        self.registry.tool_count()
    }
}

impl ServerHandler for OraculumMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::new(self.config.name.clone(), self.config.version.clone());
        info.instructions = Some(self.config.description.clone());
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        match self.registry.call(&request.name, args) {
            Some(handler) => handler.await,
            None => Err(ErrorData::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
