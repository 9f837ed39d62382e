//! Oraculum MCP Server
//!
//! Standalone MCP server exposing the Oraculum content fabric to AI agents
//! over stdio.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use rmcp::ServiceExt;

use oraculum_content::Catalog;
use oraculum_mcp::tools::{HealthTools, LibraryTools, PrincipleTools, StudioTools};
use oraculum_mcp::{CompositeRegistry, OraculumMcpServer, ServerConfig, ToolRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr; stdout belongs to the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin();
    let registry = CompositeRegistry::new()
        .add(PrincipleTools::new(catalog))
        .add(LibraryTools::new(catalog))
        .add(StudioTools::new());

    let config = ServerConfig::default();
    let tool_count = registry.tool_count() + 1;
    let registry = registry.add(HealthTools::new(
        config.name.clone(),
        config.version.clone(),
        tool_count,
    ));

    let server = OraculumMcpServer::new(registry, config);
    tracing::info!(tools = server.tool_count(), "serving Oraculum MCP on stdio");

    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| tracing::error!("MCP server error: {e}"))?;
    service.waiting().await?;
    Ok(())
}
