//! MCP server infrastructure for Oraculum.
//!
//! Exposes the content fabric to AI agents via the Model Context Protocol:
//! principle lookup and navigation, library search, workflows, and a health
//! check, all over stdio transport.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      oraculum-mcp                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool registration and dispatch        │
//! │  CompositeRegistry — combine multiple tool sources          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  OraculumMcpServer — rmcp ServerHandler over a registry     │
//! │  ServerConfig — server metadata (name, version, about)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tool sets:                                                 │
//! │  ├── principles — list, get by slug, neighbors              │
//! │  ├── library — faceted prompt search                        │
//! │  ├── studio — workflows                                     │
//! │  └── health — server status and tool count                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use oraculum_content::Catalog;
//! use oraculum_mcp::{CompositeRegistry, OraculumMcpServer, ServerConfig};
//! use oraculum_mcp::tools::{HealthTools, LibraryTools, PrincipleTools, StudioTools};
//!
//! let catalog = Catalog::builtin();
//! let registry = CompositeRegistry::new()
//!     .add(PrincipleTools::new(catalog))
//!     .add(LibraryTools::new(catalog))
//!     .add(StudioTools::new());
//!
//! let server = OraculumMcpServer::new(registry, ServerConfig::default());
//! ```

pub mod registry;
pub mod server;
pub mod tools;

// Re-exports — registry
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};

// Re-exports — server
pub use server::{OraculumMcpServer, ServerConfig};
