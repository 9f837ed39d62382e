//! Tool registry trait for the MCP server.
//!
//! Each surface of the fabric (principles, library, studio, health)
//! implements [`ToolRegistry`] to declare its tools and dispatch calls by
//! name. [`CompositeRegistry`] combines them into the single registry the
//! server holds.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for async tool handler results.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Trait for registering and dispatching MCP tools.
///
/// The server delegates `list_tools` and `call_tool` to the registry it
/// holds. Dispatch returns `None` for unrecognized names so composites can
/// try the next source.
///
/// # Example
///
/// ```rust,ignore
/// struct PrincipleTools { catalog: &'static Catalog }
///
/// impl ToolRegistry for PrincipleTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tool definitions */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "get_principle" => Some(self.handle_get_principle(args)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns information about all available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

/// A registry that combines multiple sub-registries.
///
/// Dispatch tries sources in registration order and stops at the first one
/// that recognizes the name.
pub struct CompositeRegistry {
    registries: Vec<Box<dyn ToolRegistry>>,
}

impl CompositeRegistry {
    /// Create a new empty composite registry.
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    /// Add a sub-registry.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: ToolRegistry + 'static>(mut self, registry: R) -> Self {
        self.registries.push(Box::new(registry));
        self
    }
}

impl Default for CompositeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry for CompositeRegistry {
    fn tools(&self) -> Vec<Tool> {
        self.registries.iter().flat_map(|r| r.tools()).collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        for registry in &self.registries {
            if let Some(result) = registry.call(name, args.clone()) {
                return Some(result);
            }
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================
