//! Tool registry trait.
//!
//! A registry lists its tools and dispatches calls by name. The server
//! composes any number of registries; the first registry claiming a
//! name handles the call.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::model::{CallToolResult, ErrorData, Tool};

/// Boxed future returned by tool dispatch.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// A named set of MCP tools with async dispatch.
pub trait ToolRegistry: Send + Sync {
    /// List the tools this registry provides.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatch a call by tool name.
    ///
    /// Returns `None` when the name is not recognized, letting the
    /// server try the next registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Whether this registry provides a tool with the given name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }

    /// Number of tools this registry provides.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }
}
