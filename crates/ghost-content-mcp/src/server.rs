//! The MCP server handler.
//!
//! `GhostMcpServer` composes tool registries and implements the rmcp
//! `ServerHandler`: `list_tools` concatenates the registries' tools,
//! `call_tool` dispatches to the first registry claiming the name.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use serde_json::Value;

use ghost_content_client::GhostContentClient;

use crate::registry::ToolRegistry;
use crate::tools::GhostTools;

/// MCP server exposing the Ghost Content API tools.
#[derive(Clone)]
pub struct GhostMcpServer {
    registries: Vec<Arc<dyn ToolRegistry>>,
}

impl GhostMcpServer {
    /// Create a server with the standard Content API tool registry.
    pub fn new(client: Arc<GhostContentClient>) -> Self {
        Self {
            registries: vec![Arc::new(GhostTools::with_shared(client))],
        }
    }

    /// Create a server from explicit registries.
    pub fn with_registries(registries: Vec<Arc<dyn ToolRegistry>>) -> Self {
        Self { registries }
    }

    /// Total number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.registries.iter().map(|r| r.tool_count()).sum()
    }

    /// List all registered tools across registries.
    pub fn all_tools(&self) -> Vec<rmcp::model::Tool> {
        self.registries.iter().flat_map(|r| r.tools()).collect()
    }
}

impl ServerHandler for GhostMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2025_03_26)
            .with_server_info(
                Implementation::new("ghost-content-mcp", env!("CARGO_PKG_VERSION"))
                    .with_title("Ghost Content MCP Server")
                    .with_description(
                        "Read-only access to a Ghost site's Content API: posts, authors, \
                         tags, pages, tiers, and settings",
                    ),
            )
            .with_instructions(
                "Ghost is a headless CMS. Browse tools list a collection with optional \
                 filter/limit/page/order/fields/include parameters; read tools fetch a \
                 single item by id or slug. Responses are the upstream JSON bodies, \
                 unmodified. formats (html, plaintext) applies to posts and pages only.",
            )
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.all_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request
            .arguments
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        tracing::debug!(tool = %request.name, "tool call");

        for registry in &self.registries {
            if let Some(future) = registry.call(&request.name, args.clone()) {
                return future.await;
            }
        }

        Err(ErrorData::invalid_params(
            format!("unknown tool: {}", request.name),
            None,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
