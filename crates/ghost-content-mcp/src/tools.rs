//! The Ghost Content API tools.
//!
//! Provides `GhostTools`, a `ToolRegistry` covering the 14 Content API
//! operations. Each tool maps to exactly one upstream endpoint; the
//! mapping is a static table fixed at build time.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use ghost_content_client::{BrowseParams, GhostContentClient, ReadParams, Resource};

use crate::error::McpErrorExt;
use crate::model::{CallToolResult, Content, ErrorData, Tool};
use crate::registry::{ToolRegistry, ToolResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Convert a `serde_json::Value::Object` to an `Arc<serde_json::Map>`.
fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Serialize a value to a successful `CallToolResult`.
fn serialize_response<T: serde::Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Build a `Tool` with a JSON schema.
fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool::new(name.to_string(), description.to_string(), json_schema(schema))
}

// ---------------------------------------------------------------------------
// Tool descriptors
// ---------------------------------------------------------------------------

/// Operation family of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolKind {
    /// Paginated list of a collection.
    Browse,
    /// Single-item lookup by opaque ID.
    ReadById,
    /// Single-item lookup by slug.
    ReadBySlug,
}

/// One entry in the static tool table: name, upstream resource, and
/// operation family.
struct ToolSpec {
    name: &'static str,
    resource: Resource,
    kind: ToolKind,
}

/// The full tool table. Every descriptor maps to exactly one upstream
/// endpoint; browse-only resources have no read entries.
const TOOL_SPECS: [ToolSpec; 14] = [
    ToolSpec { name: "browse_posts", resource: Resource::Posts, kind: ToolKind::Browse },
    ToolSpec { name: "read_post_by_id", resource: Resource::Posts, kind: ToolKind::ReadById },
    ToolSpec { name: "read_post_by_slug", resource: Resource::Posts, kind: ToolKind::ReadBySlug },
    ToolSpec { name: "browse_authors", resource: Resource::Authors, kind: ToolKind::Browse },
    ToolSpec { name: "read_author_by_id", resource: Resource::Authors, kind: ToolKind::ReadById },
    ToolSpec { name: "read_author_by_slug", resource: Resource::Authors, kind: ToolKind::ReadBySlug },
    ToolSpec { name: "browse_tags", resource: Resource::Tags, kind: ToolKind::Browse },
    ToolSpec { name: "read_tag_by_id", resource: Resource::Tags, kind: ToolKind::ReadById },
    ToolSpec { name: "read_tag_by_slug", resource: Resource::Tags, kind: ToolKind::ReadBySlug },
    ToolSpec { name: "browse_pages", resource: Resource::Pages, kind: ToolKind::Browse },
    ToolSpec { name: "read_page_by_id", resource: Resource::Pages, kind: ToolKind::ReadById },
    ToolSpec { name: "read_page_by_slug", resource: Resource::Pages, kind: ToolKind::ReadBySlug },
    ToolSpec { name: "browse_tiers", resource: Resource::Tiers, kind: ToolKind::Browse },
    ToolSpec { name: "browse_settings", resource: Resource::Settings, kind: ToolKind::Browse },
];

impl ToolSpec {
    fn description(&self) -> String {
        let resource = self.resource;
        match self.kind {
            ToolKind::Browse if !resource.supports_browse_params() => {
                "Browse site settings. This endpoint accepts no parameters.".to_string()
            }
            ToolKind::Browse => format!(
                "Browse {} with optional filtering, pagination, and field selection",
                resource.plural()
            ),
            ToolKind::ReadById => {
                format!("Read a single {} by its ID", resource.singular())
            }
            ToolKind::ReadBySlug => {
                format!("Read a single {} by its slug", resource.singular())
            }
        }
    }

    fn input_schema(&self) -> Value {
        match self.kind {
            ToolKind::Browse => browse_schema(self.resource),
            ToolKind::ReadById => read_schema(self.resource, "id", "Opaque item ID"),
            ToolKind::ReadBySlug => {
                read_schema(self.resource, "slug", "Human-readable unique slug")
            }
        }
    }
}

/// JSON schema for a browse tool.
fn browse_schema(resource: Resource) -> Value {
    if !resource.supports_browse_params() {
        return serde_json::json!({
            "type": "object",
            "properties": {}
        });
    }

    let mut properties = serde_json::json!({
        "include": {
            "type": "string",
            "description": "Related records to expand, comma-separated"
        },
        "fields": {
            "type": "string",
            "description": "Fields to return, comma-separated"
        },
        "filter": {
            "type": "string",
            "description": "Filter expression (e.g. \"featured:true\")"
        },
        "limit": {
            "type": "integer",
            "description": "Page size"
        },
        "page": {
            "type": "integer",
            "description": "Page number, 1-based"
        },
        "order": {
            "type": "string",
            "description": "Sort order (e.g. \"published_at desc\")"
        }
    });
    if resource.supports_formats() {
        properties["formats"] = serde_json::json!({
            "type": "string",
            "description": "Content formats to return, comma-separated (html, plaintext)"
        });
    }

    serde_json::json!({
        "type": "object",
        "properties": properties
    })
}

/// JSON schema for a read tool keyed by `id` or `slug`.
fn read_schema(resource: Resource, key: &str, key_description: &str) -> Value {
    let mut properties = serde_json::json!({
        "include": {
            "type": "string",
            "description": "Related records to expand, comma-separated"
        },
        "fields": {
            "type": "string",
            "description": "Fields to return, comma-separated"
        }
    });
    properties[key] = serde_json::json!({
        "type": "string",
        "description": key_description
    });
    if resource.supports_formats() {
        properties["formats"] = serde_json::json!({
            "type": "string",
            "description": "Content formats to return, comma-separated (html, plaintext)"
        });
    }

    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": [key]
    })
}

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for read-by-id tools.
#[derive(Debug, Deserialize)]
struct ReadByIdArgs {
    /// Item identifier.
    id: String,
    /// Shared read parameters.
    #[serde(flatten)]
    params: ReadParams,
}

/// Arguments for read-by-slug tools.
#[derive(Debug, Deserialize)]
struct ReadBySlugArgs {
    /// Item slug.
    slug: String,
    /// Shared read parameters.
    #[serde(flatten)]
    params: ReadParams,
}

// ---------------------------------------------------------------------------
// GhostTools
// ---------------------------------------------------------------------------

/// MCP tools backed by a `GhostContentClient`.
///
/// One registry provides all 14 Content API tools. Dispatch goes
/// through the static [`TOOL_SPECS`] table, so each call resolves to
/// exactly one upstream GET.
pub struct GhostTools {
    client: Arc<GhostContentClient>,
}

impl GhostTools {
    /// Create the tool registry with the given client.
    pub fn new(client: GhostContentClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create the tool registry with a shared client reference.
    pub fn with_shared(client: Arc<GhostContentClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for GhostTools {
    fn tools(&self) -> Vec<Tool> {
        TOOL_SPECS
            .iter()
            .map(|spec| make_tool(spec.name, &spec.description(), spec.input_schema()))
            .collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let spec = TOOL_SPECS.iter().find(|s| s.name == name)?;
        let client = Arc::clone(&self.client);
        let resource = spec.resource;

        match spec.kind {
            ToolKind::Browse => Some(Box::pin(async move {
                let params: BrowseParams = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
                let body = client
                    .browse(resource, &params)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                serialize_response(&body)
            })),

            ToolKind::ReadById => Some(Box::pin(async move {
                let args: ReadByIdArgs = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
                let body = client
                    .read_by_id(resource, &args.id, &args.params)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                serialize_response(&body)
            })),

            ToolKind::ReadBySlug => Some(Box::pin(async move {
                let args: ReadBySlugArgs = serde_json::from_value(args)
                    .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;
                let body = client
                    .read_by_slug(resource, &args.slug, &args.params)
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                serialize_response(&body)
            })),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
