//! Re-exports of the rmcp model types used by tool registries.
//!
//! Keeps the registry and tools modules independent of rmcp's module
//! layout.

pub use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
