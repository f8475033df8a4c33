//! Ghost Content MCP — tool registry and server.
//!
//! # Key Abstractions
//!
//! - [`registry::ToolRegistry`]: tool listing and dispatch trait
//! - [`tools::GhostTools`]: the 14 Content API tools
//! - [`server::GhostMcpServer`]: rmcp `ServerHandler` over registries

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config_handlers;
pub mod error;
pub mod model;
pub mod registry;
pub mod server;
pub mod tools;

pub use registry::{ToolRegistry, ToolResult};
pub use server::GhostMcpServer;
pub use tools::GhostTools;
