//! Ghost Content Client — thin HTTP layer over the Content API.
//!
//! Every operation is a single outbound GET against one fixed resource
//! path. The response body passes through as `serde_json::Value`
//! without transformation.
//!
//! # Modules
//!
//! - [`resource`]: Static resource table (paths, capabilities)
//! - [`params`]: Browse/read query parameters
//! - [`client`]: The `GhostContentClient` itself

#![doc = include_str!("../README.md")]

pub mod client;
pub mod params;
pub mod resource;

// Re-export key types at crate root for convenience
pub use client::GhostContentClient;
pub use params::{BrowseParams, ReadParams};
pub use resource::Resource;
