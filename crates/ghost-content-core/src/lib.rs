//! Ghost Content Core — shared errors and configuration.
//!
//! This crate provides the foundational types used across the Ghost
//! Content MCP crates. It has no internal dependencies (dependency
//! level 0) and no transport dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Configuration loading (file, environment, defaults)

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::GhostConfig;
pub use error::{Error, Result};
