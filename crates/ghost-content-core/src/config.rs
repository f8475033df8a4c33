//! Configuration for the Ghost Content MCP server.
//!
//! Provides the [`GhostConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `GHOST_CONFIG` environment variable
//! 3. XDG default: `~/.config/ghost-content-mcp/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables with the `GHOST` prefix override file values:
//! `GHOST_ADMIN_DOMAIN`, `GHOST_CONTENT_API_KEY`, `GHOST_API_VERSION`.

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Default Content API version, sent as the `Accept-Version` header.
pub const DEFAULT_API_VERSION: &str = "v5.0";

/// Main configuration for the Ghost Content MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Ghost site domain (e.g. "demo.ghost.io"). The Content API base
    /// URL is derived from this.
    pub admin_domain: Option<String>,

    /// Content API key, forwarded as the `key` query parameter on
    /// every request. The Content API does not use Authorization
    /// headers.
    pub content_api_key: Option<String>,

    /// Content API version, sent as the `Accept-Version` header.
    pub api_version: String,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            admin_domain: None,
            content_api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl GhostConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `GHOST_CONFIG` env var
    /// 3. XDG default: `~/.config/ghost-content-mcp/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let env_opts = env::Options::with_top_level("GHOST");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. GHOST_CONFIG env var
        if let Ok(path) = std::env::var("GHOST_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ghost-content-mcp").join("config.toml"))
    }

    /// Derive the Content API base URL from the configured domain.
    ///
    /// Matches the upstream convention:
    /// `https://{admin_domain}/ghost/api/content/` with trailing
    /// slashes on the domain stripped. A domain that already carries a
    /// scheme is used as-is.
    pub fn base_url(&self) -> Result<String> {
        let domain = self
            .admin_domain
            .as_deref()
            .ok_or_else(|| Error::config("admin_domain is not set (GHOST_ADMIN_DOMAIN)"))?;
        let domain = domain.trim_end_matches('/');
        if domain.is_empty() {
            return Err(Error::config("admin_domain is empty"));
        }

        if domain.starts_with("http://") || domain.starts_with("https://") {
            Ok(format!("{domain}/ghost/api/content/"))
        } else {
            Ok(format!("https://{domain}/ghost/api/content/"))
        }
    }

    /// Return the configured Content API key.
    pub fn content_api_key(&self) -> Result<&str> {
        self.content_api_key
            .as_deref()
            .ok_or_else(|| Error::config("content_api_key is not set (GHOST_CONTENT_API_KEY)"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
