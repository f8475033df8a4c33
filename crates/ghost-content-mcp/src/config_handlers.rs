//! Handler functions for config CLI commands.
//!
//! Implements `ghost-content-mcp config {path,init}`.

use std::path::PathBuf;

use ghost_content_core::{Error, GhostConfig, Result};

use crate::cli::ConfigAction;

/// Handle a config subcommand.
///
/// Receives the raw `--config` path (not a loaded config) because both
/// commands work before a config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

/// Show the resolved config file path.
fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    match GhostConfig::resolve_config_path(config_path) {
        Some(path) => {
            let exists = path.exists();
            println!("{}", path.display());
            if !exists {
                eprintln!("(file does not exist — run `ghost-content-mcp config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Create a default configuration file.
fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => GhostConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = GhostConfig::default();
    let toml_str = config.to_toml_string()?;
    std::fs::write(&path, &toml_str)?;

    println!("Config file created at {}", path.display());
    Ok(())
}
