//! Application wiring: logging, command dispatch, and the serve loop.

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use ghost_content_client::GhostContentClient;
use ghost_content_core::{GhostConfig, Result};

use crate::cli::{CliArgs, Command};
use crate::config_handlers;
use crate::registry::ToolRegistry;
use crate::server::GhostMcpServer;
use crate::tools::GhostTools;

/// The ghost-content-mcp application.
pub struct GhostApp {
    config: GhostConfig,
    version: String,
}

impl GhostApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = GhostConfig::load(args.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create with an explicit configuration.
    pub fn new(config: GhostConfig) -> Self {
        Self {
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &GhostConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Writes to stderr unconditionally: stdout carries the MCP stdio
    /// transport. Uses `RUST_LOG` if set, otherwise defaults based on
    /// verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the application with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Version) => {
                println!("ghost-content-mcp {}", self.version);
                Ok(())
            }
            Some(Command::Health) => self.handle_health(),
            Some(Command::Tools) => self.handle_tools(),
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            // Serving is the default behavior for an MCP stdio binary.
            Some(Command::Serve) | None => self.handle_serve().await,
        }
    }

    /// Verify the configuration is complete enough to serve.
    fn handle_health(&self) -> Result<()> {
        let client = GhostContentClient::new(&self.config)?;
        println!(
            "ghost-content-mcp: healthy (upstream {})",
            client.base_url()
        );
        Ok(())
    }

    /// Print the registered tools.
    fn handle_tools(&self) -> Result<()> {
        // Tool listing does not need credentials.
        let client = GhostContentClient::from_parts(
            self.config.base_url().unwrap_or_else(|_| "https://unconfigured.invalid/".to_string()),
            self.config.content_api_key.clone().unwrap_or_default(),
            self.config.api_version.clone(),
        );
        let tools = GhostTools::new(client);
        for tool in tools.tools() {
            let description = tool
                .description
                .as_deref()
                .unwrap_or("")
                .to_string();
            println!("{:<22} {description}", tool.name);
        }
        Ok(())
    }

    /// Serve MCP over stdio until the peer disconnects.
    async fn handle_serve(&self) -> Result<()> {
        let client = Arc::new(GhostContentClient::new(&self.config)?);
        let server = GhostMcpServer::new(client);

        tracing::info!(
            version = %self.version,
            tools = server.tool_count(),
            "ghost-content-mcp starting (stdio transport)"
        );

        let transport = rmcp::transport::io::stdio();
        let service = server
            .serve(transport)
            .await
            .map_err(|e| ghost_content_core::Error::http(format!("MCP transport: {e}")))?;
        service
            .waiting()
            .await
            .map_err(|e| ghost_content_core::Error::http(format!("MCP service: {e}")))?;

        Ok(())
    }
}
