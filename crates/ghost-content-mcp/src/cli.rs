//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "GHOST_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the MCP server on stdio.
    Serve,

    /// List the registered tools with their descriptions.
    Tools,

    /// Print version information.
    Version,

    /// Check that the configuration is complete enough to serve.
    Health,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_parses() {
        let args = CliArgs::parse_from(["ghost-content-mcp"]);
        assert!(args.command.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_serve_with_config_flag() {
        let args = CliArgs::parse_from(["ghost-content-mcp", "--config", "/tmp/g.toml", "serve"]);
        assert_eq!(args.config.as_deref(), Some("/tmp/g.toml"));
        assert!(matches!(args.command, Some(Command::Serve)));
    }

    #[test]
    fn test_config_init_flags() {
        let args = CliArgs::parse_from([
            "ghost-content-mcp",
            "config",
            "init",
            "--file",
            "out.toml",
            "--force",
        ]);
        match args.command {
            Some(Command::Config(cmd)) => match cmd.command {
                ConfigAction::Init { file, force } => {
                    assert_eq!(file.as_deref(), Some("out.toml"));
                    assert!(force);
                }
                other => panic!("unexpected action: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
