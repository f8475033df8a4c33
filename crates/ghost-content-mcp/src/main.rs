//! Ghost Content MCP server binary.
//!
//! Exposes the Ghost Content API (posts, authors, tags, pages, tiers,
//! settings) as MCP tools over stdio.

use clap::Parser;

use ghost_content_mcp::app::GhostApp;
use ghost_content_mcp::cli::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let app = GhostApp::from_args(&args)?;
    app.run(args).await?;
    Ok(())
}
