//! lolgpt - Entry Point
//!
//! Starts the match simulation tool server on stdin/stdout. Logs go to
//! stderr so they never interleave with protocol messages.

use clap::Parser;
use lolgpt::core::config::{ServiceConfig, BASE_URL_ENV};
use lolgpt::core::error::Result;
use lolgpt::matchup::MatchService;
use lolgpt::mcp::McpServer;
use lolgpt::remote::SimulationClient;
use lolgpt::tools::ToolRegistry;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// League of Legends Mock Match tool server
#[derive(Parser, Debug)]
#[command(name = "lolgpt")]
#[command(about = "League of Legends Mock Match MCP Server")]
struct Args {
    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Optional TOML file with `base_url` and `timeout_secs`
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // --debug wins over RUST_LOG; otherwise RUST_LOG, then info
    let filter = if args.debug {
        EnvFilter::new("lolgpt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lolgpt=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ServiceConfig::load(args.config.as_deref())?;
    tracing::info!(
        endpoint = %config.simulation_url(),
        timeout_secs = config.timeout.as_secs(),
        "lolgpt starting (set {} to change the service URL)",
        BASE_URL_ENV
    );

    let client = SimulationClient::new(&config)?;
    let registry = ToolRegistry::new(MatchService::new(client));
    tracing::debug!("Registered {} tools", registry.list().len());

    let rt = Runtime::new()?;
    rt.block_on(McpServer::new(registry).serve_stdio())?;

    tracing::info!("stdin closed, shutting down");
    Ok(())
}
