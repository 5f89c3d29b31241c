//! ProductPlan MCP Server
//!
//! A Model Context Protocol server that exposes the ProductPlan API to
//! MCP clients like Claude Desktop and Cursor.
//!
//! # Usage
//!
//! ```bash
//! productplan-mcp [serve]
//! productplan-mcp tools
//! productplan-mcp call <tool> [--args <json>]
//! ```
//!
//! # Environment Variables
//!
//! - `PRODUCTPLAN_API_TOKEN`: API token (required except for `tools`)
//! - `PRODUCTPLAN_API_BASE`: Override the API base URL
//! - `RUST_LOG`: Control log verbosity (default: `productplan_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::process::ExitCode;

use clap::Parser;
use productplan_api::ApiClient;
use productplan_mcp::cli::{Cli, Commands};
use productplan_mcp::{Error, ProductPlanMcpServer, Result, get_tool_definitions};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("productplan_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command.clone().unwrap_or(Commands::Serve) {
        Commands::Tools => {
            for tool in get_tool_definitions() {
                println!("{:<24} {}", tool.name, tool.description);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Call { tool, args } => {
            let server = connect(&cli)?;
            let arguments = serde_json::from_str(&args).map_err(|e| Error::InvalidArguments {
                message: format!("--args is not valid JSON: {}", e),
            })?;
            let result = server.call_tool(&tool, arguments).await;
            println!("{}", result.text_content());
            Ok(if result.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Serve => {
            connect(&cli)?.run().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load configuration once and build the server around it
fn connect(cli: &Cli) -> Result<ProductPlanMcpServer> {
    let config = cli.config()?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(ProductPlanMcpServer::new(ApiClient::new(config)))
}
