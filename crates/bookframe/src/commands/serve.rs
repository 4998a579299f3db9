//! Serve command: MCP server on stdio.

use anyhow::Context;
use bookframe_core::Config;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::BookServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");
    let server = BookServer::new(max_input_bytes, config.first_line);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
