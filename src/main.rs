//! Host telemetry MCP server binary
//!
//! Serves over stdio; logs go to stderr.

use rmcp::ServiceExt;

use hostinfo_mcp::{init, HostInfoServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init::init_tracing("hostinfo_mcp")?;

    tracing::info!("Starting hostinfo MCP server");

    let server = HostInfoServer::new();
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
