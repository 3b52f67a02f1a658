//! Host telemetry MCP server
//!
//! Exposes point-in-time host metrics (clock, memory, CPU, disk, uptime,
//! platform identity) and a netstat-backed port-to-process lookup as MCP
//! tools, resources, and prompts.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use hostinfo_mcp::HostInfoServer;
//!
//! let server = HostInfoServer::new();
//! // Serve via stdio or call collectors directly
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `hostinfo-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "hostinfo": { "command": "./hostinfo-mcp" } } }
//! ```

pub mod collect;
pub mod convert;
pub mod error;
pub mod init;
pub mod netstat;
pub mod provider;
pub mod response;
pub mod server;
pub mod types;

// Re-export the main server type and its parameter types
pub use error::{HostInfoError, HostInfoResult};
pub use server::{HostInfoServer, PortInfoParams};
