//! Error types for host telemetry operations
//!
//! Snapshot collectors and the aggregator propagate these errors to the
//! MCP layer. The port lookup and uptime operations instead swallow
//! most failures into sentinel payloads; the only error they propagate
//! is [`HostInfoError::ParseFailure`].

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while querying host metrics
#[derive(Debug, Error)]
pub enum HostInfoError {
    /// The OS refused or was unable to answer a metrics query
    #[error("metrics provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The host OS has no facility for this metric
    #[error("{0} is not supported on this platform")]
    UnsupportedOnPlatform(&'static str),

    /// An external command could not be launched or timed out
    #[error("external command failed: {0}")]
    ExternalCommandFailure(String),

    /// Command output did not have the expected shape
    #[error("failed to parse command output: {0}")]
    ParseFailure(String),

    /// The caller supplied an out-of-range or malformed argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for telemetry operations
pub type HostInfoResult<T> = Result<T, HostInfoError>;

impl From<HostInfoError> for McpError {
    fn from(err: HostInfoError) -> Self {
        match &err {
            HostInfoError::InvalidArgument(_) => McpError::invalid_params(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}
