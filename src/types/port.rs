//! Port lookup types

use serde::{Deserialize, Serialize};

/// Result of a netstat port lookup
///
/// The optional fields are populated together when a matching line is
/// found. A miss or a failed netstat invocation leaves them all `None`
/// and encodes the outcome in `raw_line` (`"Not found"` or
/// `"Error: ..."`), so this record is always a "success" at the
/// transport level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRecord {
    /// The port that was looked up
    pub port: u32,
    /// Owning process id
    pub pid: Option<u32>,
    /// Protocol column (e.g. "TCP", "UDP")
    pub protocol: Option<String>,
    /// Local address:port
    pub local_address: Option<String>,
    /// Foreign address:port
    pub foreign_address: Option<String>,
    /// Connection state; empty string for non-TCP protocols
    pub state: Option<String>,
    /// The matched netstat line verbatim (trimmed), or a sentinel
    pub raw_line: String,
}

impl PortRecord {
    /// Record with all optional fields absent and a sentinel raw line.
    pub(crate) fn miss(port: u32, raw_line: String) -> Self {
        Self {
            port,
            pid: None,
            protocol: None,
            local_address: None,
            foreign_address: None,
            state: None,
            raw_line,
        }
    }
}
