//! Port-to-process lookup via the system netstat command
//!
//! Matching is deliberately loose: a line is a hit when it contains the
//! literal substring `":{port} "` anywhere, which can false-match when
//! the foreign address happens to carry the same digits after a colon.
//! That granularity is observable behavior and is kept as-is.
//!
//! This operation is best-effort by contract: a netstat launch failure
//! or timeout is folded into the returned record rather than raised.
//! The one exception is a pid column that fails to parse, which is a
//! real error and propagates.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::{HostInfoError, HostInfoResult};
use crate::types::PortRecord;

/// Hard cap on how long a single netstat invocation may run.
pub const NETSTAT_TIMEOUT: Duration = Duration::from_secs(5);

const NETSTAT_PROGRAM: &str = "netstat";
/// All sockets, numeric addresses, owning pid as the final column.
const NETSTAT_ARGS: &[&str] = &["-ano"];

const NOT_FOUND: &str = "Not found";

/// Minimum whitespace-separated fields for a parseable netstat row.
const MIN_FIELDS: usize = 5;

/// Capability for running an external command and capturing its output
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command and capture its stdout as text.
    ///
    /// A non-zero exit status is not an error here; whatever the
    /// command printed is still returned. Only spawn/IO failures and
    /// timeouts fail.
    async fn capture(&self, program: &str, args: &[&str]) -> HostInfoResult<String>;
}

/// Runs commands on the host with a timeout guard
pub struct NetstatRunner;

#[async_trait]
impl CommandRunner for NetstatRunner {
    async fn capture(&self, program: &str, args: &[&str]) -> HostInfoResult<String> {
        debug!("executing: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match tokio::time::timeout(NETSTAT_TIMEOUT, output).await {
            Ok(Ok(output)) => Ok(String::from_utf8_lossy(&output.stdout).to_string()),
            Ok(Err(err)) => Err(HostInfoError::ExternalCommandFailure(format!(
                "{program}: {err}"
            ))),
            // Dropping the future kills the child process.
            Err(_elapsed) => Err(HostInfoError::ExternalCommandFailure(format!(
                "{program} timed out after {}s",
                NETSTAT_TIMEOUT.as_secs()
            ))),
        }
    }
}

/// Look up which process owns `port`.
///
/// Always returns a record when netstat cannot be run (the failure text
/// goes into `raw_line`); only an out-of-range port or an unparseable
/// pid column propagates as an error.
pub async fn port_info(runner: &dyn CommandRunner, port: u32) -> HostInfoResult<PortRecord> {
    if port > u32::from(u16::MAX) {
        return Err(HostInfoError::InvalidArgument(format!(
            "port {port} is out of range"
        )));
    }

    match runner.capture(NETSTAT_PROGRAM, NETSTAT_ARGS).await {
        Ok(output) => scan_output(port, &output),
        Err(err) => {
            warn!(%err, port, "netstat invocation failed");
            Ok(PortRecord::miss(port, format!("Error: {err}")))
        }
    }
}

/// Scan netstat output for the first line mentioning `port` in an
/// address column.
fn scan_output(port: u32, output: &str) -> HostInfoResult<PortRecord> {
    // Trailing space keeps :8080 from matching :80801, but the needle
    // can still hit the foreign address column.
    let needle = format!(":{port} ");

    for line in output.lines() {
        if !line.contains(&needle) {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            // Header or truncated row; keep scanning.
            continue;
        }

        let protocol = fields[0];
        // Only TCP rows carry a state column.
        let state = if protocol.eq_ignore_ascii_case("tcp") {
            fields[3]
        } else {
            ""
        };
        let pid_field = fields[fields.len() - 1];
        let pid: u32 = pid_field.parse().map_err(|_| {
            HostInfoError::ParseFailure(format!("netstat pid column is not numeric: {pid_field:?}"))
        })?;

        return Ok(PortRecord {
            port,
            pid: Some(pid),
            protocol: Some(protocol.to_string()),
            local_address: Some(fields[1].to_string()),
            foreign_address: Some(fields[2].to_string()),
            state: Some(state.to_string()),
            raw_line: line.trim().to_string(),
        });
    }

    Ok(PortRecord::miss(port, NOT_FOUND.to_string()))
}
