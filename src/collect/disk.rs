//! Disk usage collection

use std::path::Path;

use crate::convert::{bytes_to_gb, round1};
use crate::error::{HostInfoError, HostInfoResult};
use crate::provider::MetricsProvider;
use crate::types::DiskSnapshot;

#[cfg(windows)]
const ROOT_PATH: &str = "C:\\";
#[cfg(not(windows))]
const ROOT_PATH: &str = "/";

/// Collect usage of the root partition in gigabytes.
pub async fn disk_usage(provider: &dyn MetricsProvider) -> HostInfoResult<DiskSnapshot> {
    let usage = provider.disk_usage(Path::new(ROOT_PATH)).await?;
    if usage.total == 0 {
        return Err(HostInfoError::ProviderUnavailable(
            "root filesystem reports zero capacity".into(),
        ));
    }

    Ok(DiskSnapshot {
        total_gb: bytes_to_gb(usage.total),
        used_gb: bytes_to_gb(usage.used),
        free_gb: bytes_to_gb(usage.free),
        percentage_used: round1(usage.used as f64 / usage.total as f64 * 100.0),
    })
}
