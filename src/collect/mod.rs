//! Snapshot collectors
//!
//! Each submodule turns one [`MetricsProvider`](crate::provider::MetricsProvider)
//! query into a fixed-shape snapshot record.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod platform;
pub mod time;
pub mod uptime;

use crate::error::HostInfoResult;
use crate::provider::MetricsProvider;
use crate::types::SystemSnapshot;

/// Collect the combined system snapshot.
///
/// The sub-collectors query independent OS subsystems, so ordering does
/// not matter; any failing sub-collector aborts the whole aggregation
/// rather than producing a partial snapshot.
pub async fn system_info(provider: &dyn MetricsProvider) -> HostInfoResult<SystemSnapshot> {
    Ok(SystemSnapshot {
        time_info: time::current_time(),
        memory_info: memory::memory_usage(provider).await?,
        cpu_info: cpu::cpu_usage(provider).await?,
        disk_info: disk::disk_usage(provider).await?,
        platform_info: provider.platform_identity().await,
    })
}
