//! CPU usage collection

use std::time::Duration;

use crate::convert::{round1, round2};
use crate::error::{HostInfoError, HostInfoResult};
use crate::provider::MetricsProvider;
use crate::types::CpuSnapshot;

/// Measurement window for the instantaneous usage reading.
///
/// The call deliberately blocks for this long; a rate needs two samples.
pub const CPU_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Collect current CPU usage, core count, frequency, and load average.
pub async fn cpu_usage(provider: &dyn MetricsProvider) -> HostInfoResult<CpuSnapshot> {
    let percent = provider.cpu_percent(CPU_SAMPLE_INTERVAL).await?;
    let count = provider.cpu_count().await?;
    let frequency = provider.cpu_frequency().await?.unwrap_or(0.0);

    // Hosts without a load-average facility get the zero sentinel;
    // any other provider failure still propagates.
    let load_average = match provider.load_average().await {
        Ok(load) => load.map(round2),
        Err(HostInfoError::UnsupportedOnPlatform(_)) => [0.0, 0.0, 0.0],
        Err(err) => return Err(err),
    };

    Ok(CpuSnapshot {
        cpu_percent: round1(percent),
        cpu_count: count,
        cpu_freq_current: round1(frequency),
        load_average,
    })
}
