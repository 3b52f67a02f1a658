//! Memory usage collection

use crate::convert::{bytes_to_gb, round1};
use crate::error::HostInfoResult;
use crate::provider::MetricsProvider;
use crate::types::MemorySnapshot;

/// Collect current memory usage in gigabytes.
pub async fn memory_usage(provider: &dyn MetricsProvider) -> HostInfoResult<MemorySnapshot> {
    let vm = provider.virtual_memory().await?;

    Ok(MemorySnapshot {
        total_gb: bytes_to_gb(vm.total),
        available_gb: bytes_to_gb(vm.available),
        used_gb: bytes_to_gb(vm.used),
        percentage_used: round1(vm.percent),
        free_gb: bytes_to_gb(vm.free),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::fake::FakeMetrics;
    use crate::provider::VirtualMemory;

    #[tokio::test]
    async fn converts_fixture_bytes_to_gigabytes() {
        let provider = FakeMetrics::default();
        let snapshot = memory_usage(&provider).await.unwrap();

        assert_eq!(snapshot.total_gb, 16.0);
        assert_eq!(snapshot.available_gb, 6.0);
        assert_eq!(snapshot.used_gb, 12.0);
        assert_eq!(snapshot.free_gb, 4.0);
        assert_eq!(snapshot.percentage_used, 62.5);
    }

    #[tokio::test]
    async fn used_plus_free_stays_close_to_total() {
        let provider = FakeMetrics {
            memory: VirtualMemory {
                total: 15_923_456_789,
                available: 7_100_200_300,
                used: 15_923_456_789 - 3_900_100_200,
                free: 3_900_100_200,
                percent: 55.4,
            },
            ..Default::default()
        };
        let snapshot = memory_usage(&provider).await.unwrap();

        // Raw bytes satisfy total == used + free, so the rounded GB
        // values may drift by at most one rounding step each.
        let sum = snapshot.used_gb + snapshot.free_gb;
        assert!((sum - snapshot.total_gb).abs() <= 0.02, "sum={sum}");
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let provider = FakeMetrics {
            fail_memory: true,
            ..Default::default()
        };
        assert!(memory_usage(&provider).await.is_err());
    }
}
