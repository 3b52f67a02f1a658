//! OS metrics capability
//!
//! [`MetricsProvider`] abstracts the OS queries the collectors need so
//! tests can substitute fixture data. The real implementation,
//! [`SysinfoMetrics`], is backed by the `sysinfo` crate and shares one
//! refreshed [`System`] behind a mutex.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{Disks, System};
use tokio::sync::Mutex;

use crate::error::{HostInfoError, HostInfoResult};
use crate::types::PlatformInfo;

/// Raw virtual-memory counters in bytes
#[derive(Debug, Clone, Copy)]
pub struct VirtualMemory {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    /// Usage percentage derived from available memory: (total - available) / total * 100
    pub percent: f64,
}

/// Raw disk usage counters in bytes
#[derive(Debug, Clone, Copy)]
pub struct DiskStats {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

/// Read-only OS measurement facilities
///
/// Every method is a point-in-time query with no side effects beyond
/// reading OS state.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Virtual memory counters.
    async fn virtual_memory(&self) -> HostInfoResult<VirtualMemory>;

    /// Sample global CPU usage over `interval`.
    ///
    /// Holds the calling task for the full interval: an instantaneous
    /// usage rate needs two readings separated by a measurement window.
    async fn cpu_percent(&self, interval: Duration) -> HostInfoResult<f64>;

    /// Number of logical CPU cores.
    async fn cpu_count(&self) -> HostInfoResult<usize>;

    /// Current CPU frequency in MHz; `None` when the platform reports nothing.
    async fn cpu_frequency(&self) -> HostInfoResult<Option<f64>>;

    /// 1/5/15 minute load averages.
    ///
    /// Fails with [`HostInfoError::UnsupportedOnPlatform`] on hosts
    /// without a load-average facility (notably Windows).
    async fn load_average(&self) -> HostInfoResult<[f64; 3]>;

    /// Usage of the mounted filesystem containing `path`.
    async fn disk_usage(&self, path: &Path) -> HostInfoResult<DiskStats>;

    /// System boot time as Unix epoch seconds.
    async fn boot_timestamp(&self) -> HostInfoResult<u64>;

    /// Platform identity strings; unknown values are empty.
    async fn platform_identity(&self) -> PlatformInfo;
}

/// `sysinfo`-backed metrics provider
pub struct SysinfoMetrics {
    system: Mutex<System>,
}

impl SysinfoMetrics {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new_all()),
        }
    }
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsProvider for SysinfoMetrics {
    async fn virtual_memory(&self) -> HostInfoResult<VirtualMemory> {
        let mut sys = self.system.lock().await;
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            return Err(HostInfoError::ProviderUnavailable(
                "memory counters report zero total".into(),
            ));
        }
        let available = sys.available_memory();
        Ok(VirtualMemory {
            total,
            available,
            used: sys.used_memory(),
            free: sys.free_memory(),
            percent: total.saturating_sub(available) as f64 / total as f64 * 100.0,
        })
    }

    async fn cpu_percent(&self, interval: Duration) -> HostInfoResult<f64> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_usage();
        tokio::time::sleep(interval).await;
        sys.refresh_cpu_usage();
        Ok(f64::from(sys.global_cpu_usage()))
    }

    async fn cpu_count(&self) -> HostInfoResult<usize> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_all();
        let count = sys.cpus().len();
        if count == 0 {
            return Err(HostInfoError::ProviderUnavailable("no CPUs visible".into()));
        }
        Ok(count)
    }

    async fn cpu_frequency(&self) -> HostInfoResult<Option<f64>> {
        let mut sys = self.system.lock().await;
        sys.refresh_cpu_all();
        Ok(sys
            .cpus()
            .first()
            .map(|cpu| cpu.frequency())
            .filter(|mhz| *mhz > 0)
            .map(|mhz| mhz as f64))
    }

    async fn load_average(&self) -> HostInfoResult<[f64; 3]> {
        #[cfg(unix)]
        {
            let load = System::load_average();
            Ok([load.one, load.five, load.fifteen])
        }
        #[cfg(not(unix))]
        {
            Err(HostInfoError::UnsupportedOnPlatform("load average"))
        }
    }

    async fn disk_usage(&self, path: &Path) -> HostInfoResult<DiskStats> {
        let disks = Disks::new_with_refreshed_list();
        // Longest mount-point prefix wins, so /home on its own partition
        // beats / for paths underneath it.
        let disk = disks
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .ok_or_else(|| {
                HostInfoError::ProviderUnavailable(format!(
                    "no mounted filesystem contains {}",
                    path.display()
                ))
            })?;
        let total = disk.total_space();
        let free = disk.available_space();
        Ok(DiskStats {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }

    async fn boot_timestamp(&self) -> HostInfoResult<u64> {
        let boot = System::boot_time();
        if boot == 0 {
            return Err(HostInfoError::ProviderUnavailable(
                "boot time unavailable".into(),
            ));
        }
        Ok(boot)
    }

    async fn platform_identity(&self) -> PlatformInfo {
        let processor = {
            let sys = self.system.lock().await;
            sys.cpus()
                .first()
                .map(|cpu| cpu.brand().trim().to_string())
                .unwrap_or_default()
        };
        let long_os = System::long_os_version().unwrap_or_default();
        let kernel = System::kernel_version().unwrap_or_default();
        PlatformInfo {
            system: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            platform: format!("{long_os} {kernel}").trim().to_string(),
            machine: std::env::consts::ARCH.to_string(),
            processor,
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
            hostname: System::host_name().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Fixture-backed provider for collector and server tests.

    use super::*;

    const GIB: u64 = 1 << 30;

    pub(crate) struct FakeMetrics {
        pub memory: VirtualMemory,
        pub cpu_percent: f64,
        pub cpu_count: usize,
        pub cpu_frequency: Option<f64>,
        /// `None` signals a host without a load-average facility.
        pub load_average: Option<[f64; 3]>,
        pub disk: DiskStats,
        pub boot_timestamp: u64,
        pub fail_memory: bool,
        pub fail_cpu: bool,
        pub fail_disk: bool,
        pub fail_boot: bool,
    }

    impl Default for FakeMetrics {
        fn default() -> Self {
            Self {
                memory: VirtualMemory {
                    total: 16 * GIB,
                    available: 6 * GIB,
                    used: 12 * GIB,
                    free: 4 * GIB,
                    percent: 62.5,
                },
                cpu_percent: 37.25,
                cpu_count: 8,
                cpu_frequency: Some(2400.0),
                load_average: Some([1.234, 0.567, 0.089]),
                disk: DiskStats {
                    total: 100 * GIB,
                    used: 42 * GIB + GIB / 2,
                    free: 57 * GIB + GIB / 2,
                },
                boot_timestamp: 1_700_000_000,
                fail_memory: false,
                fail_cpu: false,
                fail_disk: false,
                fail_boot: false,
            }
        }
    }

    fn unavailable(what: &str) -> HostInfoError {
        HostInfoError::ProviderUnavailable(format!("{what} fixture disabled"))
    }

    #[async_trait]
    impl MetricsProvider for FakeMetrics {
        async fn virtual_memory(&self) -> HostInfoResult<VirtualMemory> {
            if self.fail_memory {
                return Err(unavailable("memory"));
            }
            Ok(self.memory)
        }

        async fn cpu_percent(&self, _interval: Duration) -> HostInfoResult<f64> {
            if self.fail_cpu {
                return Err(unavailable("cpu"));
            }
            Ok(self.cpu_percent)
        }

        async fn cpu_count(&self) -> HostInfoResult<usize> {
            if self.fail_cpu {
                return Err(unavailable("cpu"));
            }
            Ok(self.cpu_count)
        }

        async fn cpu_frequency(&self) -> HostInfoResult<Option<f64>> {
            if self.fail_cpu {
                return Err(unavailable("cpu"));
            }
            Ok(self.cpu_frequency)
        }

        async fn load_average(&self) -> HostInfoResult<[f64; 3]> {
            match self.load_average {
                Some(load) => Ok(load),
                None => Err(HostInfoError::UnsupportedOnPlatform("load average")),
            }
        }

        async fn disk_usage(&self, _path: &Path) -> HostInfoResult<DiskStats> {
            if self.fail_disk {
                return Err(unavailable("disk"));
            }
            Ok(self.disk)
        }

        async fn boot_timestamp(&self) -> HostInfoResult<u64> {
            if self.fail_boot {
                return Err(unavailable("boot time"));
            }
            Ok(self.boot_timestamp)
        }

        async fn platform_identity(&self) -> PlatformInfo {
            PlatformInfo {
                system: "TestOS".into(),
                platform: "TestOS 1.0 6.1.0-test".into(),
                machine: "x86_64".into(),
                processor: "Test CPU @ 2.40GHz".into(),
                rust_version: "1.75".into(),
                hostname: "fixture-host".into(),
            }
        }
    }
}
