//! Combined system snapshot type

use serde::{Deserialize, Serialize};

use super::{CpuSnapshot, DiskSnapshot, MemorySnapshot, PlatformInfo, TimeSnapshot};

/// Complete system information from a single aggregation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSnapshot {
    /// Current time in IST and UTC
    pub time_info: TimeSnapshot,
    /// Memory usage
    pub memory_info: MemorySnapshot,
    /// CPU usage and hardware
    pub cpu_info: CpuSnapshot,
    /// Root partition usage
    pub disk_info: DiskSnapshot,
    /// Platform identity
    pub platform_info: PlatformInfo,
}
