//! CPU usage types

use serde::{Deserialize, Serialize};

/// CPU usage and hardware information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuSnapshot {
    /// Global CPU usage percentage (0-100, 1 decimal)
    pub cpu_percent: f64,
    /// Number of logical CPU cores
    pub cpu_count: usize,
    /// Current CPU frequency in MHz, 0.0 when the platform reports none
    pub cpu_freq_current: f64,
    /// Load average over 1, 5, and 15 minutes; all zeros when the host
    /// OS has no load-average facility
    pub load_average: [f64; 3],
}
