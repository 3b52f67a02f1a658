//! Memory usage types

use serde::{Deserialize, Serialize};

/// System memory usage in gigabytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Total physical memory in GB
    pub total_gb: f64,
    /// Available memory in GB
    pub available_gb: f64,
    /// Used memory in GB
    pub used_gb: f64,
    /// Memory usage percentage (0-100, 1 decimal)
    pub percentage_used: f64,
    /// Free memory in GB
    pub free_gb: f64,
}
