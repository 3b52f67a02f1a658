//! Disk usage types

use serde::{Deserialize, Serialize};

/// Disk usage for the root partition in gigabytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskSnapshot {
    /// Total disk space in GB
    pub total_gb: f64,
    /// Used disk space in GB
    pub used_gb: f64,
    /// Free disk space in GB
    pub free_gb: f64,
    /// Disk usage percentage (0-100, 1 decimal)
    pub percentage_used: f64,
}
