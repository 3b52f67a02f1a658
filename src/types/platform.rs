//! Platform identity types

use serde::{Deserialize, Serialize};

/// Fixed-key platform identity map
///
/// All keys are always present; values are empty strings when the host
/// does not report them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// OS family name (e.g. "Linux", "Windows")
    pub system: String,
    /// Full platform descriptor (OS version plus kernel)
    pub platform: String,
    /// CPU architecture (e.g. "x86_64", "aarch64")
    pub machine: String,
    /// Processor brand string
    pub processor: String,
    /// Toolchain baseline the binary was built against; a compiled
    /// binary has no interpreter version to report
    pub rust_version: String,
    /// Hostname
    pub hostname: String,
}
