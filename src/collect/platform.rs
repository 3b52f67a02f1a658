//! Platform identity rendering

use crate::provider::MetricsProvider;

/// Render the platform identity as `Key: value` lines.
pub async fn platform_text(provider: &dyn MetricsProvider) -> String {
    let id = provider.platform_identity().await;
    format!(
        "System: {}\nPlatform: {}\nMachine: {}\nProcessor: {}\nRust Version: {}\nHostname: {}",
        id.system, id.platform, id.machine, id.processor, id.rust_version, id.hostname
    )
}
