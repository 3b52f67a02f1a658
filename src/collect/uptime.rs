//! Uptime rendering
//!
//! Unlike the snapshot collectors, this operation never fails: a
//! provider error is folded into the returned string.

use chrono::Utc;
use tracing::warn;

use crate::provider::MetricsProvider;

/// Render system uptime as a fixed-format sentence, or an
/// `Unable to get uptime: ...` sentinel when boot time is unavailable.
pub async fn uptime_text(provider: &dyn MetricsProvider) -> String {
    match provider.boot_timestamp().await {
        Ok(boot) => {
            let now = Utc::now().timestamp();
            let elapsed = now.saturating_sub(boot as i64).max(0) as u64;
            format_uptime(elapsed)
        }
        Err(err) => {
            warn!(%err, "boot timestamp unavailable");
            format!("Unable to get uptime: {err}")
        }
    }
}

/// Decompose elapsed seconds into whole days, hours, and minutes.
///
/// Floor division throughout; leftover seconds are dropped and days are
/// never carried into larger units.
pub fn format_uptime(elapsed_secs: u64) -> String {
    let days = elapsed_secs / 86_400;
    let hours = (elapsed_secs % 86_400) / 3_600;
    let minutes = (elapsed_secs % 3_600) / 60;
    format!("System uptime: {days} days, {hours} hours, {minutes} minutes")
}
