//! Clock reading types

use serde::{Deserialize, Serialize};

/// Point-in-time clock reading in IST and UTC
///
/// Both rendered strings derive from the same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// Current time rendered in IST (UTC+05:30)
    pub current_time_ist: String,
    /// Current time rendered in UTC
    pub current_time_utc: String,
    /// Timezone identifier for the localized reading
    pub timezone: String,
    /// Unix timestamp in fractional seconds (UTC)
    pub timestamp: f64,
}
