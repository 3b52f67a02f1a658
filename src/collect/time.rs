//! Current time collection

use chrono::{FixedOffset, Utc};

use crate::types::TimeSnapshot;

/// Asia/Kolkata is a fixed UTC+05:30 offset with no DST transitions.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Read the clock once and render it in IST and UTC.
pub fn current_time() -> TimeSnapshot {
    let utc = Utc::now();
    let offset = FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range");
    let ist = utc.with_timezone(&offset);

    TimeSnapshot {
        current_time_ist: format!("{} IST", ist.format("%Y-%m-%d %H:%M:%S")),
        current_time_utc: format!("{} UTC", utc.format("%Y-%m-%d %H:%M:%S")),
        timezone: "Asia/Kolkata (IST)".to_string(),
        timestamp: utc.timestamp_micros() as f64 / 1_000_000.0,
    }
}
