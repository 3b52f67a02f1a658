//! Unit conversion helpers

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Convert a byte count to gigabytes (GiB) with 2 decimal precision.
///
/// Rounds half away from zero (`f64::round` semantics).
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round2(bytes as f64 / BYTES_PER_GIB)
}

/// Round to 1 decimal place, half away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
