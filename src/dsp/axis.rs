//! Time axis — sample timestamps for a duration at a sample rate.

/// Evenly spaced timestamps covering the half-open interval
/// `[0, length)` seconds.
///
/// The sample count is `length * rate` truncated toward zero, so the
/// endpoint at exactly `length` seconds is excluded. A zero or negative
/// `length`, or a zero `rate`, yields an empty axis.
pub fn time_axis(length: f64, rate: u32) -> Vec<f64> {
    let count = (length * rate as f64) as usize;
    if count == 0 {
        return Vec::new();
    }

    let step = length / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}
