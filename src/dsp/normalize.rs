//! Peak normalization of sample buffers.

/// Largest absolute sample value in the buffer. Zero for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()))
}

/// Rescale a buffer so its loudest sample has absolute value 1.
///
/// A silent (all-zero) or empty buffer is returned unchanged, avoiding a
/// division by zero. When the peak is nonzero the output range is within
/// [-1, 1].
pub fn normalize(samples: &[f64]) -> Vec<f64> {
    let max = peak(samples);
    if max == 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|&s| s / max).collect()
}
