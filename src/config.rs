//! Process-wide tuning state.
//!
//! Two values configure every synthesis call that does not pass them
//! explicitly: the default sample rate and the reference-number offset
//! (which semitone counts as zero). Both are read at call time, so a
//! reassignment affects only calls made after it. The crate assumes a
//! single-threaded usage model; concurrent reassignment from multiple
//! threads is unsupported.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Sample rate used when a call omits one, in samples per second.
pub const STANDARD_RATE: u32 = 44_100;

static DEFAULT_RATE: AtomicU32 = AtomicU32::new(STANDARD_RATE);

// f64 bit pattern; 0 encodes 0.0.
static REFERENCE_NUMBER: AtomicU64 = AtomicU64::new(0);

/// Current default sample rate.
pub fn default_rate() -> u32 {
    DEFAULT_RATE.load(Ordering::Relaxed)
}

/// Reassign the default sample rate. Affects only calls made afterwards.
pub fn set_default_rate(rate: u32) {
    DEFAULT_RATE.store(rate, Ordering::Relaxed);
}

/// Current reference-number offset: the semitone offset treated as zero
/// by the tone-name parser and the frequency formula.
pub fn reference_number() -> f64 {
    f64::from_bits(REFERENCE_NUMBER.load(Ordering::Relaxed))
}

/// Reassign the reference-number offset. Tones constructed before the
/// call keep the frequency they were built with.
pub fn set_reference_number(offset: f64) {
    REFERENCE_NUMBER.store(offset.to_bits(), Ordering::Relaxed);
}

// Any test that reads or reassigns the globals must hold this lock.
#[cfg(test)]
pub(crate) static TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
