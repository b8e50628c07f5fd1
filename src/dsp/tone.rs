//! Tone — a single equal-temperament pitch and its sine waveform.

use std::f64::consts::PI;

use crate::config;
use crate::error::ToneError;
use crate::pitch::{parse_tone_name, semitone_frequency};

use super::axis::time_axis;
use super::normalize::normalize;
use super::renderer::AudioEmbed;

/// A single pitch. Immutable after construction: `frequency` is derived
/// once from the reference-number offset current at that moment, so later
/// changes to the process-wide offset never retune an existing tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Semitone offset relative to the reference pitch. Fractional
    /// offsets give microtonal pitches.
    pub number: f64,
    /// Linear scale factor applied to the waveform.
    pub amplitude: f64,
    /// Frequency in Hz assigned to semitone offset zero.
    pub reference: f64,
    /// Derived frequency in Hz.
    pub frequency: f64,
}

impl Tone {
    /// Tone at a semitone offset with amplitude 1 and A4 = 440 Hz.
    pub fn new(number: f64) -> Self {
        Self::with_params(number, 1.0, 440.0)
    }

    /// Full constructor. Inputs are not validated for finiteness;
    /// non-finite values propagate through the float arithmetic.
    pub fn with_params(number: f64, amplitude: f64, reference: f64) -> Self {
        let frequency = semitone_frequency(number, reference, config::reference_number());
        Tone {
            number,
            amplitude,
            reference,
            frequency,
        }
    }

    /// Parse a tone name like `"a4"` or `"c#3"` into a default tone.
    pub fn from_name(name: &str) -> Result<Self, ToneError> {
        Ok(Self::new(parse_tone_name(name)?))
    }

    /// New tone `halfsteps_up` semitones away, keeping this tone's
    /// amplitude and reference.
    pub fn relative_tone(&self, halfsteps_up: f64) -> Self {
        Self::with_params(self.number + halfsteps_up, self.amplitude, self.reference)
    }

    /// Sine samples over an externally supplied time axis: sample `i` is
    /// `amplitude * sin(2π · frequency · time_axis[i])`.
    pub fn signal_samples(&self, time_axis: &[f64]) -> Vec<f64> {
        time_axis
            .iter()
            .map(|&t| self.amplitude * (2.0 * PI * self.frequency * t).sin())
            .collect()
    }

    /// Time axis and signal for `length` seconds. A `None` rate resolves
    /// against the process-wide default at call time.
    pub fn arrays(&self, length: f64, rate: Option<u32>) -> (Vec<f64>, Vec<f64>) {
        let rate = rate.unwrap_or_else(config::default_rate);
        let time = time_axis(length, rate);
        let signal = self.signal_samples(&time);
        (time, signal)
    }

    /// Render, normalize, and wrap as a playable audio embed.
    pub fn embed(&self, length: f64, rate: Option<u32>) -> AudioEmbed {
        let rate = rate.unwrap_or_else(config::default_rate);
        let (_, signal) = self.arrays(length, Some(rate));
        AudioEmbed::from_samples(&normalize(&signal), rate)
    }

    /// Render, normalize, and play through the default audio device,
    /// blocking until playback completes.
    #[cfg(feature = "playback")]
    pub fn play(
        &self,
        length: f64,
        rate: Option<u32>,
    ) -> Result<(), crate::playback::PlaybackError> {
        let rate = rate.unwrap_or_else(config::default_rate);
        let (_, signal) = self.arrays(length, Some(rate));
        crate::playback::play_buffer(&normalize(&signal), rate)
    }
}
