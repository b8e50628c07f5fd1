//! Chord — additive combination of tones over a shared time axis.

use crate::config;
use crate::error::ToneError;

use super::axis::time_axis;
use super::normalize::normalize;
use super::renderer::AudioEmbed;
use super::tone::Tone;

/// A non-empty ordered collection of tones. The waveform is the
/// sample-wise sum of every tone's signal over one shared time axis,
/// accumulated in input order so float rounding is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    tones: Vec<Tone>,
}

impl Chord {
    pub fn new(tones: Vec<Tone>) -> Result<Self, ToneError> {
        if tones.is_empty() {
            return Err(ToneError::EmptyChord);
        }
        Ok(Chord { tones })
    }

    /// Build a chord of default tones from tone names.
    pub fn from_names(names: &[&str]) -> Result<Self, ToneError> {
        let tones = names
            .iter()
            .map(|name| Tone::from_name(name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tones)
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Shared time axis and summed signal for `length` seconds. A `None`
    /// rate resolves against the process-wide default at call time.
    pub fn arrays(&self, length: f64, rate: Option<u32>) -> (Vec<f64>, Vec<f64>) {
        let rate = rate.unwrap_or_else(config::default_rate);
        let time = time_axis(length, rate);

        let mut sum = vec![0.0; time.len()];
        for tone in &self.tones {
            for (acc, sample) in sum.iter_mut().zip(tone.signal_samples(&time)) {
                *acc += sample;
            }
        }

        (time, sum)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_chord_is_rejected() {
        assert_eq!(Chord::new(Vec::new()), Err(ToneError::EmptyChord));
    }

    #[test]
    fn single_tone_chord_is_fine() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        let chord = Chord::new(vec![Tone::new(0.0)]).unwrap();
        assert_eq!(chord.tones().len(), 1);
    }

    #[test]
    fn signal_is_elementwise_sum() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        let root = Tone::new(0.0);
        let third = Tone::new(4.0);
        let chord = Chord::new(vec![root, third]).unwrap();

        let (time, summed) = chord.arrays(0.01, Some(8_000));
        let a = root.signal_samples(&time);
        let b = third.signal_samples(&time);

        assert_eq!(summed.len(), time.len());
        for i in 0..summed.len() {
            assert!(
                (summed[i] - (a[i] + b[i])).abs() < 1e-12,
                "sample {i} diverges"
            );
        }
    }

    #[test]
    fn amplitudes_weight_the_sum() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        let loud = Tone::with_params(0.0, 2.0, 440.0);
        let quiet = Tone::with_params(0.0, 0.5, 440.0);
        let chord = Chord::new(vec![loud, quiet]).unwrap();

        let (time, summed) = chord.arrays(0.005, Some(8_000));
        // Same pitch, so the chord is the single waveform at amplitude 2.5
        let unit = Tone::with_params(0.0, 1.0, 440.0).signal_samples(&time);
        for i in 0..summed.len() {
            assert!((summed[i] - 2.5 * unit[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn from_names_builds_in_order() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        let chord = Chord::from_names(&["c4", "e4", "g4"]).unwrap();
        let numbers: Vec<f64> = chord.tones().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![-9.0, -5.0, -2.0]);
        assert!(Chord::from_names(&["c4", "q4"]).is_err());
    }

    #[test]
    fn shared_axis_matches_tone_axis() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        let chord = Chord::from_names(&["a4"]).unwrap();
        let (chord_time, _) = chord.arrays(0.25, Some(4_000));
        let (tone_time, _) = Tone::new(0.0).arrays(0.25, Some(4_000));
        assert_eq!(chord_time, tone_time);
    }
}
