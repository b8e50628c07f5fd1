//! JSON descriptors for tones and chords.
//!
//! A chord can be described as data and rebuilt anywhere the crate runs:
//!
//! ```json
//! { "tones": [ { "name": "c4" },
//!              { "name": "e4", "amplitude": 0.8 },
//!              { "number": -2.0, "reference": 432.0 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::dsp::chord::Chord;
use crate::dsp::tone::Tone;
use crate::error::ToneError;
use crate::pitch::parse_tone_name;

fn default_amplitude() -> f64 {
    1.0
}

fn default_reference() -> f64 {
    440.0
}

/// One tone in a chord preset. The pitch comes from `name` (a tone-name
/// string) or, when no name is given, from `number` (an explicit
/// semitone offset). Amplitude and reference fall back to the Tone
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    #[serde(default = "default_reference")]
    pub reference: f64,
}

impl ToneSpec {
    /// Build the described tone. `name` wins when both fields are
    /// present; neither present is a preset error.
    pub fn build(&self) -> Result<Tone, ToneError> {
        let number = match (&self.name, self.number) {
            (Some(name), _) => parse_tone_name(name)?,
            (None, Some(number)) => number,
            (None, None) => {
                return Err(ToneError::Preset {
                    message: "tone needs a name or a number".to_string(),
                });
            }
        };
        Ok(Tone::with_params(number, self.amplitude, self.reference))
    }
}

/// A chord described as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordSpec {
    pub tones: Vec<ToneSpec>,
}

impl ChordSpec {
    pub fn from_json(json: &str) -> Result<Self, ToneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ToneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build every tone, then the chord. An empty `tones` list surfaces
    /// the chord's own validation error.
    pub fn build(&self) -> Result<Chord, ToneError> {
        let tones = self
            .tones
            .iter()
            .map(ToneSpec::build)
            .collect::<Result<Vec<_>, _>>()?;
        Chord::new(tones)
    }
}
