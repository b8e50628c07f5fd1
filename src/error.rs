use std::fmt;

/// Errors surfaced by the tone core. All failures are immediate and
/// synchronous; there is no retry or recovery layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ToneError {
    /// Tone-name prefix (everything before the octave digit) is not a
    /// recognized pitch name.
    UnknownPitch { name: String },
    /// Trailing character of a tone name is not an octave digit.
    InvalidOctave { name: String },
    /// Chord constructed with zero tones.
    EmptyChord,
    /// Malformed preset JSON, or a tone descriptor with neither a name
    /// nor a semitone number.
    Preset { message: String },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::UnknownPitch { name } => {
                write!(f, "Unknown pitch name in '{name}'")
            }
            ToneError::InvalidOctave { name } => {
                write!(f, "Tone name '{name}' does not end in an octave digit")
            }
            ToneError::EmptyChord => write!(f, "Chord can not be empty"),
            ToneError::Preset { message } => write!(f, "Invalid preset: {message}"),
        }
    }
}

impl std::error::Error for ToneError {}

impl From<serde_json::Error> for ToneError {
    fn from(e: serde_json::Error) -> Self {
        ToneError::Preset {
            message: e.to_string(),
        }
    }
}
