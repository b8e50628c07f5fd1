//! Pitch names and equal-temperament frequency math.
//!
//! A tone name is a pitch letter `a`–`g` (case-insensitive), an optional
//! accidental (`#` or `b`), and one trailing octave digit: `"a4"`,
//! `"c#3"`, `"bb5"`. Parsing yields a semitone offset where `a4` is zero
//! (before the process-wide reference-number offset is applied). Only
//! single-digit octaves are expressible; `"a10"` fails the name lookup
//! because the extra digit lands in the pitch-name prefix.

use crate::config;
use crate::error::ToneError;

/// Within-octave semitone offset relative to A, for the 17 recognized
/// pitch-name spellings.
fn pitch_offset(prefix: &str) -> Option<i32> {
    let offset = match prefix {
        "c" => -9,
        "c#" | "db" => -8,
        "d" => -7,
        "d#" | "eb" => -6,
        "e" => -5,
        "f" => -4,
        "f#" | "gb" => -3,
        "g" => -2,
        "g#" | "ab" => -1,
        "a" => 0,
        "a#" | "bb" => 1,
        "b" => 2,
        _ => return None,
    };
    Some(offset)
}

/// Parse a tone name into a semitone offset, with an explicit
/// reference-number offset added to the result.
///
/// The name lookup runs before the octave-digit check, so a name that is
/// bad on both counts reports the unknown pitch.
pub fn parse_tone_name_with(name: &str, reference_number: f64) -> Result<f64, ToneError> {
    let (split, last) = name
        .char_indices()
        .last()
        .ok_or_else(|| ToneError::UnknownPitch {
            name: name.to_string(),
        })?;

    let prefix = name[..split].to_lowercase();
    let offset = pitch_offset(&prefix).ok_or_else(|| ToneError::UnknownPitch {
        name: name.to_string(),
    })?;

    let octave = last.to_digit(10).ok_or_else(|| ToneError::InvalidOctave {
        name: name.to_string(),
    })? as i32;

    Ok(((octave - 4) * 12 + offset) as f64 + reference_number)
}

/// Parse a tone name against the current process-wide reference number.
pub fn parse_tone_name(name: &str) -> Result<f64, ToneError> {
    parse_tone_name_with(name, config::reference_number())
}

/// Equal-temperament frequency for a semitone offset.
///
/// `reference` is the frequency assigned to semitone zero;
/// `reference_number` shifts which offset counts as zero. Strictly
/// positive whenever `reference` is.
pub fn semitone_frequency(number: f64, reference: f64, reference_number: f64) -> f64 {
    reference * 2.0_f64.powf((number - reference_number) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_names() {
        assert_eq!(parse_tone_name_with("a4", 0.0).unwrap(), 0.0);
        assert_eq!(parse_tone_name_with("c4", 0.0).unwrap(), -9.0);
        assert_eq!(parse_tone_name_with("a5", 0.0).unwrap(), 12.0);
        assert_eq!(parse_tone_name_with("a3", 0.0).unwrap(), -12.0);
        assert_eq!(parse_tone_name_with("b4", 0.0).unwrap(), 2.0);
    }

    #[test]
    fn accidentals_and_enharmonics() {
        assert_eq!(parse_tone_name_with("c#4", 0.0).unwrap(), -8.0);
        assert_eq!(
            parse_tone_name_with("db4", 0.0).unwrap(),
            parse_tone_name_with("c#4", 0.0).unwrap()
        );
        assert_eq!(parse_tone_name_with("bb3", 0.0).unwrap(), -11.0);
        assert_eq!(parse_tone_name_with("gb2", 0.0).unwrap(), -27.0);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(parse_tone_name_with("A4", 0.0).unwrap(), 0.0);
        assert_eq!(parse_tone_name_with("Eb3", 0.0).unwrap(), -18.0);
        assert_eq!(parse_tone_name_with("F#5", 0.0).unwrap(), 9.0);
    }

    #[test]
    fn reference_number_shifts_result() {
        assert_eq!(parse_tone_name_with("a4", 2.0).unwrap(), 2.0);
        assert_eq!(parse_tone_name_with("c4", -1.5).unwrap(), -10.5);
    }

    #[test]
    fn unknown_pitch_names() {
        assert_eq!(
            parse_tone_name_with("x4", 0.0),
            Err(ToneError::UnknownPitch {
                name: "x4".to_string()
            })
        );
        // Single char leaves an empty prefix
        assert!(matches!(
            parse_tone_name_with("a", 0.0),
            Err(ToneError::UnknownPitch { .. })
        ));
        assert!(matches!(
            parse_tone_name_with("", 0.0),
            Err(ToneError::UnknownPitch { .. })
        ));
        // Two-digit octaves push a digit into the prefix
        assert!(matches!(
            parse_tone_name_with("a10", 0.0),
            Err(ToneError::UnknownPitch { .. })
        ));
    }

    #[test]
    fn non_digit_octave() {
        assert_eq!(
            parse_tone_name_with("a#", 0.0),
            Err(ToneError::InvalidOctave {
                name: "a#".to_string()
            })
        );
        assert!(matches!(
            parse_tone_name_with("ax", 0.0),
            Err(ToneError::InvalidOctave { .. })
        ));
    }

    #[test]
    fn parse_reads_global_reference_number() {
        let _guard = crate::config::TEST_LOCK.lock().unwrap();
        assert_eq!(parse_tone_name("a4").unwrap(), 0.0);
        crate::config::set_reference_number(3.0);
        assert_eq!(parse_tone_name("a4").unwrap(), 3.0);
        crate::config::set_reference_number(0.0);
    }

    #[test]
    fn frequency_of_reference_pitch() {
        assert_eq!(semitone_frequency(0.0, 440.0, 0.0), 440.0);
    }

    #[test]
    fn octave_doubles_frequency() {
        let up = semitone_frequency(12.0, 440.0, 0.0);
        let down = semitone_frequency(-12.0, 440.0, 0.0);
        assert!((up - 880.0).abs() / 880.0 < 1e-9, "got {up}");
        assert!((down - 220.0).abs() / 220.0 < 1e-9, "got {down}");
    }

    #[test]
    fn fractional_offsets_interpolate() {
        let halfway = semitone_frequency(0.5, 440.0, 0.0);
        assert!(halfway > 440.0 && halfway < semitone_frequency(1.0, 440.0, 0.0));
    }

    #[test]
    fn reference_number_offsets_formula() {
        // Shifting the zero point by an octave halves the pitch of offset 0
        let shifted = semitone_frequency(0.0, 440.0, 12.0);
        assert!((shifted - 220.0).abs() / 220.0 < 1e-9, "got {shifted}");
    }
}
