pub mod config;
pub mod dsp;
pub mod error;
pub mod pitch;
#[cfg(feature = "playback")]
pub mod playback;
pub mod preset;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dsp::chord::Chord;
use crate::dsp::normalize::normalize;
use crate::dsp::renderer::encode_wav;
use crate::dsp::tone::Tone;
use crate::error::ToneError;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the tonegen-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Build a default tone from a tone name like `"a4"` or `"c#3"`.
pub fn tone(name: &str) -> Result<Tone, ToneError> {
    Tone::from_name(name)
}

/// Build a chord of default tones from tone names.
pub fn chord(names: &[&str]) -> Result<Chord, ToneError> {
    Chord::from_names(names)
}

/// WASM-exposed: frequency in hertz of a named tone under the current
/// tuning.
#[wasm_bindgen]
pub fn tone_frequency(name: &str) -> Result<f64, JsValue> {
    let t = tone(name).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(t.frequency)
}

/// WASM-exposed: render a named tone to normalized mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_tone_samples(
    name: &str,
    length: f64,
    sample_rate: u32,
) -> Result<Vec<f32>, JsValue> {
    let t = tone(name).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let (_, signal) = t.arrays(length, Some(sample_rate));
    Ok(normalize(&signal).iter().map(|&s| s as f32).collect())
}

/// WASM-exposed: render a named tone to a WAV byte array.
#[wasm_bindgen]
pub fn render_tone_wav(name: &str, length: f64, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    let t = tone(name).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let (_, signal) = t.arrays(length, Some(sample_rate));
    Ok(encode_wav(&normalize(&signal), sample_rate))
}

/// WASM-exposed: render whitespace-separated tone names as one chord to
/// a WAV byte array.
#[wasm_bindgen]
pub fn render_chord_wav(names: &str, length: f64, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    let names: Vec<&str> = names.split_whitespace().collect();
    let c = chord(&names).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let (_, signal) = c.arrays(length, Some(sample_rate));
    Ok(encode_wav(&normalize(&signal), sample_rate))
}

/// Rendered arrays handed back to JS as `{ time, signal }`.
#[derive(Serialize)]
struct RenderedArrays {
    time: Vec<f64>,
    signal: Vec<f64>,
}

/// WASM-exposed: render a chord preset (JSON, see `preset`) to its time
/// and signal arrays.
#[wasm_bindgen]
pub fn render_chord_preset(
    json: &str,
    length: f64,
    sample_rate: u32,
) -> Result<JsValue, JsValue> {
    let spec =
        preset::ChordSpec::from_json(json).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let c = spec.build().map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let (time, signal) = c.arrays(length, Some(sample_rate));
    serde_wasm_bindgen::to_value(&RenderedArrays { time, signal })
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: reassign the process-wide default sample rate.
#[wasm_bindgen]
pub fn set_default_sample_rate(rate: u32) {
    config::set_default_rate(rate);
}

/// WASM-exposed: reassign the process-wide reference-number offset.
/// Tones constructed before the call keep their frequency.
#[wasm_bindgen]
pub fn set_tuning_offset(offset: f64) {
    config::set_reference_number(offset);
}
