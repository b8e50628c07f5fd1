//! WAV rendering and notebook-style audio embeds.
//!
//! Rendered buffers leave the crate either as a WAV byte array or as an
//! HTML `<audio>` element carrying the WAV as a base64 data URI, ready
//! to drop into a notebook cell or web page.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode a mono sample buffer to a WAV byte buffer (16-bit PCM).
///
/// Callers are expected to pass normalized samples; anything outside
/// [-1, 1] is clamped before quantization.
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    let channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        let pcm = (sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16;
        buf.extend_from_slice(&pcm.to_le_bytes());
    }

    buf
}

/// A rendered, normalized buffer packaged for embedding. Returned by
/// `Tone::embed` and `Chord::embed`; building one never blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioEmbed {
    /// WAV byte buffer (16-bit mono PCM).
    pub wav: Vec<u8>,
    /// Sample rate the buffer was rendered at.
    pub rate: u32,
}

impl AudioEmbed {
    pub fn from_samples(samples: &[f64], rate: u32) -> Self {
        AudioEmbed {
            wav: encode_wav(samples, rate),
            rate,
        }
    }

    /// The WAV buffer as a `data:audio/wav;base64,` URI.
    pub fn data_uri(&self) -> String {
        format!("data:audio/wav;base64,{}", STANDARD.encode(&self.wav))
    }

    /// An `<audio>` element playing the buffer.
    pub fn html(&self) -> String {
        format!(
            "<audio controls autoplay src=\"{}\"></audio>",
            self.data_uri()
        )
    }
}
