//! Blocking playback through the default audio device.
//!
//! Only compiled with the `playback` feature; the rest of the crate has
//! no device dependency and runs on WASM targets.

use std::fmt;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStreamBuilder, Sink};

/// Failure to open or drive the audio device.
#[derive(Debug)]
pub enum PlaybackError {
    Stream(rodio::StreamError),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Stream(e) => write!(f, "Audio output stream error: {e}"),
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaybackError::Stream(e) => Some(e),
        }
    }
}

impl From<rodio::StreamError> for PlaybackError {
    fn from(e: rodio::StreamError) -> Self {
        PlaybackError::Stream(e)
    }
}

/// Play a mono buffer at the given sample rate, blocking the calling
/// thread until the device drains. Callers pass normalized samples;
/// this function applies no gain of its own.
pub fn play_buffer(samples: &[f64], rate: u32) -> Result<(), PlaybackError> {
    let stream = OutputStreamBuilder::open_default_stream()?;
    let sink = Sink::connect_new(stream.mixer());

    let data: Vec<f32> = samples.iter().map(|&s| s as f32).collect();
    sink.append(SamplesBuffer::new(1, rate, data));
    sink.sleep_until_end();

    Ok(())
}
