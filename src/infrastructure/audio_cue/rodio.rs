//! Rodio-based audio cue adapter
//!
//! Synthesizes the success and error sweeps and decodes pre-recorded clips.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::application::ports::{AudioCue, AudioCueError, CueKind};

/// Output amplitude for synthesized tones
const AMP: f32 = 0.3;

/// Gain envelopes decay to this fraction of full amplitude
const GAIN_FLOOR: f32 = 0.01;

/// Quality factor of the success sweep's bandpass stage. Very low, so the
/// band is wide and the stage only softens the tone.
const SUCCESS_FILTER_Q: f32 = 0.01;

const SAMPLE_RATE: u32 = 44_100;

/// Audio cue implementation using rodio
pub struct RodioAudioCue;

impl RodioAudioCue {
    /// Create a new rodio-based audio cue
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for RodioAudioCue {
    async fn play(&self, kind: CueKind) -> Result<(), AudioCueError> {
        // Run audio playback in blocking thread to avoid blocking the async runtime
        tokio::task::spawn_blocking(move || play_cue_sync(kind))
            .await
            .map_err(|e| AudioCueError::PlaybackFailed(format!("Task join error: {}", e)))?
    }

    async fn play_clip(&self, path: &Path) -> Result<(), AudioCueError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AudioCueError::ClipUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || play_clip_sync(&path, bytes))
            .await
            .map_err(|e| AudioCueError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

/// A sine tone whose frequency ramps exponentially through two segments
/// while its gain decays exponentially, stopping hard after `duration`.
struct SweptTone {
    position: u64,
    total_samples: u64,
    phase: f32,
    start_hz: f32,
    mid_hz: f32,
    end_hz: f32,
    first_ramp_secs: f32,
    second_ramp_secs: f32,
    decay_secs: f32,
}

impl SweptTone {
    fn new(
        start_hz: f32,
        mid_hz: f32,
        end_hz: f32,
        first_ramp_secs: f32,
        second_ramp_secs: f32,
        duration_secs: f32,
        decay_secs: f32,
    ) -> Self {
        Self {
            position: 0,
            total_samples: (duration_secs * SAMPLE_RATE as f32) as u64,
            phase: 0.0,
            start_hz,
            mid_hz,
            end_hz,
            first_ramp_secs,
            second_ramp_secs,
            decay_secs,
        }
    }

    /// Rising success sweep: 600 -> 800 Hz by 0.05 s, -> 1000 Hz by 0.15 s,
    /// audible for 0.2 s over a 0.3 s gain decay
    fn success() -> Self {
        Self::new(600.0, 800.0, 1000.0, 0.05, 0.15, 0.2, 0.3)
    }

    /// Falling error sweep: 400 -> 200 Hz by 0.05 s, -> 100 Hz by 0.2 s,
    /// audible for 0.3 s
    fn error() -> Self {
        Self::new(400.0, 200.0, 100.0, 0.05, 0.2, 0.3, 0.3)
    }

    fn frequency_at(&self, t: f32) -> f32 {
        if t <= self.first_ramp_secs {
            exp_ramp(self.start_hz, self.mid_hz, t / self.first_ramp_secs)
        } else if t <= self.second_ramp_secs {
            let span = self.second_ramp_secs - self.first_ramp_secs;
            exp_ramp(self.mid_hz, self.end_hz, (t - self.first_ramp_secs) / span)
        } else {
            self.end_hz
        }
    }

    fn gain_at(&self, t: f32) -> f32 {
        GAIN_FLOOR.powf(t / self.decay_secs)
    }
}

/// Exponential interpolation from `from` to `to`, progress in 0..=1
fn exp_ramp(from: f32, to: f32, progress: f32) -> f32 {
    from * (to / from).powf(progress)
}

impl Iterator for SweptTone {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total_samples {
            return None;
        }
        let t = self.position as f32 / SAMPLE_RATE as f32;
        self.phase += std::f32::consts::TAU * self.frequency_at(t) / SAMPLE_RATE as f32;
        self.position += 1;
        Some(self.phase.sin() * self.gain_at(t) * AMP)
    }
}

impl Source for SweptTone {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f32(
            self.total_samples as f32 / SAMPLE_RATE as f32,
        ))
    }
}

/// RBJ bandpass biquad over a mono source
struct Bandpass<S> {
    inner: S,
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl<S: Source<Item = f32>> Bandpass<S> {
    fn new(inner: S, center_hz: f32, q: f32) -> Self {
        let w0 = std::f32::consts::TAU * center_hz / inner.sample_rate() as f32;
        let alpha = w0.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;
        Self {
            inner,
            b0: alpha / a0,
            b1: 0.0,
            b2: -alpha / a0,
            a1: -2.0 * w0.cos() / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }
}

impl<S: Source<Item = f32>> Iterator for Bandpass<S> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let x0 = self.inner.next()?;
        let y0 = self.b0 * x0 + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;
        Some(y0)
    }
}

impl<S: Source<Item = f32>> Source for Bandpass<S> {
    fn current_frame_len(&self) -> Option<usize> {
        self.inner.current_frame_len()
    }

    fn channels(&self) -> u16 {
        self.inner.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.inner.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.inner.total_duration()
    }
}

/// Play a synthesized cue synchronously (called from spawn_blocking)
fn play_cue_sync(kind: CueKind) -> Result<(), AudioCueError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;

    match kind {
        CueKind::Success => {
            let tone = SweptTone::success();
            let center = tone.end_hz;
            sink.append(Bandpass::new(tone, center, SUCCESS_FILTER_Q));
        }
        CueKind::Error => {
            sink.append(SweptTone::error());
        }
    }

    // Wait for playback to complete
    sink.sleep_until_end();

    Ok(())
}

/// Decode and play a clip synchronously (called from spawn_blocking)
fn play_clip_sync(path: &Path, bytes: Vec<u8>) -> Result<(), AudioCueError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| AudioCueError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| AudioCueError::PlaybackFailed(e.to_string()))?;

    let source = Decoder::new(Cursor::new(bytes)).map_err(|e| AudioCueError::ClipUndecodable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    sink.append(source);
    sink.sleep_until_end();

    Ok(())
}
