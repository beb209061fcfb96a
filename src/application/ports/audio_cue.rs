//! Audio cue port for playing sound feedback
//!
//! Provides audible feedback when a field validates or a form is submitted.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Types of audio cues that can be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueKind {
    /// Rising sweep played when a field or form validates cleanly
    /// (600 Hz ramping to 1 kHz over 0.2 s)
    Success,
    /// Falling sweep played when validation fails
    /// (400 Hz ramping down to 100 Hz over 0.3 s)
    Error,
}

/// Errors that can occur during audio cue playback
#[derive(Error, Debug)]
pub enum AudioCueError {
    /// Failed to play the audio cue
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// Could not read the clip file
    #[error("Failed to read audio clip {path}: {message}")]
    ClipUnreadable { path: PathBuf, message: String },

    /// Clip bytes did not decode as audio
    #[error("Failed to decode audio clip {path}: {message}")]
    ClipUndecodable { path: PathBuf, message: String },
}

/// Port trait for audio cue playback
#[async_trait]
pub trait AudioCue: Send + Sync {
    /// Synthesize and play a cue tone
    async fn play(&self, kind: CueKind) -> Result<(), AudioCueError>;

    /// Read, decode, and play a pre-recorded clip once
    async fn play_clip(&self, path: &Path) -> Result<(), AudioCueError>;
}

#[async_trait]
impl AudioCue for Box<dyn AudioCue> {
    async fn play(&self, kind: CueKind) -> Result<(), AudioCueError> {
        (**self).play(kind).await
    }

    async fn play_clip(&self, path: &Path) -> Result<(), AudioCueError> {
        (**self).play_clip(path).await
    }
}
