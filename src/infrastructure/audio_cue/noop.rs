//! No-op audio cue adapter
//!
//! Used when audio cues are disabled.

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioCue, AudioCueError, CueKind};

/// No-op audio cue that does nothing
pub struct NoOpAudioCue;

impl NoOpAudioCue {
    /// Create a new no-op audio cue
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAudioCue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioCue for NoOpAudioCue {
    async fn play(&self, _kind: CueKind) -> Result<(), AudioCueError> {
        Ok(())
    }

    async fn play_clip(&self, _path: &Path) -> Result<(), AudioCueError> {
        Ok(())
    }
}
