//! Application configuration value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidCueStyleError;

/// Default audio clip locations, matching the asset layout the clip style
/// expects next to the form document
pub const DEFAULT_ERROR_CLIP: &str = "assets/error.mp3";
pub const DEFAULT_SUCCESS_CLIP: &str = "assets/success.mp3";

/// Which of the two feedback implementations to use: synthesized tones or
/// pre-recorded clips. They are alternatives, never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CueStyle {
    #[default]
    Synth,
    Clip,
}

impl CueStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Synth => "synth",
            Self::Clip => "clip",
        }
    }
}

impl fmt::Display for CueStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CueStyle {
    type Err = InvalidCueStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synth" => Ok(Self::Synth),
            "clip" => Ok(Self::Clip),
            _ => Err(InvalidCueStyleError {
                input: s.to_string(),
            }),
        }
    }
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub audio: Option<bool>,
    pub cue_style: Option<String>,
    pub error_clip: Option<String>,
    pub success_clip: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            audio: Some(true),
            cue_style: Some(CueStyle::Synth.to_string()),
            error_clip: Some(DEFAULT_ERROR_CLIP.to_string()),
            success_clip: Some(DEFAULT_SUCCESS_CLIP.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            audio: other.audio.or(self.audio),
            cue_style: other.cue_style.or(self.cue_style),
            error_clip: other.error_clip.or(self.error_clip),
            success_clip: other.success_clip.or(self.success_clip),
        }
    }

    /// Get audio setting, or true if not set
    pub fn audio_or_default(&self) -> bool {
        self.audio.unwrap_or(true)
    }

    /// Get cue style as parsed CueStyle, or synth if not set/invalid
    pub fn cue_style_or_default(&self) -> CueStyle {
        self.cue_style
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get error clip path, or the default asset path if not set
    pub fn error_clip_or_default(&self) -> &str {
        self.error_clip.as_deref().unwrap_or(DEFAULT_ERROR_CLIP)
    }

    /// Get success clip path, or the default asset path if not set
    pub fn success_clip_or_default(&self) -> &str {
        self.success_clip.as_deref().unwrap_or(DEFAULT_SUCCESS_CLIP)
    }
}
