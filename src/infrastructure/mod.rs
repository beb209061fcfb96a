//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with rodio, the filesystem, and the in-memory document.

pub mod audio_cue;
pub mod config;
pub mod document;

// Re-export adapters
pub use audio_cue::{create_audio_cue, NoOpAudioCue, RodioAudioCue};
pub use config::XdgConfigStore;
pub use document::{FieldSpec, MemoryForm};
