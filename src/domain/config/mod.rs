//! Configuration value objects

mod app_config;

pub use app_config::{AppConfig, CueStyle, DEFAULT_ERROR_CLIP, DEFAULT_SUCCESS_CLIP};
