//! Domain error types

use thiserror::Error;

/// Error when an unknown field type string is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid field type: \"{input}\". Valid types are: text, email, url, tel, password, number, checkbox, radio, select, textarea, file, submit, reset, button")]
pub struct InvalidFieldKindError {
    pub input: String,
}

/// Error when an unknown cue style string is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid cue style: \"{input}\". Valid styles are: synth, clip")]
pub struct InvalidCueStyleError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
