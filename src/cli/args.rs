//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::CueStyle;

/// FormCue - form validation with audible feedback
#[derive(Parser, Debug)]
#[command(name = "formcue")]
#[command(version)]
#[command(about = "Validate form documents with audible feedback cues")]
#[command(long_about = None)]
pub struct Cli {
    /// Form document (TOML) to validate
    #[arg(value_name = "FORM")]
    pub form: Option<PathBuf>,

    /// Validate a single field by id or name (blur) instead of submitting
    #[arg(short = 'f', long, value_name = "FIELD")]
    pub field: Option<String>,

    /// Disable audio cues
    #[arg(short = 'q', long)]
    pub no_audio: bool,

    /// Play the configured audio clips instead of synthesized tones
    #[arg(long)]
    pub clips: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed run options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub form: PathBuf,
    pub field: Option<String>,
    pub audio: bool,
    pub cue_style: CueStyle,
    pub error_clip: PathBuf,
    pub success_clip: PathBuf,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["audio", "cue_style", "error_clip", "success_clip"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["formcue"]);
        assert!(cli.form.is_none());
        assert!(cli.field.is_none());
        assert!(!cli.no_audio);
        assert!(!cli.clips);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_form_path() {
        let cli = Cli::parse_from(["formcue", "contact.toml"]);
        assert_eq!(cli.form, Some(PathBuf::from("contact.toml")));
    }

    #[test]
    fn cli_parses_blur_field() {
        let cli = Cli::parse_from(["formcue", "contact.toml", "--field", "email"]);
        assert_eq!(cli.field.as_deref(), Some("email"));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["formcue", "contact.toml", "-q", "--clips"]);
        assert!(cli.no_audio);
        assert!(cli.clips);
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["formcue", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["formcue", "config", "set", "cue_style", "clip"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "cue_style");
            assert_eq!(value, "clip");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("audio"));
        assert!(is_valid_config_key("cue_style"));
        assert!(is_valid_config_key("error_clip"));
        assert!(is_valid_config_key("success_clip"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
