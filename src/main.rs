//! FormCue CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use formcue::cli::{
    app::{load_merged_config, run, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use formcue::domain::config::AppConfig;
use formcue::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(form) = cli.form else {
        presenter.error("Missing form document path (see --help)");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        audio: if cli.no_audio { Some(false) } else { None },
        cue_style: if cli.clips {
            Some("clip".to_string())
        } else {
            None
        },
        error_clip: None,
        success_clip: None,
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = RunOptions {
        form,
        field: cli.field,
        audio: config.audio_or_default(),
        cue_style: config.cue_style_or_default(),
        error_clip: PathBuf::from(config.error_clip_or_default()),
        success_clip: PathBuf::from(config.success_clip_or_default()),
    };

    run(options).await
}
