//! Main app runner

use std::process::ExitCode;

use crate::application::ports::{AudioCue, ConfigStore, FormDocument};
use crate::application::{BlurOutcome, ControllerConfig, FormController, SubmitOutcome};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_audio_cue, MemoryForm, XdgConfigStore};

use super::args::RunOptions;
use super::form_file;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

type AppController = FormController<MemoryForm, Box<dyn AudioCue>>;

/// Load a form document and run one validation pass over it
pub async fn run(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();

    let form = match form_file::load_form(&options.form).await {
        Ok(form) => form,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let audio = create_audio_cue(options.audio);
    let config = ControllerConfig {
        cue_style: options.cue_style,
        error_clip: options.error_clip.clone(),
        success_clip: options.success_clip.clone(),
    };
    let mut controller = FormController::new(form, audio, config);

    match options.field {
        Some(ref identifier) => run_blur(&mut controller, identifier, &presenter).await,
        None => run_submit(&mut controller, &presenter).await,
    }
}

/// Validate a single field, as a blur event would
async fn run_blur(
    controller: &mut AppController,
    identifier: &str,
    presenter: &Presenter,
) -> ExitCode {
    let Some(field) = controller.document().find_field(identifier) else {
        presenter.error(&format!("No field with id or name \"{}\"", identifier));
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    match controller.handle_blur(field).await {
        Ok(BlurOutcome::Skipped) => {
            presenter.warn("Form is not marked for validation; nothing to do");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(BlurOutcome::Valid) => {
            presenter.success(&format!("{} is valid", identifier));
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(BlurOutcome::Invalid { message }) => {
            presenter.field_error(identifier, &message);
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Validate the whole form, as a submit event would
async fn run_submit(controller: &mut AppController, presenter: &Presenter) -> ExitCode {
    match controller.handle_submit().await {
        Ok(SubmitOutcome::Skipped) => {
            presenter.warn("Form is not marked for validation; nothing to do");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(SubmitOutcome::Rejected { errors, focused }) => {
            for error in &errors {
                let label = error.identifier.as_deref().unwrap_or("(unnamed field)");
                presenter.field_error(label, &error.message);
            }
            let focus_label = controller
                .document()
                .snapshot(focused)
                .and_then(|s| s.identifier().map(str::to_owned));
            if let Some(label) = focus_label {
                presenter.info(&format!("Focus moved to \"{}\"", label));
            }
            ExitCode::from(EXIT_ERROR)
        }
        Ok(SubmitOutcome::Submitted) => {
            if let Some(content) = controller.document().replaced_content() {
                presenter.output(content);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}
