//! Form controller use case
//!
//! Wires blur and submit handling: validates fields, reflects results into
//! the document through the annotation presenter, and requests audio cues.
//! Owns the submission session state machine; per-field cues are suppressed
//! while a whole-form pass is in progress.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::{CueStyle, DEFAULT_ERROR_CLIP, DEFAULT_SUCCESS_CLIP};
use crate::domain::session::{FormSession, FormState, InvalidStateTransition};
use crate::domain::validation;

use super::annotate;
use super::ports::{AudioCue, CueKind, FieldHandle, FormDocument};

/// Content shown when a form submits with no validation errors
pub const SUBMITTED_MESSAGE: &str = "Form submitted with no validation errors!";

/// Errors from the form controller
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Invalid state transition: {0}")]
    InvalidState(#[from] InvalidStateTransition),

    #[error("Unknown field: {0}")]
    UnknownField(FieldHandle),
}

/// Configuration for the controller's audio feedback
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Synthesized tones or pre-recorded clips
    pub cue_style: CueStyle,
    /// Clip played on validation failure (clip style only)
    pub error_clip: PathBuf,
    /// Clip played on success (clip style only)
    pub success_clip: PathBuf,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            cue_style: CueStyle::Synth,
            error_clip: PathBuf::from(DEFAULT_ERROR_CLIP),
            success_clip: PathBuf::from(DEFAULT_SUCCESS_CLIP),
        }
    }
}

/// Result of handling a blur event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlurOutcome {
    /// The form is not marked for validation
    Skipped,
    /// The field validated cleanly
    Valid,
    /// The field failed validation
    Invalid { message: String },
}

/// One invalid field found during a submit pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldHandle,
    pub identifier: Option<String>,
    pub message: String,
}

/// Result of handling a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is not marked for validation
    Skipped,
    /// Validation errors were found; submission did not happen
    Rejected {
        errors: Vec<FieldError>,
        /// First invalid field in document order, which received focus
        focused: FieldHandle,
    },
    /// The form submitted; the document now shows the confirmation content
    Submitted,
}

/// Form controller use case
pub struct FormController<D, A>
where
    D: FormDocument,
    A: AudioCue,
{
    document: D,
    audio: A,
    session: FormSession,
    config: ControllerConfig,
}

impl<D, A> FormController<D, A>
where
    D: FormDocument,
    A: AudioCue,
{
    /// Create a controller for a document, taking over validation from the
    /// environment
    pub fn new(mut document: D, audio: A, config: ControllerConfig) -> Self {
        document.disable_native_validation();
        Self {
            document,
            audio,
            session: FormSession::new(),
            config,
        }
    }

    /// Access the underlying document
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable access to the underlying document
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Current session state
    pub fn state(&self) -> FormState {
        self.session.state()
    }

    /// Handle a blur event on one field.
    ///
    /// Invalid fields get their error shown and an error cue; valid fields
    /// get a success cue and any stale error cleared. Cues are skipped while
    /// a submission pass is in progress.
    pub async fn handle_blur(&mut self, field: FieldHandle) -> Result<BlurOutcome, ControllerError> {
        if !self.document.has_validate_marker() {
            return Ok(BlurOutcome::Skipped);
        }

        let snapshot = self
            .document
            .snapshot(field)
            .ok_or(ControllerError::UnknownField(field))?;

        self.session.begin_field_validation()?;

        let outcome = match validation::validate(&snapshot) {
            Some(message) => {
                annotate::show_error(&mut self.document, field, &message);
                if !self.session.is_submitting() {
                    self.play_cue(CueKind::Error).await;
                }
                BlurOutcome::Invalid { message }
            }
            None => {
                if !self.session.is_submitting() {
                    self.play_cue(CueKind::Success).await;
                }
                annotate::clear_error(&mut self.document, field);
                BlurOutcome::Valid
            }
        };

        self.session.finish_field_validation()?;
        Ok(outcome)
    }

    /// Handle a submit event on the whole form.
    ///
    /// Validates every field in document order, showing errors for each
    /// invalid one. With errors the submission is rejected and the first
    /// invalid field focused; without, the document content is replaced with
    /// the confirmation message and the session ends in the terminal
    /// submitted state.
    pub async fn handle_submit(&mut self) -> Result<SubmitOutcome, ControllerError> {
        if !self.document.has_validate_marker() {
            return Ok(SubmitOutcome::Skipped);
        }

        self.session.begin_submission()?;

        // First error wins the focus; later errors are still shown
        let mut errors = Vec::new();
        for handle in self.document.field_handles() {
            let Some(snapshot) = self.document.snapshot(handle) else {
                continue;
            };
            if let Some(message) = validation::validate(&snapshot) {
                annotate::show_error(&mut self.document, handle, &message);
                errors.push(FieldError {
                    field: handle,
                    identifier: snapshot.identifier().map(str::to_owned),
                    message,
                });
            }
        }

        if let Some(first) = errors.first() {
            let focused = first.field;
            self.document.focus(focused);
            self.play_cue(CueKind::Error).await;
            self.session.reject_submission()?;
            Ok(SubmitOutcome::Rejected { errors, focused })
        } else {
            self.play_cue(CueKind::Success).await;
            self.document.replace_content(SUBMITTED_MESSAGE);
            self.session.complete_submission()?;
            Ok(SubmitOutcome::Submitted)
        }
    }

    /// Request a cue in the configured style. Audio failures degrade to
    /// silence with a warning; they never fail the handler.
    async fn play_cue(&self, kind: CueKind) {
        let result = match self.config.cue_style {
            CueStyle::Synth => self.audio.play(kind).await,
            CueStyle::Clip => {
                let clip = match kind {
                    CueKind::Error => &self.config.error_clip,
                    CueKind::Success => &self.config.success_clip,
                };
                self.audio.play_clip(clip).await
            }
        };

        if let Err(e) = result {
            eprintln!("Warning: audio cue failed: {}", e);
        }
    }
}
