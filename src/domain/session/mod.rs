//! Form submission session state machine

use std::fmt;
use thiserror::Error;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormState {
    #[default]
    Idle,
    ValidatingField,
    ValidatingForm,
    Submitted,
}

impl FormState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ValidatingField => "validating-field",
            Self::ValidatingForm => "validating-form",
            Self::Submitted => "submitted",
        }
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: FormState,
    pub action: String,
}

/// Form session entity.
/// Replaces the page-wide submission-in-progress flag with explicit
/// transitions.
///
/// State machine:
///   IDLE -> VALIDATING_FIELD (begin_field_validation, on blur)
///   VALIDATING_FIELD -> IDLE (finish_field_validation)
///   IDLE -> VALIDATING_FORM (begin_submission, on submit)
///   VALIDATING_FORM -> IDLE (reject_submission, validation errors found)
///   VALIDATING_FORM -> SUBMITTED (complete_submission, terminal)
#[derive(Debug, Default)]
pub struct FormSession {
    state: FormState,
}

impl FormSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.state == FormState::Idle
    }

    /// True while a whole-form validation pass is in progress.
    /// Per-field audio cues are suppressed while this holds.
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::ValidatingForm
    }

    /// Check if the terminal submitted state was reached
    pub fn is_submitted(&self) -> bool {
        self.state == FormState::Submitted
    }

    /// Transition from IDLE to VALIDATING_FIELD
    pub fn begin_field_validation(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != FormState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "validate a field".to_string(),
            });
        }
        self.state = FormState::ValidatingField;
        Ok(())
    }

    /// Transition from VALIDATING_FIELD back to IDLE
    pub fn finish_field_validation(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != FormState::ValidatingField {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish field validation".to_string(),
            });
        }
        self.state = FormState::Idle;
        Ok(())
    }

    /// Transition from IDLE to VALIDATING_FORM
    pub fn begin_submission(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != FormState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "begin submission".to_string(),
            });
        }
        self.state = FormState::ValidatingForm;
        Ok(())
    }

    /// Transition from VALIDATING_FORM back to IDLE (errors found)
    pub fn reject_submission(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != FormState::ValidatingForm {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "reject submission".to_string(),
            });
        }
        self.state = FormState::Idle;
        Ok(())
    }

    /// Transition from VALIDATING_FORM to the terminal SUBMITTED state
    pub fn complete_submission(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != FormState::ValidatingForm {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "complete submission".to_string(),
            });
        }
        self.state = FormState::Submitted;
        Ok(())
    }
}
