//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod annotate;
pub mod controller;
pub mod ports;

// Re-export use cases
pub use annotate::{annotation_id, clear_error, show_error};
pub use controller::{
    BlurOutcome, ControllerConfig, ControllerError, FieldError, FormController, SubmitOutcome,
    SUBMITTED_MESSAGE,
};
