//! FormCue - form validation with audible feedback
//!
//! This crate evaluates declarative field constraints for a form document,
//! renders inline error annotations with accessibility linkage, and plays a
//! short success or error cue on field blur and form submission.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Field model, validity evaluation, message derivation,
//!   submission state machine, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rodio cues, in-memory
//!   document, XDG config store)
//! - **CLI**: Command-line interface, form-file loading, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
