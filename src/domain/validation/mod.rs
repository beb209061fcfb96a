//! Constraint validation
//!
//! Reimplements the browser's constraint-validation flags over a field
//! snapshot, and derives the human-readable message for the highest-priority
//! failing constraint.

mod messages;
mod validity;

pub use messages::validate;
pub use validity::ValidityState;
