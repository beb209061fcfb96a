//! Document infrastructure adapters

mod memory;

pub use memory::{FieldSpec, MemoryForm, ERROR_MARKER_CLASS};
