//! Form document port
//!
//! Abstracts "the form under validation and the elements within it" so the
//! engine can run against any document implementation, browser-backed or
//! in-memory.

use std::fmt;

use crate::domain::field::FieldSnapshot;

/// Stable handle to one field within a document. Handles stay valid across
/// annotation insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldHandle(pub u32);

impl fmt::Display for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field #{}", self.0)
    }
}

/// Where a newly created annotation node is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationAnchor {
    /// Immediately after the label associated with the field's identifier,
    /// falling back to immediately after the field when no label exists
    AfterLabel(FieldHandle),
    /// Immediately after the field itself
    AfterField(FieldHandle),
}

/// Port trait for the document holding the form under validation.
///
/// Annotation ids are deterministic per field identifier; a document holds at
/// most one annotation node per id. Mutations on unknown handles or ids are
/// no-ops.
pub trait FormDocument {
    /// Whether the form opted in to validation handling
    fn has_validate_marker(&self) -> bool;

    /// Turn off the environment's own validation UI, leaving this engine in
    /// sole control
    fn disable_native_validation(&mut self);

    /// All field handles in document order
    fn field_handles(&self) -> Vec<FieldHandle>;

    /// Capture a field's current state, or None for an unknown handle
    fn snapshot(&self, field: FieldHandle) -> Option<FieldSnapshot>;

    /// Handles of every radio field sharing this name within the form,
    /// in document order
    fn radio_group(&self, name: &str) -> Vec<FieldHandle>;

    /// Mark a field as errored
    fn add_error_marker(&mut self, field: FieldHandle);

    /// Remove a field's error marking
    fn remove_error_marker(&mut self, field: FieldHandle);

    /// Point the field's accessible description at an annotation
    fn set_description_link(&mut self, field: FieldHandle, annotation_id: &str);

    /// Remove the field's accessible description linkage
    fn clear_description_link(&mut self, field: FieldHandle);

    /// Whether an annotation node with this id exists
    fn has_annotation(&self, annotation_id: &str) -> bool;

    /// Create an annotation node at the given anchor position
    fn insert_annotation(&mut self, annotation_id: &str, anchor: AnnotationAnchor);

    /// Set an existing annotation's message text and visibility
    fn set_annotation(&mut self, annotation_id: &str, message: &str, visible: bool);

    /// Move focus to a field
    fn focus(&mut self, field: FieldHandle);

    /// Replace the entire document content with a message (terminal submit)
    fn replace_content(&mut self, message: &str);
}
