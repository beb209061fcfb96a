//! Error annotation presenter
//!
//! Reflects a validation result into the document: error markers on fields,
//! one annotation node per field identifier, and accessible description
//! linkage. Radio groups are treated as a unit, with the annotation anchored
//! to the last member in document order.

use crate::domain::field::FieldKind;

use super::ports::{AnnotationAnchor, FieldHandle, FormDocument};

/// Deterministic annotation id for a field identifier
pub fn annotation_id(identifier: &str) -> String {
    format!("error-for-{identifier}")
}

/// Show an error message for a field.
///
/// Marks the field (and, for a named radio, every same-name sibling in the
/// form), then locates or lazily creates the annotation node for the field's
/// identifier, links it as the field's accessible description, and fills in
/// the message. Fields with neither id nor name cannot be annotated and are
/// skipped after marking. Idempotent: repeat calls reuse the same node.
pub fn show_error<D: FormDocument + ?Sized>(document: &mut D, field: FieldHandle, message: &str) {
    document.add_error_marker(field);

    let Some(snapshot) = document.snapshot(field) else {
        return;
    };

    // A named radio errors as a group; the annotation anchors to the last
    // member in document order
    let mut anchor = field;
    let mut anchor_snapshot = snapshot;
    if anchor_snapshot.kind == FieldKind::Radio {
        if let Some(name) = anchor_snapshot.name.clone().filter(|n| !n.is_empty()) {
            let group = document.radio_group(&name);
            for member in &group {
                document.add_error_marker(*member);
            }
            if let Some(last) = group.last().copied() {
                if let Some(last_snapshot) = document.snapshot(last) {
                    anchor = last;
                    anchor_snapshot = last_snapshot;
                }
            }
        }
    }

    let Some(identifier) = anchor_snapshot.identifier().map(str::to_owned) else {
        return;
    };
    let id = annotation_id(&identifier);

    if !document.has_annotation(&id) {
        let position = if anchor_snapshot.kind.anchors_after_label() {
            AnnotationAnchor::AfterLabel(anchor)
        } else {
            AnnotationAnchor::AfterField(anchor)
        };
        document.insert_annotation(&id, position);
    }

    document.set_description_link(anchor, &id);
    document.set_annotation(&id, message, true);
}

/// Clear any error shown for a field.
///
/// Removes the error marker and the description linkage from the field as
/// passed, fans out to radio-group siblings, then empties and hides the
/// annotation node. The node stays in the document for reuse.
pub fn clear_error<D: FormDocument + ?Sized>(document: &mut D, field: FieldHandle) {
    document.remove_error_marker(field);
    document.clear_description_link(field);

    let Some(snapshot) = document.snapshot(field) else {
        return;
    };

    let mut anchor_snapshot = snapshot;
    if anchor_snapshot.kind == FieldKind::Radio {
        if let Some(name) = anchor_snapshot.name.clone().filter(|n| !n.is_empty()) {
            let group = document.radio_group(&name);
            for member in &group {
                document.remove_error_marker(*member);
            }
            if let Some(last) = group.last().copied() {
                if let Some(last_snapshot) = document.snapshot(last) {
                    anchor_snapshot = last_snapshot;
                }
            }
        }
    }

    let Some(identifier) = anchor_snapshot.identifier().map(str::to_owned) else {
        return;
    };
    let id = annotation_id(&identifier);

    if !document.has_annotation(&id) {
        return;
    }
    document.set_annotation(&id, "", false);
}
