//! In-memory form document adapter
//!
//! Implements the document port over an ordered node list, standing in for
//! the environment-provided document. Fields, labels, and annotations live in
//! one sequence so insertion anchoring ("after the label", "after the field")
//! and document-order queries behave like their markup counterparts.

use std::collections::BTreeSet;

use crate::application::ports::{AnnotationAnchor, FieldHandle, FormDocument};
use crate::domain::field::{Constraints, FieldKind, FieldSnapshot};

/// Class used to mark errored fields
pub const ERROR_MARKER_CLASS: &str = "error";

/// Checkbox value reported when checked and no explicit value is set
const CHECKBOX_DEFAULT_VALUE: &str = "on";

/// Declarative description of one field, used to build a form
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: FieldKind,
    pub disabled: bool,
    pub checked: bool,
    pub value: String,
    pub constraints: Constraints,
}

impl FieldSpec {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.constraints.required = required;
        self
    }

    pub fn min_length(mut self, min: u32) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: u32) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.constraints.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.constraints.step = Some(step);
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.constraints.pattern = Some(pattern.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.constraints.title = Some(title.to_string());
        self
    }
}

#[derive(Debug)]
struct FieldNode {
    handle: FieldHandle,
    spec: FieldSpec,
    classes: BTreeSet<String>,
    described_by: Option<String>,
}

#[derive(Debug)]
struct AnnotationNode {
    id: String,
    message: String,
    visible: bool,
}

#[derive(Debug)]
enum Node {
    Field(FieldNode),
    Label { for_identifier: String, text: String },
    Annotation(AnnotationNode),
}

/// In-memory form document
#[derive(Debug)]
pub struct MemoryForm {
    nodes: Vec<Node>,
    next_handle: u32,
    validate_marker: bool,
    native_validation: bool,
    focused: Option<FieldHandle>,
    replaced_content: Option<String>,
}

impl MemoryForm {
    /// Create an empty form without the validate marker
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_handle: 0,
            validate_marker: false,
            native_validation: true,
            focused: None,
            replaced_content: None,
        }
    }

    /// Opt the form in or out of validation handling
    pub fn set_validate_marker(&mut self, on: bool) {
        self.validate_marker = on;
    }

    /// Append a field, returning its stable handle
    pub fn push_field(&mut self, spec: FieldSpec) -> FieldHandle {
        let handle = FieldHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.push(Node::Field(FieldNode {
            handle,
            spec,
            classes: BTreeSet::new(),
            described_by: None,
        }));
        handle
    }

    /// Append a label associated with a field identifier
    pub fn push_label(&mut self, for_identifier: &str, text: &str) {
        self.nodes.push(Node::Label {
            for_identifier: for_identifier.to_string(),
            text: text.to_string(),
        });
    }

    /// Update a field's value
    pub fn set_value(&mut self, field: FieldHandle, value: &str) {
        if let Some(node) = self.field_node_mut(field) {
            node.spec.value = value.to_string();
        }
    }

    /// Update a field's checked state
    pub fn set_checked(&mut self, field: FieldHandle, checked: bool) {
        if let Some(node) = self.field_node_mut(field) {
            node.spec.checked = checked;
        }
    }

    /// Find a field by id, else by name
    pub fn find_field(&self, identifier: &str) -> Option<FieldHandle> {
        self.field_nodes()
            .find(|n| n.spec.id.as_deref() == Some(identifier))
            .or_else(|| {
                self.field_nodes()
                    .find(|n| n.spec.name.as_deref() == Some(identifier))
            })
            .map(|n| n.handle)
    }

    /// Whether the environment's own validation is still active
    pub fn native_validation(&self) -> bool {
        self.native_validation
    }

    /// Whether a field carries the error marker class
    pub fn has_error_marker(&self, field: FieldHandle) -> bool {
        self.field_node(field)
            .is_some_and(|n| n.classes.contains(ERROR_MARKER_CLASS))
    }

    /// A field's accessible description linkage, if any
    pub fn described_by(&self, field: FieldHandle) -> Option<&str> {
        self.field_node(field)?.described_by.as_deref()
    }

    /// Message text of an annotation, if the node exists
    pub fn annotation_message(&self, annotation_id: &str) -> Option<&str> {
        self.annotation_node(annotation_id)
            .map(|a| a.message.as_str())
    }

    /// Visibility of an annotation, if the node exists
    pub fn annotation_visible(&self, annotation_id: &str) -> Option<bool> {
        self.annotation_node(annotation_id).map(|a| a.visible)
    }

    /// How many annotation nodes share this id (the invariant is at most one)
    pub fn annotation_count(&self, annotation_id: &str) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Annotation(a) if a.id == annotation_id))
            .count()
    }

    /// The field currently holding focus
    pub fn focused(&self) -> Option<FieldHandle> {
        self.focused
    }

    /// The replacement content shown after a successful submit
    pub fn replaced_content(&self) -> Option<&str> {
        self.replaced_content.as_deref()
    }

    /// Node-list position of a field, for anchoring assertions
    pub fn position_of_field(&self, field: FieldHandle) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(n, Node::Field(f) if f.handle == field))
    }

    /// Node-list position of an annotation
    pub fn position_of_annotation(&self, annotation_id: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(n, Node::Annotation(a) if a.id == annotation_id))
    }

    /// Node-list position of a label
    pub fn position_of_label(&self, identifier: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(n, Node::Label { for_identifier, .. } if for_identifier == identifier))
    }

    /// Text of the label associated with an identifier
    pub fn label_text(&self, identifier: &str) -> Option<&str> {
        self.nodes.iter().find_map(|n| match n {
            Node::Label {
                for_identifier,
                text,
            } if for_identifier == identifier => Some(text.as_str()),
            _ => None,
        })
    }

    fn field_nodes(&self) -> impl Iterator<Item = &FieldNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Field(f) => Some(f),
            _ => None,
        })
    }

    fn field_node(&self, field: FieldHandle) -> Option<&FieldNode> {
        self.field_nodes().find(|n| n.handle == field)
    }

    fn field_node_mut(&mut self, field: FieldHandle) -> Option<&mut FieldNode> {
        self.nodes.iter_mut().find_map(|n| match n {
            Node::Field(f) if f.handle == field => Some(f),
            _ => None,
        })
    }

    fn annotation_node(&self, annotation_id: &str) -> Option<&AnnotationNode> {
        self.nodes.iter().find_map(|n| match n {
            Node::Annotation(a) if a.id == annotation_id => Some(a),
            _ => None,
        })
    }

    /// The value validation sees: radios report their group's selection,
    /// checkboxes report "on"/their value only while checked
    fn effective_value(&self, node: &FieldNode) -> String {
        match node.spec.kind {
            FieldKind::Radio => {
                let name = node.spec.name.as_deref().unwrap_or("");
                if name.is_empty() {
                    return if node.spec.checked {
                        node.spec.value.clone()
                    } else {
                        String::new()
                    };
                }
                self.field_nodes()
                    .find(|n| {
                        n.spec.kind == FieldKind::Radio
                            && n.spec.name.as_deref() == Some(name)
                            && n.spec.checked
                    })
                    .map(|n| n.spec.value.clone())
                    .unwrap_or_default()
            }
            FieldKind::Checkbox => {
                if node.spec.checked {
                    if node.spec.value.is_empty() {
                        CHECKBOX_DEFAULT_VALUE.to_string()
                    } else {
                        node.spec.value.clone()
                    }
                } else {
                    String::new()
                }
            }
            _ => node.spec.value.clone(),
        }
    }

    /// Identifier a field's label is looked up under: id, else name
    fn field_identifier(node: &FieldNode) -> Option<&str> {
        node.spec
            .id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| node.spec.name.as_deref().filter(|s| !s.is_empty()))
    }
}

impl Default for MemoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument for MemoryForm {
    fn has_validate_marker(&self) -> bool {
        self.validate_marker
    }

    fn disable_native_validation(&mut self) {
        self.native_validation = false;
    }

    fn field_handles(&self) -> Vec<FieldHandle> {
        self.field_nodes().map(|n| n.handle).collect()
    }

    fn snapshot(&self, field: FieldHandle) -> Option<FieldSnapshot> {
        let node = self.field_node(field)?;
        Some(FieldSnapshot {
            id: node.spec.id.clone(),
            name: node.spec.name.clone(),
            kind: node.spec.kind,
            disabled: node.spec.disabled,
            checked: node.spec.checked,
            value: self.effective_value(node),
            constraints: node.spec.constraints.clone(),
        })
    }

    fn radio_group(&self, name: &str) -> Vec<FieldHandle> {
        self.field_nodes()
            .filter(|n| n.spec.kind == FieldKind::Radio && n.spec.name.as_deref() == Some(name))
            .map(|n| n.handle)
            .collect()
    }

    fn add_error_marker(&mut self, field: FieldHandle) {
        if let Some(node) = self.field_node_mut(field) {
            node.classes.insert(ERROR_MARKER_CLASS.to_string());
        }
    }

    fn remove_error_marker(&mut self, field: FieldHandle) {
        if let Some(node) = self.field_node_mut(field) {
            node.classes.remove(ERROR_MARKER_CLASS);
        }
    }

    fn set_description_link(&mut self, field: FieldHandle, annotation_id: &str) {
        if let Some(node) = self.field_node_mut(field) {
            node.described_by = Some(annotation_id.to_string());
        }
    }

    fn clear_description_link(&mut self, field: FieldHandle) {
        if let Some(node) = self.field_node_mut(field) {
            node.described_by = None;
        }
    }

    fn has_annotation(&self, annotation_id: &str) -> bool {
        self.annotation_node(annotation_id).is_some()
    }

    fn insert_annotation(&mut self, annotation_id: &str, anchor: AnnotationAnchor) {
        if self.has_annotation(annotation_id) {
            return;
        }

        let after = match anchor {
            AnnotationAnchor::AfterLabel(field) => {
                let label_position = self
                    .field_node(field)
                    .and_then(Self::field_identifier)
                    .map(str::to_owned)
                    .and_then(|ident| self.position_of_label(&ident));
                match label_position {
                    Some(pos) => Some(pos),
                    None => self.position_of_field(field),
                }
            }
            AnnotationAnchor::AfterField(field) => self.position_of_field(field),
        };

        let Some(after) = after else {
            return;
        };
        self.nodes.insert(
            after + 1,
            Node::Annotation(AnnotationNode {
                id: annotation_id.to_string(),
                message: String::new(),
                visible: false,
            }),
        );
    }

    fn set_annotation(&mut self, annotation_id: &str, message: &str, visible: bool) {
        let node = self.nodes.iter_mut().find_map(|n| match n {
            Node::Annotation(a) if a.id == annotation_id => Some(a),
            _ => None,
        });
        if let Some(annotation) = node {
            annotation.message = message.to_string();
            annotation.visible = visible;
        }
    }

    fn focus(&mut self, field: FieldHandle) {
        if self.field_node(field).is_some() {
            self.focused = Some(field);
        }
    }

    fn replace_content(&mut self, message: &str) {
        self.nodes.clear();
        self.focused = None;
        self.replaced_content = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_stable_across_annotation_insertion() {
        let mut form = MemoryForm::new();
        let first = form.push_field(FieldSpec::new(FieldKind::Text).id("a"));
        let second = form.push_field(FieldSpec::new(FieldKind::Text).id("b"));

        form.insert_annotation("error-for-a", AnnotationAnchor::AfterField(first));

        let snapshot = form.snapshot(second).unwrap();
        assert_eq!(snapshot.id.as_deref(), Some("b"));
        assert_eq!(form.position_of_field(second), Some(2));
    }

    #[test]
    fn snapshot_reflects_spec_and_value_updates() {
        let mut form = MemoryForm::new();
        let field = form.push_field(
            FieldSpec::new(FieldKind::Text)
                .id("bio")
                .min_length(5)
                .required(true),
        );

        form.set_value(field, "hi");
        let snapshot = form.snapshot(field).unwrap();
        assert_eq!(snapshot.value, "hi");
        assert!(snapshot.constraints.required);
        assert_eq!(snapshot.constraints.min_length, Some(5));
    }

    #[test]
    fn snapshot_of_unknown_handle_is_none() {
        let form = MemoryForm::new();
        assert!(form.snapshot(FieldHandle(7)).is_none());
    }

    #[test]
    fn radio_snapshot_reports_group_selection() {
        let mut form = MemoryForm::new();
        let red = form.push_field(FieldSpec::new(FieldKind::Radio).name("color").value("red"));
        let blue = form.push_field(FieldSpec::new(FieldKind::Radio).name("color").value("blue"));

        assert_eq!(form.snapshot(red).unwrap().value, "");

        form.set_checked(blue, true);
        // Every member of the group sees the selected value
        assert_eq!(form.snapshot(red).unwrap().value, "blue");
        assert_eq!(form.snapshot(blue).unwrap().value, "blue");
    }

    #[test]
    fn checkbox_snapshot_value_tracks_checked_state() {
        let mut form = MemoryForm::new();
        let plain = form.push_field(FieldSpec::new(FieldKind::Checkbox).id("terms"));
        let custom =
            form.push_field(FieldSpec::new(FieldKind::Checkbox).id("news").value("weekly"));

        assert_eq!(form.snapshot(plain).unwrap().value, "");

        form.set_checked(plain, true);
        form.set_checked(custom, true);
        assert_eq!(form.snapshot(plain).unwrap().value, "on");
        assert_eq!(form.snapshot(custom).unwrap().value, "weekly");
    }

    #[test]
    fn radio_group_returns_members_in_document_order() {
        let mut form = MemoryForm::new();
        let a = form.push_field(FieldSpec::new(FieldKind::Radio).name("color").value("r"));
        form.push_field(FieldSpec::new(FieldKind::Text).id("x"));
        let b = form.push_field(FieldSpec::new(FieldKind::Radio).name("color").value("g"));
        form.push_field(FieldSpec::new(FieldKind::Radio).name("size").value("s"));

        assert_eq!(form.radio_group("color"), vec![a, b]);
    }

    #[test]
    fn find_field_prefers_id_and_falls_back_to_name() {
        let mut form = MemoryForm::new();
        let _by_name = form.push_field(FieldSpec::new(FieldKind::Text).name("q"));
        let by_id = form.push_field(FieldSpec::new(FieldKind::Text).id("q"));
        let only_name = form.push_field(FieldSpec::new(FieldKind::Text).name("w"));

        assert_eq!(form.find_field("q"), Some(by_id));
        assert_eq!(form.find_field("w"), Some(only_name));
        assert_eq!(form.find_field("missing"), None);
    }

    #[test]
    fn insert_annotation_is_idempotent_per_id() {
        let mut form = MemoryForm::new();
        let field = form.push_field(FieldSpec::new(FieldKind::Text).id("a"));

        form.insert_annotation("error-for-a", AnnotationAnchor::AfterField(field));
        form.insert_annotation("error-for-a", AnnotationAnchor::AfterField(field));

        assert_eq!(form.annotation_count("error-for-a"), 1);
    }

    #[test]
    fn after_label_anchor_prefers_label_position() {
        let mut form = MemoryForm::new();
        let field = form.push_field(FieldSpec::new(FieldKind::Checkbox).id("terms"));
        form.push_label("terms", "Accept the terms");

        form.insert_annotation("error-for-terms", AnnotationAnchor::AfterLabel(field));

        let label_pos = form.position_of_label("terms").unwrap();
        assert_eq!(
            form.position_of_annotation("error-for-terms"),
            Some(label_pos + 1)
        );
    }

    #[test]
    fn after_label_anchor_falls_back_to_field() {
        let mut form = MemoryForm::new();
        let field = form.push_field(FieldSpec::new(FieldKind::Checkbox).id("terms"));

        form.insert_annotation("error-for-terms", AnnotationAnchor::AfterLabel(field));

        let field_pos = form.position_of_field(field).unwrap();
        assert_eq!(
            form.position_of_annotation("error-for-terms"),
            Some(field_pos + 1)
        );
    }

    #[test]
    fn focus_ignores_unknown_handles() {
        let mut form = MemoryForm::new();
        form.focus(FieldHandle(42));
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn replace_content_clears_nodes() {
        let mut form = MemoryForm::new();
        form.push_field(FieldSpec::new(FieldKind::Text).id("a"));
        form.replace_content("Done!");

        assert_eq!(form.replaced_content(), Some("Done!"));
        assert!(form.field_handles().is_empty());
    }

    #[test]
    fn label_text_lookup() {
        let mut form = MemoryForm::new();
        form.push_label("email", "Email address");
        assert_eq!(form.label_text("email"), Some("Email address"));
        assert_eq!(form.label_text("other"), None);
    }
}
