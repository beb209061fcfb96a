//! Form field value objects

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidFieldKindError;

/// The type of a form field, mirroring the HTML control types the
/// validation engine distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Url,
    Tel,
    Password,
    Number,
    Checkbox,
    Radio,
    Select,
    Textarea,
    File,
    Submit,
    Reset,
    Button,
}

impl FieldKind {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Password => "password",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::File => "file",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }

    /// Whether this kind participates in validation at all.
    /// File inputs, buttons and submit/reset controls are never validated.
    pub const fn is_validated(&self) -> bool {
        !matches!(self, Self::File | Self::Reset | Self::Submit | Self::Button)
    }

    /// Whether length and pattern constraints apply to this kind
    pub const fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Email | Self::Url | Self::Tel | Self::Password | Self::Textarea
        )
    }

    /// Whether an error annotation for this kind anchors after the field's
    /// label rather than after the field itself
    pub const fn anchors_after_label(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = InvalidFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "url" => Ok(Self::Url),
            "tel" => Ok(Self::Tel),
            "password" => Ok(Self::Password),
            "number" => Ok(Self::Number),
            "checkbox" => Ok(Self::Checkbox),
            "radio" => Ok(Self::Radio),
            "select" => Ok(Self::Select),
            "textarea" => Ok(Self::Textarea),
            "file" => Ok(Self::File),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "button" => Ok(Self::Button),
            _ => Err(InvalidFieldKindError {
                input: s.to_string(),
            }),
        }
    }
}

/// Declarative constraints on a field's value.
/// `title` doubles as the custom message for pattern mismatches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub required: bool,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub pattern: Option<String>,
    pub title: Option<String>,
}

/// A point-in-time capture of one field's state, taken from the document
/// when validation runs. The value is the effective value: for a radio it is
/// the group's selected value, for a checkbox "on" when checked.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: FieldKind,
    pub disabled: bool,
    pub checked: bool,
    pub value: String,
    pub constraints: Constraints,
}

impl FieldSnapshot {
    /// The identifier used for annotation bookkeeping: id, else name.
    /// Fields with neither cannot be annotated.
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
    }

    /// Current value length in characters (not bytes)
    pub fn value_chars(&self) -> usize {
        self.value.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_lowercase_and_mixed_case() {
        assert_eq!("email".parse::<FieldKind>().unwrap(), FieldKind::Email);
        assert_eq!("Radio".parse::<FieldKind>().unwrap(), FieldKind::Radio);
        assert_eq!("TEXTAREA".parse::<FieldKind>().unwrap(), FieldKind::Textarea);
    }

    #[test]
    fn kind_rejects_unknown() {
        let err = "datetime".parse::<FieldKind>().unwrap_err();
        assert!(err.to_string().contains("datetime"));
    }

    #[test]
    fn kind_display_round_trips() {
        for kind in [FieldKind::Text, FieldKind::Url, FieldKind::Submit] {
            assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn buttons_and_files_are_not_validated() {
        assert!(!FieldKind::File.is_validated());
        assert!(!FieldKind::Submit.is_validated());
        assert!(!FieldKind::Reset.is_validated());
        assert!(!FieldKind::Button.is_validated());
        assert!(FieldKind::Text.is_validated());
        assert!(FieldKind::Radio.is_validated());
    }

    #[test]
    fn radio_and_checkbox_anchor_after_label() {
        assert!(FieldKind::Radio.anchors_after_label());
        assert!(FieldKind::Checkbox.anchors_after_label());
        assert!(!FieldKind::Text.anchors_after_label());
    }

    #[test]
    fn identifier_prefers_id_over_name() {
        let field = FieldSnapshot {
            id: Some("email".to_string()),
            name: Some("user_email".to_string()),
            ..Default::default()
        };
        assert_eq!(field.identifier(), Some("email"));
    }

    #[test]
    fn identifier_falls_back_to_name() {
        let field = FieldSnapshot {
            name: Some("color".to_string()),
            ..Default::default()
        };
        assert_eq!(field.identifier(), Some("color"));
    }

    #[test]
    fn identifier_ignores_empty_strings() {
        let field = FieldSnapshot {
            id: Some(String::new()),
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(field.identifier(), None);
    }

    #[test]
    fn value_chars_counts_characters() {
        let field = FieldSnapshot {
            value: "héllo".to_string(),
            ..Default::default()
        };
        assert_eq!(field.value_chars(), 5);
    }
}
