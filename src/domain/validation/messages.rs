//! Validation message derivation

use crate::domain::field::{FieldKind, FieldSnapshot};

use super::ValidityState;

/// Validate one field and derive its error message, if any.
///
/// Returns `None` for disabled fields, for kinds that are never validated
/// (file, submit, reset, button), and for valid values. Otherwise returns
/// the message for the highest-priority failing constraint. The priority
/// order is fixed; `value_missing` always wins.
pub fn validate(field: &FieldSnapshot) -> Option<String> {
    if field.disabled || !field.kind.is_validated() {
        return None;
    }

    let validity = ValidityState::evaluate(field);
    if validity.is_valid() {
        return None;
    }

    if validity.value_missing {
        return Some("Please fill out this field.".to_string());
    }

    if validity.type_mismatch {
        match field.kind {
            FieldKind::Email => return Some("Please enter an email address.".to_string()),
            FieldKind::Url => return Some("Please enter a URL.".to_string()),
            // Any other mismatched kind falls through to the catch-all
            _ => {}
        }
    }

    if validity.too_short {
        return Some(format!(
            "Please lengthen this text to {} characters or more. You are currently using {} characters.",
            field.constraints.min_length.unwrap_or(0),
            field.value_chars()
        ));
    }

    if validity.too_long {
        return Some(format!(
            "Please shorten this text to no more than {} characters. You are currently using {} characters.",
            field.constraints.max_length.unwrap_or(0),
            field.value_chars()
        ));
    }

    if validity.bad_input {
        return Some("Please enter a number.".to_string());
    }

    if validity.step_mismatch {
        return Some("Please select a valid value.".to_string());
    }

    if validity.range_overflow {
        return Some(format!(
            "Please select a value that is no more than {}.",
            field.constraints.max.unwrap_or(0.0)
        ));
    }

    if validity.range_underflow {
        return Some(format!(
            "Please select a value that is no less than {}.",
            field.constraints.min.unwrap_or(0.0)
        ));
    }

    if validity.pattern_mismatch {
        if let Some(title) = field.constraints.title.as_deref() {
            return Some(title.to_string());
        }
        return Some("Please match the requested format.".to_string());
    }

    Some("The value you entered for this field is invalid.".to_string())
}
