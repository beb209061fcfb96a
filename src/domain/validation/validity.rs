//! Validity flag evaluation

use regex::Regex;

use crate::domain::field::{FieldKind, FieldSnapshot};

/// Tolerance for step-multiple checks on parsed numbers
const STEP_EPSILON: f64 = 1e-7;

/// The set of named conditions describing why a field's value fails its
/// declared constraints. All flags false means the value is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
    pub bad_input: bool,
    pub step_mismatch: bool,
    pub range_overflow: bool,
    pub range_underflow: bool,
    pub pattern_mismatch: bool,
}

impl ValidityState {
    /// True when no constraint is violated
    pub fn is_valid(&self) -> bool {
        !(self.value_missing
            || self.type_mismatch
            || self.too_short
            || self.too_long
            || self.bad_input
            || self.step_mismatch
            || self.range_overflow
            || self.range_underflow
            || self.pattern_mismatch)
    }

    /// Evaluate every constraint flag for a field snapshot.
    ///
    /// Disabled fields and kinds that do not participate in validation
    /// (file, submit, reset, button) always evaluate as valid.
    pub fn evaluate(field: &FieldSnapshot) -> Self {
        let mut validity = Self::default();

        if field.disabled || !field.kind.is_validated() {
            return validity;
        }

        let value = field.value.as_str();

        if field.constraints.required && value.is_empty() {
            validity.value_missing = true;
        }

        // Every remaining constraint only applies to a non-empty value
        if value.is_empty() {
            return validity;
        }

        match field.kind {
            FieldKind::Email => validity.type_mismatch = !is_simple_email(value),
            FieldKind::Url => validity.type_mismatch = !is_url_like(value),
            _ => {}
        }

        if field.kind.is_textual() {
            let len = field.value_chars();
            if let Some(min) = field.constraints.min_length {
                if len < min as usize {
                    validity.too_short = true;
                }
            }
            if let Some(max) = field.constraints.max_length {
                if len > max as usize {
                    validity.too_long = true;
                }
            }
            if let Some(pattern) = field.constraints.pattern.as_deref() {
                if !pattern.is_empty() && !matches_pattern(pattern, value) {
                    validity.pattern_mismatch = true;
                }
            }
        }

        if field.kind == FieldKind::Number {
            match parse_number(value) {
                Some(numeric) => {
                    if let Some(max) = field.constraints.max {
                        if numeric > max {
                            validity.range_overflow = true;
                        }
                    }
                    if let Some(min) = field.constraints.min {
                        if numeric < min {
                            validity.range_underflow = true;
                        }
                    }
                    if let Some(step) = field.constraints.step.filter(|s| *s > 0.0) {
                        let base = field.constraints.min.unwrap_or(0.0);
                        let ratio = (numeric - base) / step;
                        if (ratio - ratio.round()).abs() > STEP_EPSILON {
                            validity.step_mismatch = true;
                        }
                    }
                }
                None => validity.bad_input = true,
            }
        }

        validity
    }
}

/// Minimal local@domain shape check for email values
fn is_simple_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    !value.chars().any(char::is_whitespace)
}

/// Requires a scheme, "://", and a non-empty remainder
fn is_url_like(value: &str) -> bool {
    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    let valid_scheme = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'));
    valid_scheme && !rest.is_empty() && !value.chars().any(char::is_whitespace)
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Full-match the value against the pattern, anchored the way the HTML
/// pattern attribute is. An unparseable pattern imposes no constraint.
fn matches_pattern(pattern: &str, value: &str) -> bool {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(regex) => regex.is_match(value),
        Err(_) => true,
    }
}
