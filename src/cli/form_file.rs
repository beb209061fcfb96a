//! TOML form document loading

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::field::FieldKind;
use crate::infrastructure::document::{FieldSpec, MemoryForm};

/// Errors when loading a form document
#[derive(Debug, Error)]
pub enum FormFileError {
    #[error("Failed to read form file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse form file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Form file {path}: {message}")]
    Invalid { path: String, message: String },
}

/// On-disk form document
#[derive(Debug, Deserialize)]
pub struct FormFile {
    /// Opt-in marker; unmarked forms are loaded but never validated
    #[serde(default = "default_validate")]
    pub validate: bool,

    #[serde(default, rename = "field")]
    pub fields: Vec<FieldEntry>,
}

/// One field declaration
#[derive(Debug, Deserialize)]
pub struct FieldEntry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,

    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub required: bool,
    pub minlength: Option<u32>,
    pub maxlength: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub pattern: Option<String>,
    pub title: Option<String>,
}

fn default_validate() -> bool {
    true
}

fn default_kind() -> String {
    FieldKind::Text.to_string()
}

/// Read and build a form document from a TOML file
pub async fn load_form(path: &Path) -> Result<MemoryForm, FormFileError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FormFileError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    parse_form(path, &content)
}

/// Parse TOML content into a form document
pub fn parse_form(path: &Path, content: &str) -> Result<MemoryForm, FormFileError> {
    let file: FormFile = toml::from_str(content).map_err(|e| FormFileError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    build_form(path, file)
}

fn build_form(path: &Path, file: FormFile) -> Result<MemoryForm, FormFileError> {
    let mut form = MemoryForm::new();
    form.set_validate_marker(file.validate);

    for entry in file.fields {
        let kind: FieldKind = entry.kind.parse().map_err(|e| FormFileError::Invalid {
            path: path.display().to_string(),
            message: format!("{}", e),
        })?;

        // Labels go in before their field, keyed by the same identifier the
        // annotation bookkeeping resolves
        if let Some(label) = entry.label.as_deref() {
            let identifier = entry
                .id
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(entry.name.as_deref().filter(|s| !s.is_empty()));
            if let Some(identifier) = identifier {
                form.push_label(identifier, label);
            }
        }

        let spec = FieldSpec {
            id: entry.id,
            name: entry.name,
            kind,
            disabled: entry.disabled,
            checked: entry.checked,
            value: entry.value,
            constraints: crate::domain::field::Constraints {
                required: entry.required,
                min_length: entry.minlength,
                max_length: entry.maxlength,
                min: entry.min,
                max: entry.max,
                step: entry.step,
                pattern: entry.pattern,
                title: entry.title,
            },
        };
        form.push_field(spec);
    }

    Ok(form)
}
