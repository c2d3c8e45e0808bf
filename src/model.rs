//! Format-agnostic data model for documented endpoints.
//!
//! Records are built once from input (or the canned example), never mutated
//! by the renderers, and dropped after a render pass.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;

static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*-\s*").unwrap());

/// One documented endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentationRecord {
    pub path: String,
    /// HTTP verb as supplied; colour/class lookup is case-insensitive.
    pub method: String,
    pub description: String,
    /// Newline-separated, each line optionally prefixed with "- ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Request parameters, rendered in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<FieldDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnsDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_example: Option<Value>,
}

/// One request parameter or response field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub name: String,
    /// Free-form type tag, e.g. "string", "object", "array<object>".
    #[serde(rename = "type")]
    pub type_tag: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnsDescriptor {
    pub description: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ReturnsDescriptor {
    /// Nothing to show: no description and no fields.
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty() && self.fields.is_empty()
    }
}

impl DocumentationRecord {
    /// Check the fields every renderer depends on.
    ///
    /// `index` is the record's position in the input sequence and is only
    /// used for the error message.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.method.trim().is_empty() {
            return Err(Error::Validation {
                index,
                field: "method",
            });
        }
        if self.path.trim().is_empty() {
            return Err(Error::Validation {
                index,
                field: "path",
            });
        }
        Ok(())
    }

    /// Note lines with any leading "- " bullet removed. Blank lines are skipped.
    pub fn note_lines(&self) -> Vec<String> {
        match self.notes {
            Some(ref notes) => split_notes(notes),
            None => Vec::new(),
        }
    }
}

/// Validate a whole record sequence, failing on the first bad record.
pub fn validate_all(records: &[DocumentationRecord]) -> Result<()> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(i, rec)| rec.validate(i))
}

fn split_notes(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(|line| RE_BULLET.replace(line, "").trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
