//! Parser module: turn JSON input into documentation records.
//!
//! Input is either a single JSON object or an array of them. Each object is
//! a documentation record as-is, or an endpoint sample (it carries a
//! `request` or `response` payload) that is expanded by [`sample::parse`].

pub mod sample;

use crate::error::{Error, Result};
use crate::model::DocumentationRecord;
use serde_json::Value;

pub use sample::EndpointSample;

/// Parse JSON input text into records, preserving input order.
pub fn parse_input(text: &str) -> Result<Vec<DocumentationRecord>> {
    let value: Value = serde_json::from_str(text).map_err(|e| Error::Input(e.to_string()))?;
    match value {
        Value::Array(items) => {
            let mut records = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                records.extend(parse_entry(item).map_err(|e| at_index(i, e))?);
            }
            Ok(records)
        }
        obj @ Value::Object(_) => parse_entry(obj),
        other => Err(Error::Input(format!(
            "expected an object or an array of objects, found {}",
            kind_of(&other)
        ))),
    }
}

fn parse_entry(value: Value) -> Result<Vec<DocumentationRecord>> {
    let is_sample = match value {
        Value::Object(ref map) => map.contains_key("request") || map.contains_key("response"),
        ref other => {
            return Err(Error::Input(format!("expected an object, found {}", kind_of(other))));
        }
    };
    if is_sample {
        let sample: EndpointSample =
            serde_json::from_value(value).map_err(|e| Error::Input(e.to_string()))?;
        Ok(sample::parse(&sample))
    } else {
        let record: DocumentationRecord =
            serde_json::from_value(value).map_err(|e| Error::Input(e.to_string()))?;
        Ok(vec![record])
    }
}

fn at_index(index: usize, err: Error) -> Error {
    match err {
        Error::Input(msg) => Error::Input(format!("entry {}: {}", index, msg)),
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
