//! Endpoint samples: derive field tables from example request/response payloads.

use crate::model::{DocumentationRecord, FieldDescriptor, ReturnsDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Description given to responses inferred from a sample payload.
pub const RESPONSE_DESCRIPTION: &str = "Successful response";

/// A raw endpoint description with sample payloads instead of field tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSample {
    pub path: String,
    pub method: String,
    pub description: String,
    pub request: Value,
    pub response: Value,
    pub notes: String,
}

/// Expand a sample into documentation records.
///
/// Top-level payload keys become fields (all required), in payload order,
/// with their value as the example. Whole payloads become the request and
/// response examples.
pub fn parse(sample: &EndpointSample) -> Vec<DocumentationRecord> {
    let notes = sample.notes.trim();
    let returns = match sample.response {
        Value::Object(ref map) if !map.is_empty() => Some(ReturnsDescriptor {
            description: RESPONSE_DESCRIPTION.to_string(),
            fields: infer_fields(&sample.response),
        }),
        _ => None,
    };

    let record = DocumentationRecord {
        path: sample.path.trim().to_string(),
        method: sample.method.trim().to_ascii_uppercase(),
        description: sample.description.trim().to_string(),
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        params: infer_fields(&sample.request),
        returns,
        request_example: non_empty(&sample.request),
        response_example: non_empty(&sample.response),
    };
    tracing::trace!(
        path = %record.path,
        params = record.params.len(),
        "expanded endpoint sample"
    );
    vec![record]
}

/// One required field per top-level key of an object payload.
pub fn infer_fields(payload: &Value) -> Vec<FieldDescriptor> {
    match payload {
        Value::Object(map) => map
            .iter()
            .map(|(name, value)| FieldDescriptor {
                name: name.clone(),
                type_tag: infer_type(value),
                description: String::new(),
                required: true,
                example: Some(value.clone()),
                notes: None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Type tag for a sample value.
///
/// Arrays take their tag from the first element, e.g. `array<object>`.
pub fn infer_type(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Object(_) => "object".to_string(),
        Value::Array(items) => match items.first() {
            Some(first) => format!("array<{}>", infer_type(first)),
            None => "array".to_string(),
        },
    }
}

fn non_empty(payload: &Value) -> Option<Value> {
    match payload {
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(_) | Value::Array(_) => Some(payload.clone()),
        _ => None,
    }
}
