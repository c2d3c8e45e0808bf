//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the records directly, two-space indented, with no per-endpoint
//! rendering. The document title is not part of the output.

use super::{RenderOptions, Renderer};
use crate::error::Result;
use crate::model::DocumentationRecord;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_endpoint(&self, record: &DocumentationRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }

    fn render(&self, records: &[DocumentationRecord], _opts: &RenderOptions) -> Result<String> {
        let mut out = serde_json::to_string_pretty(records)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDescriptor;
    use serde_json::{json, Value};

    #[test]
    fn round_trips_records() {
        let records = vec![DocumentationRecord {
            method: "GET".into(),
            path: "/items".into(),
            params: vec![FieldDescriptor {
                name: "limit".into(),
                type_tag: "integer".into(),
                example: Some(json!(20)),
                ..Default::default()
            }],
            response_example: Some(json!({"items": []})),
            ..Default::default()
        }];
        let out = JsonRenderer.render(&records, &RenderOptions::default()).unwrap();
        let back: Vec<DocumentationRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, records);
        assert!(out.contains("\n  {\n    \"path\": \"/items\""));
        assert!(out.contains("\"responseExample\""));
        assert!(out.contains("\"type\": \"integer\""));
    }

    #[test]
    fn empty_sequence_is_empty_array() {
        let out = JsonRenderer.render(&[], &RenderOptions::default()).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), json!([]));
    }
}
