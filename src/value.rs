//! Example-value formatting and escaping shared by every renderer.
//!
//! Example payloads arrive either as JSON text (typed by a user) or as
//! already-structured values (parsed samples, canned data). Both are turned
//! into a display string here; nothing in this module can fail.

use serde_json::Value;

/// Type tags whose examples are shown as pretty-printed JSON.
const STRUCTURED_TAGS: &[&str] = &["object", "array<object>"];

/// Whether `type_tag` asks for JSON pretty-printing.
pub fn is_structured(type_tag: &str) -> bool {
    STRUCTURED_TAGS.contains(&type_tag.trim())
}

/// Format an example value for display.
///
/// Structured tags pretty-print with two-space indentation, re-parsing text
/// first; text that is not JSON is returned unchanged. Any other tag yields
/// the plain string form. Absent, `null` and empty-string values give `""`.
///
/// The result is not escaped; HTML renderers pass it through [`html_escape`].
pub fn format_value(value: Option<&Value>, type_tag: &str) -> String {
    render(value, type_tag, true)
}

/// Like [`format_value`] but keeps structured values on one line, for
/// contexts such as Markdown table cells that cannot hold line breaks.
pub fn format_value_inline(value: Option<&Value>, type_tag: &str) -> String {
    render(value, type_tag, false)
}

fn render(value: Option<&Value>, type_tag: &str, pretty: bool) -> String {
    let value = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) if s.is_empty() => return String::new(),
        Some(v) => v,
    };

    if is_structured(type_tag) {
        match value {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(parsed) => serialize(&parsed, pretty).unwrap_or_else(|| text.clone()),
                Err(_) => text.clone(),
            },
            other => serialize(other, pretty).unwrap_or_else(|| plain(other)),
        }
    } else {
        plain(value)
    }
}

fn serialize(value: &Value, pretty: bool) -> Option<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.ok()
}

/// Plain string form: strings verbatim, everything else as compact JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape text for embedding in HTML element content or attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make text safe for a single GFM table cell.
///
/// Pipes are escaped and line breaks collapse to `<br>` so the row stays on
/// one line.
pub fn markdown_cell(s: &str) -> String {
    s.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}
