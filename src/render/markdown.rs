//! GitHub-flavored markdown renderer.

use super::table::{render_field_table, TableKind};
use super::{RenderOptions, Renderer, Target};
use crate::error::Result;
use crate::model::DocumentationRecord;
use crate::value::format_value;
use serde_json::Value;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_endpoint(&self, record: &DocumentationRecord) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("## {} {}\n", record.method, record.path));

        if !record.description.is_empty() {
            lines.push(record.description.clone());
            lines.push(String::new());
        }

        // Notes
        let notes = record.note_lines();
        if !notes.is_empty() {
            lines.push("### Additional Notes\n".to_string());
            for note in &notes {
                lines.push(format!("- {}", note));
            }
            lines.push(String::new());
        }

        // Request parameters
        let params = render_field_table(&record.params, TableKind::Params, Target::Markdown);
        if !params.is_empty() {
            lines.push("### Request Parameters\n".to_string());
            lines.push(params);
        }

        push_example(&mut lines, "Request Example", record.request_example.as_ref());

        // Response
        if let Some(returns) = record.returns.as_ref().filter(|r| !r.is_empty()) {
            lines.push("### Response\n".to_string());
            if !returns.description.is_empty() {
                lines.push(format!("**Description:** {}", returns.description));
                lines.push(String::new());
            }
            let fields =
                render_field_table(&returns.fields, TableKind::Response, Target::Markdown);
            if !fields.is_empty() {
                lines.push("#### Response Fields\n".to_string());
                lines.push(fields);
            }
        }

        push_example(&mut lines, "Response Example", record.response_example.as_ref());

        Ok(lines.join("\n"))
    }

    fn render(&self, records: &[DocumentationRecord], opts: &RenderOptions) -> Result<String> {
        let mut output = format!("# {}\n\n", opts.title);
        for record in records {
            output.push_str(&self.render_endpoint(record)?);
            output.push_str("\n---\n\n");
        }
        Ok(output)
    }
}

/// Fenced JSON block for a request/response example.
fn push_example(lines: &mut Vec<String>, title: &str, value: Option<&Value>) {
    let formatted = format_value(value, "object");
    if formatted.is_empty() {
        return;
    }
    let fence = "`".repeat(fence_length(&formatted));
    lines.push(format!("### {}\n", title));
    lines.push(format!("{}json", fence));
    lines.push(formatted);
    lines.push(fence);
    lines.push(String::new());
}

/// Longest backtick run in `content`.
fn longest_tick_run(content: &str) -> usize {
    let mut max_run = 0;
    let mut current_run = 0;
    for c in content.chars() {
        if c == '`' {
            current_run += 1;
            max_run = max_run.max(current_run);
        } else {
            current_run = 0;
        }
    }
    max_run
}

/// Smallest code fence (at least three backticks) that cannot be closed by
/// a backtick run inside `content`.
fn fence_length(content: &str) -> usize {
    longest_tick_run(content).max(2) + 1
}

/// Wrap `text` in an inline code span that survives embedded backticks.
pub(crate) fn code_span(text: &str) -> String {
    let ticks = "`".repeat(longest_tick_run(text) + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{} {} {}", ticks, text, ticks)
    } else {
        format!("{}{}{}", ticks, text, ticks)
    }
}
