//! Field tables for request parameters and response fields.
//!
//! One implementation serves every markup target; the target only picks the
//! column set, the header labels, the required-marker pair and the cell
//! markup.

use super::markdown::code_span;
use super::Target;
use crate::model::FieldDescriptor;
use crate::value::{format_value, format_value_inline, html_escape, markdown_cell};

/// Which table is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Params,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Type,
    Required,
    Description,
    Example,
    Notes,
}

use Column::*;

const PREVIEW_COLUMNS: &[Column] = &[Name, Type, Required, Description, Example, Notes];
const WORD_COLUMNS: &[Column] = &[Name, Type, Description, Required, Example, Notes];
const MARKDOWN_RESPONSE_COLUMNS: &[Column] = &[Name, Type, Description, Example, Notes];

/// Column layout for a table. Markdown response tables have no Required
/// column; every other combination does.
pub fn columns(kind: TableKind, target: Target) -> &'static [Column] {
    match (target, kind) {
        (Target::Word, _) => WORD_COLUMNS,
        (Target::Markdown, TableKind::Response) => MARKDOWN_RESPONSE_COLUMNS,
        _ => PREVIEW_COLUMNS,
    }
}

fn header_label(column: Column, target: Target) -> &'static str {
    match column {
        Name if target == Target::Word => "Name",
        Name => "Field",
        Type => "Type",
        Required => "Required",
        Description => "Description",
        Example => "Example",
        Notes => "Notes",
    }
}

/// Word ignores most CSS sizing, so its header cells carry explicit widths.
fn word_width(column: Column) -> &'static str {
    match column {
        Name | Type | Notes => "15%",
        Description => "25%",
        Required => "10%",
        Example => "20%",
    }
}

/// Marker for the Required column: check marks for the preview and
/// Markdown, words for the exported HTML variants.
pub fn required_marker(required: bool, target: Target) -> &'static str {
    match (target, required) {
        (Target::Preview | Target::Markdown, true) => "✓",
        (Target::Preview | Target::Markdown, false) => "✗",
        (_, true) => "Yes",
        (_, false) => "No",
    }
}

/// Render a field table. Returns an empty string when `fields` is empty so
/// callers can omit the whole section.
pub fn render_field_table(fields: &[FieldDescriptor], kind: TableKind, target: Target) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let cols = columns(kind, target);
    match target {
        Target::Markdown => markdown_table(fields, cols),
        _ => html_table(fields, cols, target),
    }
}

fn html_table(fields: &[FieldDescriptor], cols: &[Column], target: Target) -> String {
    let mut out = String::new();
    if target == Target::Word {
        out.push_str("<table>\n<tr>\n");
        for &col in cols {
            out.push_str(&format!(
                "  <th style=\"width: {}\">{}</th>\n",
                word_width(col),
                header_label(col, target)
            ));
        }
        out.push_str("</tr>\n");
    } else {
        out.push_str("<table class=\"param-table\">\n<thead>\n<tr>\n");
        for &col in cols {
            out.push_str(&format!("  <th>{}</th>\n", header_label(col, target)));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
    }

    for field in fields {
        out.push_str("<tr>\n");
        for &col in cols {
            out.push_str("  <td>");
            out.push_str(&html_cell(field, col, target));
            out.push_str("</td>\n");
        }
        out.push_str("</tr>\n");
    }

    if target != Target::Word {
        out.push_str("</tbody>\n");
    }
    out.push_str("</table>\n");
    out
}

fn html_cell(field: &FieldDescriptor, col: Column, target: Target) -> String {
    let word = target == Target::Word;
    match col {
        Name if word => html_escape(&field.name),
        Name => format!("<code>{}</code>", html_escape(&field.name)),
        Type => format!("<code>{}</code>", html_escape(&field.type_tag)),
        Required => required_marker(field.required, target).to_string(),
        Description => html_escape(&field.description),
        Example => {
            let example = format_value(field.example.as_ref(), &field.type_tag);
            if example.is_empty() {
                String::new()
            } else if word {
                format!("<pre>{}</pre>", html_escape(&example))
            } else {
                format!("<pre><code>{}</code></pre>", html_escape(&example))
            }
        }
        Notes => {
            let notes = html_escape(notes_or_dash(field));
            if word {
                notes
            } else {
                format!("<small>{}</small>", notes)
            }
        }
    }
}

fn markdown_table(fields: &[FieldDescriptor], cols: &[Column]) -> String {
    let mut out = String::new();

    let headers: Vec<&str> = cols
        .iter()
        .map(|&c| header_label(c, Target::Markdown))
        .collect();
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    let separators: Vec<String> = headers.iter().map(|h| "-".repeat(h.len().max(3))).collect();
    out.push_str(&format!("|{}|\n", separators.join("|")));

    for field in fields {
        let cells: Vec<String> = cols.iter().map(|&c| markdown_cell_for(field, c)).collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

fn markdown_cell_for(field: &FieldDescriptor, col: Column) -> String {
    match col {
        Name => markdown_cell(&code_span(&field.name)),
        Type => markdown_cell(&code_span(&field.type_tag)),
        Required => required_marker(field.required, Target::Markdown).to_string(),
        Description => markdown_cell(&field.description),
        Example => {
            let example = format_value_inline(field.example.as_ref(), &field.type_tag);
            if example.is_empty() {
                "-".to_string()
            } else if example.contains('\n') {
                // a code span would show the <br> breaks literally
                markdown_cell(&example)
            } else {
                markdown_cell(&code_span(&example))
            }
        }
        Notes => markdown_cell(notes_or_dash(field)),
    }
}

fn notes_or_dash(field: &FieldDescriptor) -> &str {
    match field.notes.as_deref() {
        Some(notes) if !notes.trim().is_empty() => notes,
        _ => "-",
    }
}
