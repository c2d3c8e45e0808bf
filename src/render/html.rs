//! HTML renderers: inline preview fragment, standalone page and Word document.
//!
//! All three walk a record the same way; the target decides the heading
//! levels, the stylesheet and the document shell. Every piece of record text
//! is escaped before it reaches the markup.

use super::style::{self, method_tag};
use super::table::{render_field_table, TableKind};
use super::{RenderOptions, Renderer, Target};
use crate::error::Result;
use crate::model::DocumentationRecord;
use crate::value::{format_value, html_escape};

pub struct HtmlRenderer {
    target: Target,
}

impl HtmlRenderer {
    /// Built through [`super::create_renderer`], which only hands out the
    /// HTML targets.
    pub(super) fn new(target: Target) -> Self {
        Self { target }
    }

    fn word(&self) -> bool {
        self.target == Target::Word
    }

    /// Section heading; Word documents use one level higher.
    fn heading(&self, text: &str) -> String {
        if self.word() {
            format!("<h3>{}</h3>\n", text)
        } else {
            format!("<h4>{}</h4>\n", text)
        }
    }

    fn example_block(&self, out: &mut String, title: &str, value: Option<&serde_json::Value>) {
        let formatted = format_value(value, "object");
        if formatted.is_empty() {
            return;
        }
        out.push_str("<div class=\"example\">\n");
        out.push_str(&self.heading(title));
        if self.word() {
            out.push_str(&format!("<pre>{}</pre>\n", html_escape(&formatted)));
        } else {
            out.push_str(&format!("<pre><code>{}</code></pre>\n", html_escape(&formatted)));
        }
        out.push_str("</div>\n");
    }

    fn shell_open(&self, out: &mut String, opts: &RenderOptions) {
        let title = html_escape(&opts.title);
        match self.target {
            Target::Preview => {
                out.push_str("<div class=\"api-docs\">\n");
                out.push_str(&format!("<style>\n{}</style>\n", style::PREVIEW_CSS));
                out.push_str(&format!("<h1>{}</h1>\n", title));
            }
            Target::Word => {
                out.push_str(&format!("<html {}>\n<head>\n", style::WORD_NAMESPACES));
                out.push_str("<meta charset=\"utf-8\">\n");
                out.push_str(&format!("<title>{}</title>\n", title));
                out.push_str(style::WORD_DOCUMENT_SETTINGS);
                out.push_str(&format!("<style>\n{}</style>\n", style::WORD_CSS));
                out.push_str("</head>\n<body>\n");
                out.push_str(&format!(
                    "<h1 style=\"font-size: 16pt; margin-bottom: 20pt\">{}</h1>\n",
                    title
                ));
            }
            _ => {
                out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
                out.push_str("<meta charset=\"utf-8\">\n");
                out.push_str(&format!("<title>{}</title>\n", title));
                out.push_str(&format!("<style>\n{}</style>\n", style::STANDALONE_CSS));
                out.push_str("</head>\n<body>\n<div class=\"container\">\n");
                out.push_str(&format!("<h1>{}</h1>\n", title));
            }
        }
    }

    fn shell_close(&self, out: &mut String) {
        match self.target {
            Target::Preview => out.push_str("</div>\n"),
            Target::Word => out.push_str("</body>\n</html>\n"),
            _ => out.push_str("</div>\n</body>\n</html>\n"),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn render_endpoint(&self, record: &DocumentationRecord) -> Result<String> {
        let mut out = String::new();
        let tag = method_tag(&record.method);

        // Heading: verb badge + path
        if self.word() {
            out.push_str(
                "<div class=\"endpoint\" style=\"margin-bottom: 30pt; page-break-inside: avoid\">\n",
            );
            out.push_str(&format!(
                "<h2><span class=\"method {}\" style=\"background-color: {}\">{}</span> <code>{}</code></h2>\n",
                tag.class,
                tag.color,
                html_escape(&record.method),
                html_escape(&record.path)
            ));
        } else {
            out.push_str("<div class=\"endpoint\">\n");
            out.push_str(&format!(
                "<h3><span class=\"method {}\">{}</span> <code>{}</code></h3>\n",
                tag.class,
                html_escape(&record.method),
                html_escape(&record.path)
            ));
        }

        if !record.description.is_empty() {
            out.push_str(&format!(
                "<div class=\"description\"><p>{}</p></div>\n",
                html_escape(&record.description)
            ));
        }

        // Notes
        let notes = record.note_lines();
        if !notes.is_empty() {
            out.push_str("<div class=\"notes\">\n");
            out.push_str(&self.heading("Additional Notes"));
            out.push_str("<ul>\n");
            for note in &notes {
                out.push_str(&format!("  <li>{}</li>\n", html_escape(note)));
            }
            out.push_str("</ul>\n</div>\n");
        }

        // Request parameters
        let params = render_field_table(&record.params, TableKind::Params, self.target);
        if !params.is_empty() {
            out.push_str("<div class=\"params\">\n");
            out.push_str(&self.heading("Request Parameters"));
            out.push_str(&params);
            out.push_str("</div>\n");
        }

        self.example_block(&mut out, "Request Example", record.request_example.as_ref());

        // Response
        if let Some(returns) = record.returns.as_ref().filter(|r| !r.is_empty()) {
            out.push_str("<div class=\"returns\">\n");
            out.push_str(&self.heading("Response"));
            if !returns.description.is_empty() {
                out.push_str(&format!(
                    "<p><strong>Description:</strong> {}</p>\n",
                    html_escape(&returns.description)
                ));
            }
            let fields = render_field_table(&returns.fields, TableKind::Response, self.target);
            if !fields.is_empty() {
                out.push_str(&self.heading("Response Fields"));
                out.push_str(&fields);
            }
            out.push_str("</div>\n");
        }

        self.example_block(&mut out, "Response Example", record.response_example.as_ref());

        out.push_str("</div>\n");
        Ok(out)
    }

    fn render(&self, records: &[DocumentationRecord], opts: &RenderOptions) -> Result<String> {
        let mut out = String::new();
        self.shell_open(&mut out, opts);
        for record in records {
            out.push_str(&self.render_endpoint(record)?);
        }
        self.shell_close(&mut out);
        Ok(out)
    }
}
