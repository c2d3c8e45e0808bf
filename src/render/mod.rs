//! Renderer module: trait-based format dispatch.
//!
//! The four markup variants (inline preview, standalone HTML, Word HTML,
//! Markdown) share one table renderer and one value formatter and differ only
//! in the surrounding markup. JSON export serialises the records as-is.

pub mod html;
pub mod json;
pub mod markdown;
pub mod style;
pub mod table;

use crate::error::{Error, Result};
use crate::model::{validate_all, DocumentationRecord};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TITLE: &str = "API Documentation";

/// Document-level settings shared by every renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Markup variant an endpoint or table is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// HTML fragment embedded into a live view.
    Preview,
    /// Self-contained HTML file.
    Standalone,
    /// HTML annotated for word-processor import.
    Word,
    Markdown,
}

/// Output formats known to the CLI and the export path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Preview,
    Html,
    Markdown,
    Json,
    Word,
}

impl Format {
    /// Formats offered when exporting a file; the preview is view-only.
    pub const EXPORTABLE: [Format; 4] =
        [Format::Html, Format::Markdown, Format::Json, Format::Word];

    pub fn id(self) -> &'static str {
        match self {
            Format::Preview => "preview",
            Format::Html => "html",
            Format::Markdown => "md",
            Format::Json => "json",
            Format::Word => "word",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Format::Preview => "HTML Preview",
            Format::Html => "HTML Document",
            Format::Markdown => "Markdown",
            Format::Json => "JSON",
            Format::Word => "Word Document",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Format::Preview => "api-documentation.preview.html",
            Format::Html => "api-documentation.html",
            Format::Markdown => "api-documentation.md",
            Format::Json => "api-documentation.json",
            Format::Word => "api-documentation.doc",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Preview | Format::Html => "text/html",
            Format::Markdown => "text/markdown",
            Format::Json => "application/json",
            Format::Word => "application/msword;charset=utf-8",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preview" => Ok(Format::Preview),
            "html" => Ok(Format::Html),
            "markdown" | "md" => Ok(Format::Markdown),
            "json" => Ok(Format::Json),
            "word" | "doc" => Ok(Format::Word),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Trait for rendering documentation records into one output format.
pub trait Renderer {
    /// Render a single endpoint block.
    fn render_endpoint(&self, record: &DocumentationRecord) -> Result<String>;

    /// Render a complete document: shell plus every endpoint, in order.
    fn render(&self, records: &[DocumentationRecord], opts: &RenderOptions) -> Result<String>;
}

/// Create a renderer for the given format.
pub fn create_renderer(format: Format) -> Box<dyn Renderer> {
    match format {
        Format::Preview => Box::new(html::HtmlRenderer::new(Target::Preview)),
        Format::Html => Box::new(html::HtmlRenderer::new(Target::Standalone)),
        Format::Word => Box::new(html::HtmlRenderer::new(Target::Word)),
        Format::Markdown => Box::new(markdown::MarkdownRenderer),
        Format::Json => Box::new(json::JsonRenderer),
    }
}

/// Validate `records` and assemble them into one document.
///
/// Any record missing its method or path fails the whole call before output
/// is produced. An empty sequence yields the bare document shell.
pub fn assemble(
    records: &[DocumentationRecord],
    format: Format,
    opts: &RenderOptions,
) -> Result<String> {
    validate_all(records)?;
    tracing::debug!(format = %format, endpoints = records.len(), "assembling document");
    create_renderer(format).render(records, opts)
}
