//! apidoc: render API endpoint descriptions as documentation.
//!
//! Records go in, one document string comes out: an inline HTML preview, a
//! standalone HTML page, Markdown, raw JSON, or Word-compatible HTML.
//!
//! ```
//! use apidoc::model::DocumentationRecord;
//! use apidoc::render::{assemble, Format, RenderOptions};
//!
//! let records = vec![DocumentationRecord {
//!     method: "GET".into(),
//!     path: "/health".into(),
//!     ..Default::default()
//! }];
//! let md = assemble(&records, Format::Markdown, &RenderOptions::default()).unwrap();
//! assert!(md.contains("## GET /health"));
//! ```

pub mod error;
pub mod example;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;
pub mod value;

pub use error::{Error, Result};
pub use model::{DocumentationRecord, FieldDescriptor, ReturnsDescriptor};
pub use render::{assemble, Format, RenderOptions};
