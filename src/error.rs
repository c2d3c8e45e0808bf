//! Error type shared by the renderer core and the export path.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record lacks a field every renderer needs.
    #[error("record {index}: missing {field}")]
    Validation { index: usize, field: &'static str },

    /// The format choice was dismissed. Not a failure from the user's side.
    #[error("export cancelled")]
    Cancelled,

    #[error("unknown format: {0}. Use preview, html, md, json, or word")]
    UnknownFormat(String),

    /// Input text could not be turned into documentation records.
    #[error("invalid input: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the exported file failed.
    #[error("failed to write {}: {source}", path.display())]
    Delivery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
