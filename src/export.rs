//! Export path: pick a format, assemble the document, hand the bytes to the
//! file-delivery side.
//!
//! The format choice is a one-shot channel. The chooser side resolves it
//! exactly once; dropping the chooser without choosing cancels the export.

use crate::error::{Error, Result};
use crate::model::DocumentationRecord;
use crate::render::{self, Format, RenderOptions};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// UTF-8 byte-order mark Word needs to detect the encoding of HTML input.
pub const UTF8_BOM: &str = "\u{feff}";

/// An exported document ready to be written somewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: Format,
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Write the artifact into `dir`, creating the directory if needed.
    ///
    /// One attempt; any failure comes back as [`Error::Delivery`].
    pub fn deliver(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        fs::create_dir_all(dir).map_err(|source| Error::Delivery {
            path: dir.to_path_buf(),
            source,
        })?;
        fs::write(&path, &self.bytes).map_err(|source| Error::Delivery {
            path: path.clone(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            mime = self.mime_type,
            bytes = self.bytes.len(),
            "exported documentation"
        );
        Ok(path)
    }
}

/// Render `records` as `format` and package the result for delivery.
///
/// Word output is prefixed with the UTF-8 BOM here, at serialization time;
/// the renderer itself never emits it.
pub fn export(
    records: &[DocumentationRecord],
    format: Format,
    opts: &RenderOptions,
) -> Result<Artifact> {
    let content = render::assemble(records, format, opts)?;
    let bytes = match format {
        Format::Word => {
            let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
            bytes.extend_from_slice(UTF8_BOM.as_bytes());
            bytes.extend_from_slice(content.as_bytes());
            bytes
        }
        _ => content.into_bytes(),
    };
    Ok(Artifact {
        format,
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        bytes,
    })
}

/// Create a one-shot format choice.
pub fn format_choice() -> (FormatChooser, PendingFormat) {
    let (tx, rx) = mpsc::sync_channel(1);
    (FormatChooser { tx }, PendingFormat { rx })
}

/// Resolving side of a format choice.
#[derive(Debug)]
pub struct FormatChooser {
    tx: mpsc::SyncSender<Format>,
}

impl FormatChooser {
    /// Resolve the choice. Consumes the chooser so it can fire only once.
    pub fn choose(self, format: Format) {
        // The pending side may already be gone; nobody is waiting then.
        let _ = self.tx.send(format);
    }

    /// Dismiss the choice. Same as dropping the chooser.
    pub fn cancel(self) {}
}

/// Waiting side of a format choice.
#[derive(Debug)]
pub struct PendingFormat {
    rx: mpsc::Receiver<Format>,
}

impl PendingFormat {
    /// Block until the choice is made, or return [`Error::Cancelled`] once the
    /// chooser is dropped unresolved.
    pub fn wait(self) -> Result<Format> {
        self.rx.recv().map_err(|_| Error::Cancelled)
    }
}

/// Offer the exportable formats on `out` and read one answer from `input`.
///
/// Accepts a menu number or a format id. A blank line, `q`, or end of input
/// dismisses the choice. Unrecognised answers are re-prompted.
pub fn prompt_format<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    chooser: FormatChooser,
) -> Result<()> {
    loop {
        out.write_all(menu_text().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| Error::Input(format!("failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::Input(format!("failed to read format choice: {}", e)))?;
        let answer = line.trim();
        if read == 0 || answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            chooser.cancel();
            return Ok(());
        }

        if let Some(format) = parse_answer(answer) {
            chooser.choose(format);
            return Ok(());
        }
        tracing::debug!(answer, "unrecognised format choice");
        let _ = writeln!(out, "unknown choice: {}", answer);
    }
}

fn menu_text() -> String {
    let mut text = String::from("Choose export format:\n");
    for (i, format) in Format::EXPORTABLE.iter().enumerate() {
        text.push_str(&format!("  {}) {:<5} {}\n", i + 1, format.id(), format.label()));
    }
    text.push_str("Format [1-4, blank to cancel]: ");
    text
}

fn parse_answer(answer: &str) -> Option<Format> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| Format::EXPORTABLE.get(i)).copied();
    }
    answer
        .parse::<Format>()
        .ok()
        .filter(|f| Format::EXPORTABLE.contains(f))
}
