//! apidoc: render API endpoint descriptions as documentation.
//!
//! Reads documentation records (or endpoint samples) as JSON from files or
//! stdin and writes one document:
//!
//! - **stdout mode**: `apidoc -f md < endpoints.json`
//! - **export mode**: `apidoc -f word -o docs/ specs/*.json`
//!
//! Without `-f` on an interactive terminal the format is asked for; a
//! dismissed choice exits cleanly without writing anything.

mod logging;

use anyhow::{Context, Result};
use apidoc::export::{self, format_choice, prompt_format};
use apidoc::parser::{self, sample};
use apidoc::render::{Format, RenderOptions, DEFAULT_TITLE};
use apidoc::{example, DocumentationRecord};
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    about = "Render API endpoint descriptions as HTML, Markdown, JSON or Word documents"
)]
struct Cli {
    /// Input JSON files, directories or glob patterns. If omitted, reads from stdin.
    inputs: Vec<String>,

    /// Output format: preview, html, md, json, word. Asked for when omitted on a terminal.
    #[arg(short = 'f', long, env = "APIDOC_FORMAT")]
    format: Option<String>,

    /// Output directory. Writes to stdout when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Document title
    #[arg(short = 't', long, env = "APIDOC_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Render the built-in example endpoint instead of reading input
    #[arg(long, conflicts_with = "inputs")]
    example: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let records = load_records(&cli)?;
    if records.is_empty() {
        tracing::warn!("no endpoints to document");
    }

    let format = match resolve_format(&cli)? {
        Some(format) => format,
        None => {
            tracing::info!("export cancelled");
            return Ok(());
        }
    };

    let opts = RenderOptions {
        title: cli.title.clone(),
    };
    let artifact = export::export(&records, format, &opts)?;

    match cli.output {
        Some(ref dir) => {
            artifact.deliver(dir)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&artifact.bytes)
                .and_then(|_| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Collect records from `--example`, stdin, or the input files, in that order
/// of precedence.
fn load_records(cli: &Cli) -> Result<Vec<DocumentationRecord>> {
    if cli.example {
        return Ok(sample::parse(&example::sample()));
    }

    if cli.inputs.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(parser::parse_input(&input)?);
    }

    let mut records = Vec::new();
    for path in expand_globs(&cli.inputs)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match parser::parse_input(&content) {
            Ok(parsed) => {
                tracing::debug!(file = %path.display(), endpoints = parsed.len(), "parsed input");
                records.extend(parsed);
            }
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
            }
        }
    }
    Ok(records)
}

/// Format from `-f`, or from the interactive prompt. `None` means the user
/// dismissed the choice.
fn resolve_format(cli: &Cli) -> Result<Option<Format>> {
    if let Some(ref id) = cli.format {
        return Ok(Some(id.parse()?));
    }

    // stdin is busy with input, or nobody is there to answer
    let reads_stdin = cli.inputs.is_empty() && !cli.example;
    if reads_stdin || !io::stdin().is_terminal() {
        return Ok(Some(Format::Markdown));
    }

    let (chooser, pending) = format_choice();
    prompt_format(&mut io::stdin().lock(), &mut io::stderr(), chooser)?;
    match pending.wait() {
        Ok(format) => Ok(Some(format)),
        Err(e) if e.is_cancelled() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// File extensions recognized as input files.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for JSON files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            let mut found: Vec<PathBuf> = entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && has_supported_extension(p))
                .collect();
            found.sort();
            files.extend(found);
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Endpoint order follows the command line; drop repeats only.
    let mut seen = std::collections::HashSet::new();
    files.retain(|p| seen.insert(p.clone()));
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["apidoc", "-vv", "--example"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.example);
    }

    #[test]
    fn example_conflicts_with_inputs() {
        assert!(Cli::try_parse_from(["apidoc", "--example", "a.json"]).is_err());
    }

    #[test]
    fn explicit_format_skips_prompt() {
        let cli = Cli::try_parse_from(["apidoc", "-f", "word", "--example"]).unwrap();
        assert_eq!(resolve_format(&cli).unwrap(), Some(Format::Word));
    }

    #[test]
    fn stdin_input_defaults_to_markdown() {
        let cli = Cli::try_parse_from(["apidoc", "-t", "Orders"]).unwrap();
        assert_eq!(resolve_format(&cli).unwrap(), Some(Format::Markdown));
        assert_eq!(cli.title, "Orders");
    }

    #[test]
    fn directory_inputs_pick_json_only() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let files = expand_globs(&[dir.path().to_string_lossy().to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }
}
