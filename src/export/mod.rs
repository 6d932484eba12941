//! Export module for spend-tracker
//!
//! Turns a record into a downloadable artifact:
//! - Text: the flat report with summary and analysis sections
//! - JSON / YAML: a structured document of the same metrics
//! - CSV: the category breakdown
//!
//! Writing the artifact somewhere is left to an [`ArtifactSink`].

pub mod json;
pub mod text;
pub mod yaml;

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use rand::Rng;

use crate::error::{TrackerError, TrackerResult};
use crate::models::FinancialRecord;
use crate::reports::{Analysis, ExpenseSummary};

pub use json::{export_json, ExportDocument, EXPORT_SCHEMA_VERSION};
pub use text::render_text;
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Plain-text report
    #[default]
    Text,
    /// Structured JSON document
    Json,
    /// Structured YAML document
    Yaml,
    /// Category breakdown as CSV
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// A rendered export, not yet written anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content: String,
}

/// Options that shape an export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub currency: String,
    /// Append the contact's digits to the file name
    pub include_contact: bool,
}

/// File name stem: `<Profile>_<Name>` with an optional `_<contact digits>`
///
/// Whitespace runs in the name become a single underscore, as does any
/// character that can't appear in a file name. The contact segment is
/// dropped when disabled or when the contact has no digits.
pub fn file_stem(record: &FinancialRecord, include_contact: bool) -> String {
    let name: String = record
        .name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if is_file_name_safe(c) { c } else { '_' })
        .collect();
    let mut stem = format!("{}_{}", record.profile, name);

    if include_contact {
        let digits: String = record.contact.chars().filter(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            stem.push('_');
            stem.push_str(&digits);
        }
    }

    stem
}

fn is_file_name_safe(c: char) -> bool {
    !c.is_control() && !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Suggested file name for an export
pub fn suggested_file_name(
    record: &FinancialRecord,
    format: ExportFormat,
    include_contact: bool,
) -> String {
    format!("{}.{}", file_stem(record, include_contact), format.extension())
}

/// Render a record in the requested format, drawing the tip from `rng`
pub fn build_artifact<R: Rng + ?Sized>(
    record: &FinancialRecord,
    options: &ExportOptions,
    rng: &mut R,
) -> TrackerResult<ExportArtifact> {
    let analysis = Analysis::generate(record, rng)?;

    let content = match options.format {
        ExportFormat::Text => render_text(record, &options.currency, analysis.tip)?,
        ExportFormat::Json => {
            let mut buf = Vec::new();
            export_json(&ExportDocument::build(record, &analysis)?, &mut buf, true)?;
            into_utf8(buf)?
        }
        ExportFormat::Yaml => {
            let mut buf = Vec::new();
            export_yaml(&ExportDocument::build(record, &analysis)?, &mut buf)?;
            into_utf8(buf)?
        }
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            ExpenseSummary::generate(record)?.export_csv(&mut buf)?;
            into_utf8(buf)?
        }
    };

    Ok(ExportArtifact {
        file_name: suggested_file_name(record, options.format, options.include_contact),
        content,
    })
}

fn into_utf8(buf: Vec<u8>) -> TrackerResult<String> {
    String::from_utf8(buf).map_err(|e| TrackerError::Export(e.to_string()))
}

/// Somewhere an artifact can be saved
pub trait ArtifactSink {
    /// Write `content` under `file_name`, returning where it went
    fn write_artifact(&mut self, file_name: &str, content: &str) -> TrackerResult<PathBuf>;
}

/// Writes artifacts into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn write_artifact(&mut self, file_name: &str, content: &str) -> TrackerResult<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            TrackerError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, content).map_err(|e| {
            TrackerError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}
