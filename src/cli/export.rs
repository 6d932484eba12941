//! CLI command for exporting a record
//!
//! Writes the artifact into the export directory, or prints it with
//! `--stdout`.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{ArtifactSink, DirectorySink, ExportFormat};
use crate::session::Session;

use super::record::RecordArgs;

/// Prints the artifact instead of saving it
struct StdoutSink;

impl ArtifactSink for StdoutSink {
    fn write_artifact(&mut self, file_name: &str, content: &str) -> TrackerResult<PathBuf> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| TrackerError::Export(format!("Failed to write to stdout: {}", e)))?;
        Ok(PathBuf::from(file_name))
    }
}

/// Handle `spend export`
pub fn handle_export_command(
    paths: &TrackerPaths,
    settings: &Settings,
    args: &RecordArgs,
    format: ExportFormat,
    output: Option<PathBuf>,
    stdout: bool,
) -> TrackerResult<()> {
    let mut session = Session::new(paths, settings.clone());
    args.open_in(&mut session)?;
    let mut rng = rand::thread_rng();

    if stdout {
        session.export(format, &mut StdoutSink, &mut rng)?;
    } else {
        let dir = output.unwrap_or_else(|| settings.export_dir(paths));
        let path = session.export(format, &mut DirectorySink::new(dir), &mut rng)?;
        println!("Report exported to: {}", path.display());
    }

    session.logout()
}
