//! YAML Export functionality
//!
//! Same document as the JSON export, in a more readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::ExportDocument;

/// Write the document as YAML with a short comment header
pub fn export_yaml<W: Write>(document: &ExportDocument, writer: &mut W) -> TrackerResult<()> {
    let export_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# spend-tracker export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", document.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", document.app_version).map_err(export_err)?;
    writeln!(writer, "# Amounts are in cents").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, document).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
