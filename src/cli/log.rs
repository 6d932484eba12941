//! CLI command for reading the audit log

use crate::audit::AuditLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Handle `spend log`
pub fn handle_log_command(paths: &TrackerPaths, limit: usize) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
