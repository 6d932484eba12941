//! CLI command for the interactive session

use std::io;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::export::DirectorySink;
use crate::session::{run_interactive, Session};

/// Handle `spend session` over stdin/stdout
pub fn handle_session_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    let mut session = Session::new(paths, settings.clone());
    let mut sink = DirectorySink::new(settings.export_dir(paths));

    run_interactive(
        &mut session,
        io::stdin().lock(),
        io::stdout().lock(),
        &mut rand::thread_rng(),
        &mut sink,
    )
}
