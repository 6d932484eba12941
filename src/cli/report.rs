//! CLI command for terminal reports

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::session::Session;

use super::record::RecordArgs;

/// Which report(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportView {
    /// Totals, budget usage and category breakdown
    Summary,
    /// Savings insight, dominant category and a tip
    Analysis,
    /// Both
    #[default]
    All,
}

/// Handle `spend report`
pub fn handle_report_command(
    settings: &Settings,
    args: &RecordArgs,
    view: ReportView,
) -> TrackerResult<()> {
    let mut session = Session::without_audit(settings.clone());
    args.open_in(&mut session)?;
    let currency = &settings.currency_symbol;

    if matches!(view, ReportView::Summary | ReportView::All) {
        println!("{}", session.summary()?.format_terminal(currency));
    }
    if matches!(view, ReportView::Analysis | ReportView::All) {
        let analysis = session.analysis(&mut rand::thread_rng())?;
        println!("{}", analysis.format_terminal(currency));
    }

    session.logout()
}
