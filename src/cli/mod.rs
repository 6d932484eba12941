//! CLI command handlers
//!
//! Bridges clap argument parsing with sessions, reports and exports.

pub mod categories;
pub mod export;
pub mod log;
pub mod record;
pub mod report;
pub mod session;

pub use categories::handle_categories_command;
pub use export::handle_export_command;
pub use log::handle_log_command;
pub use record::{parse_profile, RecordArgs};
pub use report::{handle_report_command, ReportView};
pub use session::handle_session_command;
