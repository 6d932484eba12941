//! Audit logging for spend-tracker
//!
//! Records session events (registration, expense saves, exports and logout)
//! in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one event with timestamp, operation, the session's
//!   record id and an optional snapshot of the record.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON
//!   (JSONL) and reads them back.
//! - `expense_diff`: human-readable summary of what an expense save changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use spend_tracker::audit::{expense_diff, AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::register(&record))?;
//!
//! let diff = expense_diff(&before, &record.expenses, "Rs");
//! logger.log(&AuditEntry::save_expenses(&record, diff))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::expense_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
