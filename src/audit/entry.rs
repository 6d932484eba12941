//! Audit entry data structures
//!
//! Defines the session operations that get audited and the entry format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FinancialRecord, ProfileType};

/// Session operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A profile was registered and a record created
    Register,
    /// The record's expenses were replaced
    SaveExpenses,
    /// An export artifact was written
    Export,
    /// The session ended and the record was discarded
    Logout,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Register => write!(f, "REGISTER"),
            Operation::SaveExpenses => write!(f, "SAVE_EXPENSES"),
            Operation::Export => write!(f, "EXPORT"),
            Operation::Logout => write!(f, "LOGOUT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the session's record
    pub record_id: String,

    pub profile: ProfileType,

    /// Name the record was registered under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// JSON representation of the record after the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<serde_json::Value>,

    /// Human-readable change or detail summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn for_record(
        operation: Operation,
        record: &FinancialRecord,
        snapshot: bool,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            record_id: record.id.to_string(),
            profile: record.profile,
            name: Some(record.name.clone()),
            snapshot: if snapshot {
                serde_json::to_value(record).ok()
            } else {
                None
            },
            diff_summary,
        }
    }

    /// Entry for a newly registered record
    pub fn register(record: &FinancialRecord) -> Self {
        Self::for_record(Operation::Register, record, true, None)
    }

    /// Entry for an expense save, with the diff of what changed
    pub fn save_expenses(record: &FinancialRecord, diff_summary: Option<String>) -> Self {
        Self::for_record(Operation::SaveExpenses, record, true, diff_summary)
    }

    /// Entry for a written export; `detail` names where it went
    pub fn export(record: &FinancialRecord, detail: impl Into<String>) -> Self {
        Self::for_record(Operation::Export, record, false, Some(detail.into()))
    }

    /// Entry for the end of a session
    pub fn logout(record: &FinancialRecord) -> Self {
        Self::for_record(Operation::Logout, record, false, None)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.profile,
            self.record_id
        );

        if let Some(name) = &self.name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseEntry, Money};

    fn record() -> FinancialRecord {
        FinancialRecord::new(
            "Asha Rao",
            "98450 12345",
            ProfileType::Student,
            Money::from_cents(50000),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Register.to_string(), "REGISTER");
        assert_eq!(Operation::SaveExpenses.to_string(), "SAVE_EXPENSES");
        assert_eq!(Operation::Export.to_string(), "EXPORT");
        assert_eq!(Operation::Logout.to_string(), "LOGOUT");
    }

    #[test]
    fn test_register_entry() {
        let record = record();
        let entry = AuditEntry::register(&record);

        assert_eq!(entry.operation, Operation::Register);
        assert_eq!(entry.record_id, record.id.to_string());
        assert_eq!(entry.profile, ProfileType::Student);
        let snapshot = entry.snapshot.unwrap();
        assert_eq!(snapshot["name"], "Asha Rao");
        assert_eq!(snapshot["income"], 50000);
    }

    #[test]
    fn test_save_expenses_entry() {
        let mut record = record();
        record
            .replace_expenses([ExpenseEntry::new(Category::Food, Money::from_cents(100))])
            .unwrap();

        let entry = AuditEntry::save_expenses(&record, Some("Food: Rs0.00 -> Rs1.00".into()));
        assert_eq!(entry.operation, Operation::SaveExpenses);
        assert_eq!(entry.snapshot.unwrap()["expenses"][0]["category"], "Food");
        assert_eq!(entry.diff_summary.as_deref(), Some("Food: Rs0.00 -> Rs1.00"));
    }

    #[test]
    fn test_export_and_logout_skip_snapshot() {
        let record = record();
        assert!(AuditEntry::export(&record, "out.txt").snapshot.is_none());
        assert!(AuditEntry::logout(&record).snapshot.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::logout(&record());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"logout\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Logout);
        assert_eq!(deserialized.profile, ProfileType::Student);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::export(&record(), "Student_Asha_Rao.txt");

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("EXPORT"));
        assert!(formatted.contains("Student"));
        assert!(formatted.contains("(Asha Rao)"));
        assert!(formatted.contains("Changes: Student_Asha_Rao.txt"));
    }
}
