//! JSON Export functionality
//!
//! Exports a record and its derived metrics as a structured document with
//! schema versioning. Money amounts are written in cents.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{ExpenseEntry, FinancialRecord, Money, ProfileType, RecordId, SavingsBand};
use crate::reports::{Analysis, ExpenseSummary};
use crate::services::advisory::SAVINGS_RECOMMENDATION;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Structured export of one session's record
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub user: UserInfo,
    pub expenses: Vec<ExpenseEntry>,
    pub summary: ExpenseSummary,
    pub analysis: AnalysisSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub record_id: RecordId,
    pub name: String,
    pub contact: String,
    pub profile: ProfileType,
    pub income_label: String,
    pub income: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSection {
    pub savings_ratio: f64,
    pub band: SavingsBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<ExpenseEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub tip: String,
}

impl ExportDocument {
    /// Build the document from a record and an analysis of it
    pub fn build(record: &FinancialRecord, analysis: &Analysis) -> TrackerResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user: UserInfo {
                record_id: record.id,
                name: record.name.clone(),
                contact: record.contact.clone(),
                profile: record.profile,
                income_label: record.profile.income_label().to_string(),
                income: record.income,
            },
            expenses: record.expenses.clone(),
            summary: ExpenseSummary::generate(record)?,
            analysis: AnalysisSection {
                savings_ratio: analysis.savings_ratio,
                band: analysis.band,
                insight: analysis.insight(),
                dominant: analysis.dominant,
                recommendation: analysis
                    .recommend_savings_category
                    .then(|| SAVINGS_RECOMMENDATION.to_string()),
                tip: analysis.tip.to_string(),
            },
        })
    }
}

/// Write the document as JSON
pub fn export_json<W: Write>(
    document: &ExportDocument,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, document)
    } else {
        serde_json::to_writer(&mut *writer, document)
    };
    written.map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
