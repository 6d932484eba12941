//! Plain-text export
//!
//! The flat report users download: user information, expense details and,
//! once something has been spent, a summary and analysis section.

use std::fmt::Write as _;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{FinancialRecord, Money};
use crate::services::advisory::{tagged_insight, REDUCE_SPENDING_HINT, SAVINGS_RECOMMENDATION};

pub const USER_INFORMATION_HEADER: &str = "===== USER INFORMATION =====";
pub const EXPENSE_DETAILS_HEADER: &str = "===== EXPENSE DETAILS =====";
pub const SUMMARY_HEADER: &str = "===== SUMMARY =====";
pub const ANALYSIS_HEADER: &str = "===== FINANCIAL ANALYSIS =====";

/// Render the text report for a record with an already chosen tip
pub fn render_text(record: &FinancialRecord, currency: &str, tip: &str) -> TrackerResult<String> {
    let ratio = if record.has_expenses() {
        Some(record.savings_ratio()?)
    } else {
        None
    };

    let mut out = String::new();
    write_report(&mut out, record, currency, tip, ratio)
        .map_err(|e| TrackerError::Export(format!("Failed to format report: {}", e)))?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    record: &FinancialRecord,
    currency: &str,
    tip: &str,
    ratio: Option<f64>,
) -> std::fmt::Result {
    let money = |m: Money| m.format_with_symbol(currency);

    writeln!(out, "{}", USER_INFORMATION_HEADER)?;
    writeln!(out, "Name: {}", record.name)?;
    writeln!(out, "Phone: {}", record.contact)?;
    writeln!(out, "{}: {}", record.profile.income_label(), money(record.income))?;

    writeln!(out, "\n{}", EXPENSE_DETAILS_HEADER)?;
    let Some(ratio) = ratio else {
        writeln!(out, "No expenses recorded yet.")?;
        return Ok(());
    };
    for entry in &record.expenses {
        writeln!(out, "{}: {}", entry.category, money(entry.amount))?;
    }

    writeln!(out, "\n{}", SUMMARY_HEADER)?;
    writeln!(out, "Total Expenses: {}", money(record.total_expenses()))?;
    writeln!(out, "Remaining Balance: {}", money(record.remaining_balance()))?;

    writeln!(out, "\n{}", ANALYSIS_HEADER)?;
    writeln!(out, "{}", tagged_insight(record.profile, ratio))?;

    if let Some(entry) = record.dominant_category() {
        writeln!(
            out,
            "\nHighest Spending Category: {} ({})",
            entry.category,
            money(entry.amount)
        )?;
        writeln!(out, "{}", REDUCE_SPENDING_HINT)?;
    }

    if record.missing_savings_category() {
        writeln!(out, "\nRECOMMENDATION: {}", SAVINGS_RECOMMENDATION)?;
    }

    writeln!(out, "\nMONEY-SAVING TIP: \"{}\"", tip)?;
    Ok(())
}
