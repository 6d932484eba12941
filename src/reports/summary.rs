//! Expense Summary
//!
//! Income, totals, budget usage and the proportional breakdown of a record.

use std::io::Write;

use serde::Serialize;

use crate::display::{format_bar, format_breakdown_table, format_percentage, label_value, separator};
use crate::error::TrackerResult;
use crate::models::{Category, FinancialRecord, Money, ProfileType};

const REPORT_WIDTH: usize = 50;
const USAGE_BAR_WIDTH: usize = 30;

/// Message shown in place of the breakdown for an empty record
pub const NO_EXPENSES_MESSAGE: &str =
    "No expenses recorded yet. Add your expenses to see a breakdown.";

/// One category's slice of total expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub category: Category,
    pub amount: Money,
    /// Percentage of total expenses
    pub share_percent: f64,
}

/// Summary of a record's income and spending
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    pub profile: ProfileType,
    pub income: Money,
    pub total_expenses: Money,
    pub remaining_balance: Money,
    /// Percentage of income used, capped at 100
    pub budget_usage_percent: f64,
    /// Slices in entry order
    pub breakdown: Vec<BreakdownSlice>,
}

impl ExpenseSummary {
    /// Generate a summary from the record's current expenses
    pub fn generate(record: &FinancialRecord) -> TrackerResult<Self> {
        let breakdown = record
            .expenses
            .iter()
            .map(|entry| BreakdownSlice {
                category: entry.category,
                amount: entry.amount,
                share_percent: record.share_of_expenses(entry),
            })
            .collect();

        Ok(Self {
            profile: record.profile,
            income: record.income,
            total_expenses: record.total_expenses(),
            remaining_balance: record.remaining_balance(),
            budget_usage_percent: record.budget_usage_percent()?,
            breakdown,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for (label, amount) in [
            (format!("{}:", self.profile.income_label()), self.income),
            ("Total Expenses:".to_string(), self.total_expenses),
            ("Remaining Balance:".to_string(), self.remaining_balance),
        ] {
            output.push_str(&label_value(
                &label,
                &amount.format_with_symbol(currency),
                REPORT_WIDTH,
            ));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&label_value(
            "Budget Usage",
            &format_percentage(self.budget_usage_percent),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&format_bar(self.budget_usage_percent, 100.0, USAGE_BAR_WIDTH));
        output.push_str("\n\n");

        if self.breakdown.is_empty() {
            output.push_str(NO_EXPENSES_MESSAGE);
            output.push('\n');
        } else {
            output.push_str("Expense Breakdown\n");
            output.push_str(&format_breakdown_table(&self.breakdown, currency));
            output.push('\n');
        }

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Amount", "Share"])?;

        for slice in &self.breakdown {
            csv_writer.write_record([
                slice.category.name().to_string(),
                format!("{:.2}", slice.amount.as_f64()),
                format!("{:.2}", slice.share_percent),
            ])?;
        }

        csv_writer.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total_expenses.as_f64()),
            if self.breakdown.is_empty() { "0.00" } else { "100.00" }.to_string(),
        ])?;
        csv_writer.flush()?;

        Ok(())
    }
}
