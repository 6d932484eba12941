//! Financial Analysis
//!
//! Savings ratio, spending insight, dominant category and recommendations
//! for a record, plus one money-saving tip.

use rand::Rng;
use serde::Serialize;

use crate::display::{label_value, separator};
use crate::error::TrackerResult;
use crate::models::{ExpenseEntry, FinancialRecord, Money, ProfileType, SavingsBand};
use crate::services::advisory::{
    dominant_message, select_tip, spending_insight, SAVINGS_RECOMMENDATION,
};

const REPORT_WIDTH: usize = 50;

/// Rule-based commentary on a record
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub profile: ProfileType,
    pub income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub savings: Money,
    /// Signed savings ratio in percent
    pub savings_ratio: f64,
    pub band: SavingsBand,
    pub has_expenses: bool,
    pub dominant: Option<ExpenseEntry>,
    pub recommend_savings_category: bool,
    pub tip: &'static str,
}

impl Analysis {
    /// Analyse a record, drawing the tip from `rng`
    pub fn generate<R: Rng + ?Sized>(record: &FinancialRecord, rng: &mut R) -> TrackerResult<Self> {
        let savings_ratio = record.savings_ratio()?;

        Ok(Self {
            profile: record.profile,
            income: record.income,
            total_expenses: record.total_expenses(),
            savings: record.remaining_balance(),
            savings_ratio,
            band: SavingsBand::classify(savings_ratio),
            has_expenses: record.has_expenses(),
            dominant: record.dominant_category().copied(),
            recommend_savings_category: record.missing_savings_category(),
            tip: select_tip(record.profile, rng),
        })
    }

    /// Spending insight sentence; absent when nothing has been spent
    pub fn insight(&self) -> Option<String> {
        self.has_expenses
            .then(|| spending_insight(self.profile, self.savings_ratio))
    }

    /// Format the analysis for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Financial Analysis\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for (label, amount) in [
            (self.profile.income_short_label(), self.income),
            ("Total Expenses", self.total_expenses),
            ("Savings", self.savings),
        ] {
            output.push_str(&label_value(
                label,
                &amount.format_with_symbol(currency),
                REPORT_WIDTH,
            ));
            output.push('\n');
        }

        if let Some(insight) = self.insight() {
            output.push_str(&format!("\nSpending Insight ({})\n  {}\n", self.band, insight));
        }

        if let Some(entry) = &self.dominant {
            output.push_str(&format!(
                "\nHighest Spending Category\n  {}\n",
                dominant_message(entry, currency)
            ));
        }

        if self.recommend_savings_category {
            output.push_str(&format!("\nSavings Recommendation\n  {}\n", SAVINGS_RECOMMENDATION));
        }

        output.push_str(&format!("\nMoney-Saving Tip\n  {}\n", self.tip));

        output
    }
}
