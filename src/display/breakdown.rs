//! Expense breakdown table
//!
//! Renders the per-category proportions of a summary as a `tabled` table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage};
use crate::reports::summary::BreakdownSlice;

const SHARE_BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format breakdown slices as a table
pub fn format_breakdown_table(slices: &[BreakdownSlice], currency: &str) -> String {
    let rows: Vec<BreakdownRow> = slices
        .iter()
        .map(|slice| BreakdownRow {
            category: slice.category.to_string(),
            amount: slice.amount.format_with_symbol(currency),
            share: format_percentage(slice.share_percent),
            bar: format_bar(slice.share_percent, 100.0, SHARE_BAR_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..3), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_table_contains_rows() {
        let slices = vec![
            BreakdownSlice {
                category: Category::DiningOut,
                amount: Money::from_cents(7500),
                share_percent: 75.0,
            },
            BreakdownSlice {
                category: Category::Rent,
                amount: Money::from_cents(2500),
                share_percent: 25.0,
            },
        ];

        let table = format_breakdown_table(&slices, "Rs");
        assert!(table.contains("Category"));
        assert!(table.contains("Dining Out"));
        assert!(table.contains("Rs75.00"));
        assert!(table.contains("75.0%"));
        assert!(table.contains("Rs25.00"));
    }
}
