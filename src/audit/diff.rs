//! Diff generation for audit logging
//!
//! Summarises how an expense save changed a record's entries.

use crate::models::{Category, ExpenseEntry, Money};

/// Describe the change between two expense lists
///
/// Each changed category is listed as `Food: Rs0.00 -> Rs120.00`, with a
/// missing entry counted as zero. Categories keep the order in which they
/// first appear, `before` first. Returns `None` when nothing changed.
pub fn expense_diff(
    before: &[ExpenseEntry],
    after: &[ExpenseEntry],
    currency: &str,
) -> Option<String> {
    let amount_in = |entries: &[ExpenseEntry], category: Category| {
        entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.amount)
            .unwrap_or(Money::zero())
    };

    let mut seen: Vec<Category> = Vec::new();
    let mut changes = Vec::new();

    for category in before.iter().chain(after).map(|e| e.category) {
        if seen.contains(&category) {
            continue;
        }
        seen.push(category);

        let old = amount_in(before, category);
        let new = amount_in(after, category);
        if old != new {
            changes.push(format!(
                "{}: {} -> {}",
                category,
                old.format_with_symbol(currency),
                new.format_with_symbol(currency)
            ));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}
