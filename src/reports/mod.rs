//! Reports for spend-tracker
//!
//! - Expense summary: totals, budget usage and the category breakdown
//! - Financial analysis: savings band, insights and a money-saving tip

pub mod analysis;
pub mod summary;

pub use analysis::Analysis;
pub use summary::{BreakdownSlice, ExpenseSummary};
