//! Expense entry model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::profile::Category;

/// Money spent in one category for the current period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: Category,
    pub amount: Money,
}

impl ExpenseEntry {
    pub fn new(category: Category, amount: Money) -> Self {
        Self { category, amount }
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}
