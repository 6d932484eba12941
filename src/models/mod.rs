//! Core data models for spend-tracker
//!
//! This module contains the data structures of the expense domain: profile
//! types, expense categories, money amounts and the per-session financial
//! record with its derived metrics.

pub mod expense;
pub mod ids;
pub mod money;
pub mod profile;
pub mod record;

pub use expense::ExpenseEntry;
pub use ids::RecordId;
pub use money::{Money, MoneyParseError, DEFAULT_CURRENCY};
pub use profile::{Category, ProfileType};
pub use record::{FinancialRecord, SavingsBand, SAVINGS_TARGET};
