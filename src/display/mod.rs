//! Display formatting for terminal output
//!
//! Provides helpers for bars, separators and the breakdown table.

pub mod breakdown;
pub mod format;

pub use breakdown::format_breakdown_table;
pub use format::{format_bar, format_percentage, label_value, separator};
