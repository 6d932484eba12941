//! Financial record model
//!
//! A record is created once at registration and lives for one session. Only
//! its expense collection ever changes, and always wholesale. Every metric
//! here is recomputed from the current expenses on each call.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::expense::ExpenseEntry;
use super::ids::RecordId;
use super::money::Money;
use super::profile::ProfileType;
use crate::error::{TrackerError, TrackerResult};

/// Savings ratio below which spending counts as overspending
pub const OVERSPENDING_THRESHOLD: f64 = 0.0;

/// Savings ratio at or above which the user is on target
pub const SAVINGS_TARGET: f64 = 20.0;

/// Severity band for a signed savings ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsBand {
    /// Ratio below 0: spending exceeds income
    Overspending,
    /// 0 <= ratio < 20
    BelowTarget,
    /// Ratio of 20 or more
    OnTarget,
}

impl SavingsBand {
    pub fn classify(ratio: f64) -> Self {
        if ratio < OVERSPENDING_THRESHOLD {
            Self::Overspending
        } else if ratio < SAVINGS_TARGET {
            Self::BelowTarget
        } else {
            Self::OnTarget
        }
    }

    /// Short tag used in exports ("WARNING" / "NOTE" / "EXCELLENT")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Overspending => "WARNING",
            Self::BelowTarget => "NOTE",
            Self::OnTarget => "EXCELLENT",
        }
    }
}

impl fmt::Display for SavingsBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overspending => write!(f, "overspending"),
            Self::BelowTarget => write!(f, "below target"),
            Self::OnTarget => write!(f, "on target"),
        }
    }
}

/// One user's income and expenses for the current period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Session-scoped identifier
    pub id: RecordId,

    pub name: String,

    /// Phone number or other contact, free text
    pub contact: String,

    pub profile: ProfileType,

    /// Pocket money or salary; always positive once registered
    pub income: Money,

    /// Entries with a positive amount, unique per category
    pub expenses: Vec<ExpenseEntry>,
}

impl FinancialRecord {
    /// Create a record with no expenses
    ///
    /// Input is expected to be validated already; see
    /// [`crate::services::registration::RegistrationForm`].
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        profile: ProfileType,
        income: Money,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            contact: contact.into(),
            profile,
            income,
            expenses: Vec::new(),
        }
    }

    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }

    /// Replace the whole expense collection
    ///
    /// Entries with a zero or negative amount are dropped. Categories outside
    /// the profile's set, or repeated categories, reject the whole batch and
    /// leave the current expenses untouched.
    pub fn replace_expenses(
        &mut self,
        entries: impl IntoIterator<Item = ExpenseEntry>,
    ) -> TrackerResult<()> {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if !self.profile.allows(entry.category) {
                return Err(TrackerError::Validation(format!(
                    "'{}' is not a {} expense category",
                    entry.category, self.profile
                )));
            }
            if !seen.insert(entry.category) {
                return Err(TrackerError::duplicate_category(entry.category.name()));
            }
            if entry.amount.is_positive() {
                kept.push(entry);
            }
        }

        self.expenses = kept;
        Ok(())
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses; negative when overspending
    pub fn remaining_balance(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Percentage of income left after expenses, signed
    pub fn savings_ratio(&self) -> TrackerResult<f64> {
        let income = self.positive_income_cents()?;
        Ok(self.remaining_balance().cents() as f64 * 100.0 / income)
    }

    pub fn savings_band(&self) -> TrackerResult<SavingsBand> {
        self.savings_ratio().map(SavingsBand::classify)
    }

    /// Percentage of income consumed by expenses, capped at 100
    pub fn budget_usage_percent(&self) -> TrackerResult<f64> {
        let income = self.positive_income_cents()?;
        Ok((self.total_expenses().cents() as f64 * 100.0 / income).min(100.0))
    }

    /// Entry with the largest amount; the earliest one wins a tie
    pub fn dominant_category(&self) -> Option<&ExpenseEntry> {
        let mut dominant: Option<&ExpenseEntry> = None;
        for entry in &self.expenses {
            match dominant {
                Some(current) if entry.amount > current.amount => dominant = Some(entry),
                None => dominant = Some(entry),
                _ => {}
            }
        }
        dominant
    }

    /// True for an employee with expenses but nothing under Savings or Investments
    pub fn missing_savings_category(&self) -> bool {
        self.profile == ProfileType::Employee
            && self.has_expenses()
            && !self.expenses.iter().any(|e| e.category.is_saving())
    }

    /// Share of total expenses taken by `entry`, in percent
    pub fn share_of_expenses(&self, entry: &ExpenseEntry) -> f64 {
        let total = self.total_expenses();
        if total.is_zero() {
            0.0
        } else {
            entry.amount.as_f64() / total.as_f64() * 100.0
        }
    }

    fn positive_income_cents(&self) -> TrackerResult<f64> {
        if self.income.is_positive() {
            Ok(self.income.cents() as f64)
        } else {
            Err(TrackerError::DivisionByZero(self.income.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn record(profile: ProfileType, income_cents: i64) -> FinancialRecord {
        FinancialRecord::new("Asha Rao", "98450 12345", profile, Money::from_cents(income_cents))
    }

    fn entry(category: Category, cents: i64) -> ExpenseEntry {
        ExpenseEntry::new(category, Money::from_cents(cents))
    }

    #[test]
    fn test_new_record_is_empty() {
        let r = record(ProfileType::Student, 50000);
        assert!(!r.has_expenses());
        assert_eq!(r.total_expenses(), Money::zero());
        assert_eq!(r.remaining_balance(), Money::from_cents(50000));
        assert!(r.dominant_category().is_none());
    }

    #[test]
    fn test_total_and_remaining() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([
            entry(Category::Food, 30050),
            entry(Category::Transport, 12025),
        ])
        .unwrap();

        assert_eq!(r.total_expenses(), Money::from_cents(42075));
        assert_eq!(r.remaining_balance(), Money::from_cents(57925));
    }

    #[test]
    fn test_remaining_negative_when_overspending() {
        let mut r = record(ProfileType::Student, 10000);
        r.replace_expenses([entry(Category::Food, 10001)]).unwrap();
        assert!(r.remaining_balance().is_negative());

        r.replace_expenses([entry(Category::Food, 10000)]).unwrap();
        assert!(r.remaining_balance().is_zero());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(SavingsBand::classify(-0.0001), SavingsBand::Overspending);
        assert_eq!(SavingsBand::classify(0.0), SavingsBand::BelowTarget);
        assert_eq!(SavingsBand::classify(19.999), SavingsBand::BelowTarget);
        assert_eq!(SavingsBand::classify(20.0), SavingsBand::OnTarget);
        assert_eq!(SavingsBand::classify(100.0), SavingsBand::OnTarget);
    }

    #[test]
    fn test_savings_ratio() {
        let mut r = record(ProfileType::Employee, 10000);
        r.replace_expenses([entry(Category::Rent, 8000)]).unwrap();
        assert!((r.savings_ratio().unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(r.savings_band().unwrap(), SavingsBand::OnTarget);
    }

    #[test]
    fn test_usage_clamps_but_ratio_does_not() {
        let mut r = record(ProfileType::Student, 10000);
        r.replace_expenses([entry(Category::Food, 15000)]).unwrap();

        assert_eq!(r.budget_usage_percent().unwrap(), 100.0);
        assert!((r.savings_ratio().unwrap() + 50.0).abs() < 1e-9);
        assert_eq!(r.savings_band().unwrap(), SavingsBand::Overspending);
    }

    #[test]
    fn test_usage_without_expenses() {
        let r = record(ProfileType::Student, 10000);
        assert_eq!(r.budget_usage_percent().unwrap(), 0.0);
    }

    #[test]
    fn test_non_positive_income_is_rejected() {
        let r = record(ProfileType::Student, 0);
        assert!(matches!(r.savings_ratio(), Err(TrackerError::DivisionByZero(_))));
        assert!(matches!(
            r.budget_usage_percent(),
            Err(TrackerError::DivisionByZero(_))
        ));

        let r = record(ProfileType::Student, -500);
        assert!(r.savings_band().is_err());
    }

    #[test]
    fn test_dominant_first_seen_wins_tie() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([entry(Category::Food, 5000), entry(Category::Transport, 5000)])
            .unwrap();
        assert_eq!(r.dominant_category().unwrap().category, Category::Food);
    }

    #[test]
    fn test_dominant_picks_largest() {
        let mut r = record(ProfileType::Employee, 100000);
        r.replace_expenses([
            entry(Category::Rent, 100),
            entry(Category::Groceries, 300),
            entry(Category::Utilities, 300),
            entry(Category::Savings, 200),
        ])
        .unwrap();
        assert_eq!(r.dominant_category().unwrap().category, Category::Groceries);
    }

    #[test]
    fn test_missing_savings_flag() {
        let mut employee = record(ProfileType::Employee, 100000);
        assert!(!employee.missing_savings_category());

        employee.replace_expenses([entry(Category::Rent, 10000)]).unwrap();
        assert!(employee.missing_savings_category());

        employee.replace_expenses([entry(Category::Savings, 1000)]).unwrap();
        assert!(!employee.missing_savings_category());

        employee
            .replace_expenses([entry(Category::Rent, 1000), entry(Category::Investments, 1000)])
            .unwrap();
        assert!(!employee.missing_savings_category());

        let mut student = record(ProfileType::Student, 100000);
        student.replace_expenses([entry(Category::Food, 10000)]).unwrap();
        assert!(!student.missing_savings_category());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([entry(Category::Food, 1000), entry(Category::Transport, 2000)])
            .unwrap();
        r.replace_expenses([entry(Category::Entertainment, 500)]).unwrap();

        assert_eq!(r.expenses, vec![entry(Category::Entertainment, 500)]);
        assert_eq!(r.total_expenses(), Money::from_cents(500));
    }

    #[test]
    fn test_replace_drops_non_positive() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([
            entry(Category::Food, 0),
            entry(Category::Transport, -100),
            entry(Category::Stationary, 250),
        ])
        .unwrap();
        assert_eq!(r.expenses, vec![entry(Category::Stationary, 250)]);
    }

    #[test]
    fn test_replace_rejects_foreign_category() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([entry(Category::Food, 100)]).unwrap();

        let err = r.replace_expenses([entry(Category::Rent, 100)]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(r.expenses, vec![entry(Category::Food, 100)]);
    }

    #[test]
    fn test_replace_rejects_duplicates() {
        let mut r = record(ProfileType::Student, 100000);
        let err = r
            .replace_expenses([entry(Category::Food, 100), entry(Category::Food, 200)])
            .unwrap_err();
        assert!(matches!(err, TrackerError::Duplicate { .. }));
        assert!(r.expenses.is_empty());
    }

    #[test]
    fn test_share_of_expenses() {
        let mut r = record(ProfileType::Student, 100000);
        r.replace_expenses([entry(Category::Food, 7500), entry(Category::Transport, 2500)])
            .unwrap();
        let shares: Vec<f64> = r.expenses.iter().map(|e| r.share_of_expenses(e)).collect();
        assert!((shares[0] - 75.0).abs() < 1e-9);
        assert!((shares[1] - 25.0).abs() < 1e-9);
    }
}
