//! Expense entry service
//!
//! An [`ExpenseSheet`] holds one amount slot per category of the active
//! profile. Saving it replaces the record's expense collection.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, ExpenseEntry, FinancialRecord, Money, ProfileType};

/// Editable amounts for every category slot of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSheet {
    profile: ProfileType,
    slots: Vec<(Category, Money)>,
}

impl ExpenseSheet {
    /// Empty sheet: every slot at zero
    pub fn new(profile: ProfileType) -> Self {
        Self {
            profile,
            slots: profile
                .categories()
                .iter()
                .map(|&c| (c, Money::zero()))
                .collect(),
        }
    }

    /// Sheet prefilled with the record's current expenses
    pub fn for_record(record: &FinancialRecord) -> Self {
        let mut sheet = Self::new(record.profile);
        for entry in &record.expenses {
            if let Some(slot) = sheet.slot_mut(entry.category) {
                slot.1 = entry.amount;
            }
        }
        sheet
    }

    /// Slots in the profile's category order
    pub fn slots(&self) -> &[(Category, Money)] {
        &self.slots
    }

    pub fn amount(&self, category: Category) -> Option<Money> {
        self.slots
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
    }

    /// Set a slot's amount; negative amounts are stored as zero
    pub fn set_amount(&mut self, category: Category, amount: Money) -> TrackerResult<()> {
        let profile = self.profile;
        let slot = self.slot_mut(category).ok_or_else(|| {
            TrackerError::Validation(format!(
                "'{}' is not a {} expense category",
                category, profile
            ))
        })?;
        slot.1 = if amount.is_negative() {
            Money::zero()
        } else {
            amount
        };
        Ok(())
    }

    /// Set a slot from user text
    ///
    /// Text that doesn't parse as a number counts as zero, as do negative
    /// values. Returns the amount actually stored.
    pub fn set_amount_text(&mut self, category: Category, text: &str) -> TrackerResult<Money> {
        let amount = Money::parse(text).unwrap_or_default();
        self.set_amount(category, amount)?;
        self.amount(category)
            .ok_or_else(|| TrackerError::Validation(format!("Unknown category '{}'", category)))
    }

    /// Parse a `CATEGORY=AMOUNT` assignment and apply it
    pub fn apply_assignment(&mut self, assignment: &str) -> TrackerResult<Money> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            TrackerError::Validation(format!(
                "Expected CATEGORY=AMOUNT, got '{}'",
                assignment
            ))
        })?;
        let category = Category::parse(name)
            .ok_or_else(|| TrackerError::Validation(format!("Unknown category '{}'", name.trim())))?;
        self.set_amount_text(category, value)
    }

    /// Total over all slots
    pub fn total(&self) -> Money {
        self.slots.iter().map(|(_, amount)| *amount).sum()
    }

    /// Entries with a positive amount, in slot order
    pub fn entries(&self) -> Vec<ExpenseEntry> {
        self.slots
            .iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|&(category, amount)| ExpenseEntry::new(category, amount))
            .collect()
    }

    /// Replace the record's expenses with this sheet's non-zero slots
    pub fn save_into(&self, record: &mut FinancialRecord) -> TrackerResult<()> {
        if record.profile != self.profile {
            return Err(TrackerError::Validation(format!(
                "Sheet is for a {} but the record belongs to a {}",
                self.profile, record.profile
            )));
        }
        record.replace_expenses(self.entries())
    }

    fn slot_mut(&mut self, category: Category) -> Option<&mut (Category, Money)> {
        self.slots.iter_mut().find(|(c, _)| *c == category)
    }
}
