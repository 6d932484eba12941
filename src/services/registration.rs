//! Registration service
//!
//! Validates the three registration fields and builds the session's record.

use crate::error::{FieldError, RegistrationErrors};
use crate::models::{FinancialRecord, Money, ProfileType};

/// Raw registration input, as typed by the user
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub profile: ProfileType,
    pub name: String,
    pub contact: String,
    pub income_text: String,
}

impl RegistrationForm {
    pub fn new(
        profile: ProfileType,
        name: impl Into<String>,
        contact: impl Into<String>,
        income_text: impl Into<String>,
    ) -> Self {
        Self {
            profile,
            name: name.into(),
            contact: contact.into(),
            income_text: income_text.into(),
        }
    }

    /// Validate every field
    ///
    /// All failing fields are reported together, each with its own message.
    pub fn validate(&self) -> Result<Money, RegistrationErrors> {
        let mut errors = RegistrationErrors::default();

        if self.name.trim().is_empty() {
            errors.push(FieldError::EmptyName);
        }
        if self.contact.trim().is_empty() {
            errors.push(FieldError::EmptyContact);
        }

        let income = parse_income(&self.income_text);
        if income.is_none() {
            errors.push(FieldError::InvalidIncome);
        }

        match income {
            Some(amount) if errors.is_empty() => Ok(amount),
            _ => Err(errors),
        }
    }

    /// Validate and build a record with no expenses
    pub fn register(&self) -> Result<FinancialRecord, RegistrationErrors> {
        let income = self.validate()?;
        Ok(FinancialRecord::new(
            self.name.trim(),
            self.contact.trim(),
            self.profile,
            income,
        ))
    }
}

/// Income must be a finite number that is still positive after rounding to cents
pub fn parse_income(text: &str) -> Option<Money> {
    Money::parse(text).ok().filter(|m| m.is_positive())
}
