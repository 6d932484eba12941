//! Service layer for spend-tracker
//!
//! The collaborators that sit between user input and the financial record:
//! registration, expense entry, and advisory text.

pub mod advisory;
pub mod expense;
pub mod registration;

pub use expense::ExpenseSheet;
pub use registration::RegistrationForm;
