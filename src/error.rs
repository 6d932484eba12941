//! Custom error types for spend-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// A single failing registration field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Name was blank
    #[error("Name is required")]
    EmptyName,

    /// Contact was blank
    #[error("Phone number is required")]
    EmptyContact,

    /// Income text was not a finite positive number
    #[error("Please enter a valid positive amount")]
    InvalidIncome,
}

impl FieldError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::EmptyName => "name",
            FieldError::EmptyContact => "contact",
            FieldError::InvalidIncome => "income",
        }
    }
}

/// Every field error produced by one registration attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors(Vec<FieldError>);

impl RegistrationErrors {
    pub fn push(&mut self, err: FieldError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, err: FieldError) -> bool {
        self.0.contains(&err)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Error for a given field, if that field failed
    pub fn for_field(&self, field: &str) -> Option<FieldError> {
        self.0.iter().copied().find(|e| e.field() == field)
    }
}

impl fmt::Display for RegistrationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field(), e))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// The main error type for spend-tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Registration form failed on one or more fields
    #[error("Registration failed: {0}")]
    Registration(RegistrationErrors),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A ratio was requested against a non-positive income
    #[error("Cannot compute ratio: income must be positive, got {0}")]
    DivisionByZero(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Operation not valid in the current session stage
    #[error("Session error: {0}")]
    Session(String),
}

impl TrackerError {
    /// Create a "duplicate" error for expense categories
    pub fn duplicate_category(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Expense category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Registration(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TrackerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<RegistrationErrors> for TrackerError {
    fn from(errs: RegistrationErrors) -> Self {
        Self::Registration(errs)
    }
}

/// Result type alias for spend-tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
