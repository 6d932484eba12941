//! spend-tracker - personal expense tracking for students and employees
//!
//! A session registers one person (a student on weekly pocket money or an
//! employee on a monthly salary), collects their expenses against a fixed
//! set of categories, and derives totals, savings insights and a
//! downloadable report. Nothing about the record outlives the session.
//!
//! # Architecture
//!
//! - `models`: money, profiles, categories and the financial record
//! - `services`: registration, the expense sheet and advisory text
//! - `reports`: expense summary and financial analysis
//! - `display`: terminal formatting helpers
//! - `export`: text, JSON, YAML and CSV artifacts
//! - `session`: the session state machine and interactive driver
//! - `audit`: append-only session audit log
//! - `config`: paths and settings
//! - `cli`: command handlers for the `spend` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use spend_tracker::config::Settings;
//! use spend_tracker::models::ProfileType;
//! use spend_tracker::session::Session;
//!
//! let mut session = Session::without_audit(Settings::default());
//! session.choose_profile(ProfileType::Student)?;
//! session.register("Asha Rao", "98450 12345", "500")?;
//! let summary = session.summary()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;

pub use error::{TrackerError, TrackerResult};
