//! Session management
//!
//! A [`Session`] exclusively owns the one record a user works on, from
//! profile selection through logout. [`run_interactive`] drives a session
//! over any line-oriented input and output.

pub mod interactive;
pub mod state;

pub use interactive::run_interactive;
pub use state::{Session, SessionStage};
