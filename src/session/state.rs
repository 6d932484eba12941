//! Session state machine
//!
//! `Unset -> Registering(profile) -> Active(record)`, and back to `Unset`
//! on logout. Every operation that needs a record checks the stage first.

use std::path::PathBuf;

use rand::Rng;

use crate::audit::{expense_diff, AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{build_artifact, ArtifactSink, ExportFormat, ExportOptions};
use crate::models::{FinancialRecord, ProfileType};
use crate::reports::{Analysis, ExpenseSummary};
use crate::services::{ExpenseSheet, RegistrationForm};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionStage {
    /// No profile chosen yet
    #[default]
    Unset,
    /// Profile chosen, registration pending
    Registering(ProfileType),
    /// Registered; the record is live
    Active(FinancialRecord),
}

/// One user's session
#[derive(Debug)]
pub struct Session {
    stage: SessionStage,
    settings: Settings,
    audit: Option<AuditLogger>,
}

impl Session {
    /// Start an unset session; auditing follows `settings.audit_enabled`
    pub fn new(paths: &TrackerPaths, settings: Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            stage: SessionStage::Unset,
            settings,
            audit,
        }
    }

    /// A session that never writes an audit log
    pub fn without_audit(settings: Settings) -> Self {
        Self {
            stage: SessionStage::Unset,
            settings,
            audit: None,
        }
    }

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The live record, if registered
    pub fn record(&self) -> Option<&FinancialRecord> {
        match &self.stage {
            SessionStage::Active(record) => Some(record),
            _ => None,
        }
    }

    /// Pick (or re-pick) the profile to register under
    pub fn choose_profile(&mut self, profile: ProfileType) -> TrackerResult<()> {
        if let SessionStage::Active(_) = self.stage {
            return Err(TrackerError::Session(
                "Log out before choosing another profile".into(),
            ));
        }
        self.stage = SessionStage::Registering(profile);
        Ok(())
    }

    /// Validate the registration fields and activate the session
    ///
    /// On failure the stage is unchanged and every failing field is
    /// reported in a [`TrackerError::Registration`].
    pub fn register(&mut self, name: &str, contact: &str, income_text: &str) -> TrackerResult<()> {
        let SessionStage::Registering(profile) = self.stage else {
            return Err(TrackerError::Session(
                "Choose a profile before registering".into(),
            ));
        };

        let record = RegistrationForm::new(profile, name, contact, income_text).register()?;
        self.log(|| AuditEntry::register(&record))?;
        self.stage = SessionStage::Active(record);
        Ok(())
    }

    /// Sheet prefilled with the record's current expenses
    pub fn expense_sheet(&self) -> TrackerResult<ExpenseSheet> {
        Ok(ExpenseSheet::for_record(self.active()?))
    }

    /// Replace the record's expenses with the sheet's positive entries
    pub fn save_expenses(&mut self, sheet: &ExpenseSheet) -> TrackerResult<()> {
        let SessionStage::Active(record) = &mut self.stage else {
            return Err(not_registered());
        };

        let before = record.expenses.clone();
        sheet.save_into(record)?;

        let diff = expense_diff(&before, &record.expenses, &self.settings.currency_symbol);
        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::save_expenses(record, diff))?;
        }
        Ok(())
    }

    pub fn summary(&self) -> TrackerResult<ExpenseSummary> {
        ExpenseSummary::generate(self.active()?)
    }

    pub fn analysis<R: Rng + ?Sized>(&self, rng: &mut R) -> TrackerResult<Analysis> {
        Analysis::generate(self.active()?, rng)
    }

    /// Render the record and hand it to `sink`, returning where it went
    pub fn export<R, S>(
        &self,
        format: ExportFormat,
        sink: &mut S,
        rng: &mut R,
    ) -> TrackerResult<PathBuf>
    where
        R: Rng + ?Sized,
        S: ArtifactSink + ?Sized,
    {
        let record = self.active()?;
        let options = ExportOptions {
            format,
            currency: self.settings.currency_symbol.clone(),
            include_contact: self.settings.include_contact_in_file_name,
        };

        let artifact = build_artifact(record, &options, rng)?;
        let path = sink.write_artifact(&artifact.file_name, &artifact.content)?;

        self.log(|| AuditEntry::export(record, path.display().to_string()))?;
        Ok(path)
    }

    /// Discard the record and return to profile selection
    ///
    /// The stage is reset even when the audit entry can't be written.
    pub fn logout(&mut self) -> TrackerResult<()> {
        match std::mem::take(&mut self.stage) {
            SessionStage::Active(record) => self.log(|| AuditEntry::logout(&record)),
            _ => Ok(()),
        }
    }

    fn active(&self) -> TrackerResult<&FinancialRecord> {
        self.record().ok_or_else(not_registered)
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> TrackerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

fn not_registered() -> TrackerError {
    TrackerError::Session("No active record; register first".into())
}
