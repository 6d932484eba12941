//! Record arguments shared by the one-shot commands
//!
//! `report` and `export` describe a whole record on the command line and
//! run it through a short-lived session.

use clap::Args;

use crate::error::TrackerResult;
use crate::models::ProfileType;
use crate::session::Session;

/// Parse a profile argument ("student" or "employee")
pub fn parse_profile(s: &str) -> Result<ProfileType, String> {
    ProfileType::parse(s).ok_or_else(|| format!("unknown profile '{}' (student or employee)", s))
}

/// A record described entirely by flags
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Profile type (student or employee)
    #[arg(short, long, value_parser = parse_profile)]
    pub profile: ProfileType,

    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Phone number
    #[arg(short, long)]
    pub contact: String,

    /// Weekly pocket money or monthly salary (e.g., "500" or "500.00")
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: String,

    /// Expense as CATEGORY=AMOUNT (repeatable, e.g., "Dining Out=120")
    #[arg(short, long = "expense", value_name = "CATEGORY=AMOUNT")]
    pub expenses: Vec<String>,
}

impl RecordArgs {
    /// Register these arguments in `session` and save their expenses
    pub fn open_in(&self, session: &mut Session) -> TrackerResult<()> {
        session.choose_profile(self.profile)?;
        session.register(&self.name, &self.contact, &self.income)?;

        let mut sheet = session.expense_sheet()?;
        for assignment in &self.expenses {
            sheet.apply_assignment(assignment)?;
        }
        if sheet.total().is_positive() {
            session.save_expenses(&sheet)?;
        }

        Ok(())
    }
}
