//! Interactive session driver
//!
//! Line-oriented prompts over any `BufRead`/`Write` pair: profile choice,
//! registration with per-field re-prompting, then the session menu. End of
//! input at any prompt ends the session.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use rand::Rng;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{ArtifactSink, ExportFormat};
use crate::models::ProfileType;

use super::state::Session;

/// Menu choices once registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Expenses,
    Summary,
    Analysis,
    Export,
    Logout,
    Quit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "e" | "expenses" => Some(Self::Expenses),
            "2" | "s" | "summary" => Some(Self::Summary),
            "3" | "a" | "analysis" => Some(Self::Analysis),
            "4" | "x" | "export" => Some(Self::Export),
            "5" | "l" | "logout" => Some(Self::Logout),
            "6" | "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\
  1. Enter expenses
  2. View summary
  3. View analysis
  4. Export report
  5. Logout
  6. Quit";

/// Prompt/answer plumbing over a reader and writer
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, text: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", text).map_err(|e| TrackerError::Io(e.to_string()))
    }

    /// Prompt for a line; `None` once input is exhausted
    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt).map_err(|e| TrackerError::Io(e.to_string()))?;
        self.output
            .flush()
            .map_err(|e| TrackerError::Io(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TrackerError::Io(e.to_string()))?;

        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}

/// How the registration step ended
enum Registration {
    Done,
    EndOfInput,
}

/// Run a session until the user quits or input runs out
pub fn run_interactive<R, W, G, S>(
    session: &mut Session,
    input: R,
    output: W,
    rng: &mut G,
    sink: &mut S,
) -> TrackerResult<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
    S: ArtifactSink + ?Sized,
{
    let mut console = Console { input, output };

    console.say("===========================================")?;
    console.say("  Welcome to spend-tracker")?;
    console.say("===========================================")?;

    loop {
        console.say("")?;
        let Some(profile) = choose_profile(&mut console)? else {
            return Ok(());
        };
        session.choose_profile(profile)?;

        if let Registration::EndOfInput = register(&mut console, session, profile)? {
            return Ok(());
        }

        loop {
            console.say("")?;
            console.say(MENU)?;
            let Some(answer) = console.prompt("Choose an option: ")? else {
                session.logout()?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                console.say("Please choose 1-6.")?;
                continue;
            };

            match choice {
                MenuChoice::Expenses => {
                    if !enter_expenses(&mut console, session)? {
                        session.logout()?;
                        return Ok(());
                    }
                }
                MenuChoice::Summary => {
                    if let Some(summary) = recover(&mut console, session.summary())? {
                        console
                            .say(&summary.format_terminal(&session.settings().currency_symbol))?;
                    }
                }
                MenuChoice::Analysis => {
                    if let Some(analysis) = recover(&mut console, session.analysis(rng))? {
                        console
                            .say(&analysis.format_terminal(&session.settings().currency_symbol))?;
                    }
                }
                MenuChoice::Export => {
                    let Some(answer) = console.prompt("Format (text/json/yaml/csv) [text]: ")?
                    else {
                        session.logout()?;
                        return Ok(());
                    };
                    let format = if answer.is_empty() {
                        ExportFormat::Text
                    } else {
                        match ExportFormat::from_str(&answer, true) {
                            Ok(format) => format,
                            Err(_) => {
                                console.say(&format!("Unknown format '{}'.", answer))?;
                                continue;
                            }
                        }
                    };
                    let exported = session.export(format, sink, rng);
                    if let Some(path) = recover(&mut console, exported)? {
                        console.say(&format!("Report saved to {}", path.display()))?;
                    }
                }
                MenuChoice::Logout => {
                    session.logout()?;
                    console.say("Logged out.")?;
                    break;
                }
                MenuChoice::Quit => {
                    session.logout()?;
                    console.say("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }
}

fn choose_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> TrackerResult<Option<ProfileType>> {
    loop {
        let Some(answer) = console.prompt("Are you a student or an employee? ")? else {
            return Ok(None);
        };
        match ProfileType::parse(&answer) {
            Some(profile) => return Ok(Some(profile)),
            None => console.say("Please answer 'student' or 'employee'.")?,
        }
    }
}

/// Collect the three fields, re-asking only the ones that failed
fn register<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    profile: ProfileType,
) -> TrackerResult<Registration> {
    let income_prompt = format!("{}: ", profile.income_label());
    let mut ask_name = true;
    let mut ask_contact = true;
    let mut ask_income = true;
    let (mut name, mut contact, mut income) = (String::new(), String::new(), String::new());

    loop {
        for (ask, prompt, value) in [
            (ask_name, "Name: ", &mut name),
            (ask_contact, "Phone: ", &mut contact),
            (ask_income, income_prompt.as_str(), &mut income),
        ] {
            if !ask {
                continue;
            }
            match console.prompt(prompt)? {
                Some(answer) => *value = answer,
                None => return Ok(Registration::EndOfInput),
            }
        }

        match session.register(&name, &contact, &income) {
            Ok(()) => {
                console.say(&format!("Welcome, {}!", name.trim()))?;
                return Ok(Registration::Done);
            }
            Err(TrackerError::Registration(errors)) => {
                for error in errors.iter() {
                    console.say(&format!("  ! {}", error))?;
                }
                ask_name = errors.for_field("name").is_some();
                ask_contact = errors.for_field("contact").is_some();
                ask_income = errors.for_field("income").is_some();
            }
            Err(e) => return Err(e),
        }
    }
}

/// Walk every category slot; returns `false` if input ran out
fn enter_expenses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> TrackerResult<bool> {
    let currency = session.settings().currency_symbol.clone();
    let mut sheet = session.expense_sheet()?;

    console.say("Enter an amount for each category (blank keeps the current value).")?;
    let slots = sheet.slots().to_vec();
    for (category, current) in slots {
        let prompt = format!("{} [{}]: ", category, current.format_with_symbol(&currency));
        let Some(answer) = console.prompt(&prompt)? else {
            return Ok(false);
        };
        if !answer.is_empty() {
            sheet.set_amount_text(category, &answer)?;
        }
    }

    if recover(console, session.save_expenses(&sheet))?.is_some() {
        console.say(&format!(
            "Expenses saved. Total: {}",
            sheet.total().format_with_symbol(&currency)
        ))?;
    }
    Ok(true)
}

/// Print an I/O or export failure and carry on with the menu
///
/// Any other error still ends the session.
fn recover<T, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: TrackerResult<T>,
) -> TrackerResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ (TrackerError::Export(_) | TrackerError::Io(_))) => {
            console.say(&format!("Error: {}", e))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MemorySink(Vec<(String, String)>);

    impl ArtifactSink for MemorySink {
        fn write_artifact(&mut self, file_name: &str, content: &str) -> TrackerResult<PathBuf> {
            self.0.push((file_name.to_string(), content.to_string()));
            Ok(PathBuf::from(file_name))
        }
    }

    struct FullDiskSink;

    impl ArtifactSink for FullDiskSink {
        fn write_artifact(&mut self, _file_name: &str, _content: &str) -> TrackerResult<PathBuf> {
            Err(TrackerError::Export("disk full".into()))
        }
    }

    fn run(script: &str) -> (Session, String, MemorySink) {
        let mut session = Session::without_audit(Settings::default());
        let mut output = Vec::new();
        let mut sink = MemorySink::default();
        run_interactive(
            &mut session,
            Cursor::new(script.as_bytes()),
            &mut output,
            &mut StdRng::seed_from_u64(9),
            &mut sink,
        )
        .unwrap();
        (session, String::from_utf8(output).unwrap(), sink)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Expenses));
        assert_eq!(MenuChoice::parse(" Summary "), Some(MenuChoice::Summary));
        assert_eq!(MenuChoice::parse("q"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("7"), None);
    }

    #[test]
    fn test_end_of_input_before_profile() {
        let (session, output, _) = run("");
        assert!(output.contains("Welcome to spend-tracker"));
        assert!(session.record().is_none());
    }

    #[test]
    fn test_invalid_profile_is_reprompted() {
        let (_, output, _) = run("manager\nstudent\n");
        assert!(output.contains("Please answer 'student' or 'employee'."));
        assert!(output.ends_with("Name: "));
    }

    #[test]
    fn test_only_failing_fields_are_reprompted() {
        let (_, output, _) = run("student\nAsha\n\nabc\n98450\n500\n6\n");

        assert!(output.contains("  ! Phone number is required"));
        assert!(output.contains("  ! Please enter a valid positive amount"));
        assert!(!output.contains("Name is required"));
        assert_eq!(output.matches("Name: ").count(), 1);
        assert_eq!(output.matches("Phone: ").count(), 2);
        assert!(output.contains("Welcome, Asha!"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_expenses_summary_and_export() {
        let script = "employee\nRavi Kumar\n98450 12345\n2000\n\
                      1\n800\n\n\n\n\n\n\n\n\
                      2\n3\n4\n\n6\n";
        let (session, output, sink) = run(script);

        assert!(output.contains("Expenses saved. Total: Rs800.00"));
        assert!(output.contains("Expense Summary"));
        assert!(output.contains("Financial Analysis"));
        assert!(output.contains("Report saved to Employee_Ravi_Kumar_9845012345.txt"));
        assert!(sink.0[0].1.contains("Rent: Rs800.00"));
        assert!(session.record().is_none());
    }

    #[test]
    fn test_expense_sheet_is_prefilled() {
        let script = "student\nAsha\n1\n1000\n\
                      1\n120\n-5\nabc\n\n\n\
                      1\n\n\n\n\n\n";
        let mut session = Session::without_audit(Settings::default());
        let mut output = Vec::new();
        run_interactive(
            &mut session,
            Cursor::new(script.as_bytes()),
            &mut output,
            &mut StdRng::seed_from_u64(1),
            &mut MemorySink::default(),
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Expenses saved. Total: Rs120.00"));
        assert!(output.contains("Food [Rs120.00]: "));
        // End of input mid-menu logs the session out
        assert!(session.record().is_none());
    }

    #[test]
    fn test_logout_returns_to_profile_choice() {
        let (_, output, _) = run("student\nAsha\n1\n100\n5\nemployee\n");
        assert!(output.contains("Logged out."));
        assert_eq!(output.matches("Are you a student or an employee? ").count(), 2);
    }

    #[test]
    fn test_unknown_export_format() {
        let (_, output, sink) = run("student\nAsha\n1\n100\n4\npdf\n6\n");
        assert!(output.contains("Unknown format 'pdf'."));
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_failed_export_keeps_menu_running() {
        let script = "student\nAsha\n1\n100\n4\n\n2\n6\n";
        let mut session = Session::without_audit(Settings::default());
        let mut output = Vec::new();
        let result = run_interactive(
            &mut session,
            Cursor::new(script.as_bytes()),
            &mut output,
            &mut StdRng::seed_from_u64(3),
            &mut FullDiskSink,
        );
        let output = String::from_utf8(output).unwrap();

        assert!(result.is_ok());
        let failure = output.find("Error: Export error: disk full").unwrap();
        assert!(output[failure..].contains("Expense Summary"));
        assert!(output.contains("Goodbye!"));
        assert!(session.record().is_none());
    }
}
