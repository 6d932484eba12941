use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spend_tracker::cli::{
    handle_categories_command, handle_export_command, handle_log_command, handle_report_command,
    handle_session_command, parse_profile, RecordArgs, ReportView,
};
use spend_tracker::config::{Settings, TrackerPaths};
use spend_tracker::export::ExportFormat;
use spend_tracker::models::ProfileType;

#[derive(Parser)]
#[command(
    name = "spend",
    version,
    about = "Personal expense tracker for students and employees",
    long_about = "spend-tracker records a week's pocket money or a month's salary \
                  against a fixed set of expense categories, then reports how much \
                  is left, where most of it went, and whether you are saving enough."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Print the summary and/or analysis for a record
    Report {
        #[command(flatten)]
        record: RecordArgs,

        /// Which report to show
        #[arg(long, value_enum, default_value = "all")]
        view: ReportView,
    },

    /// Export a record as a downloadable report
    Export {
        #[command(flatten)]
        record: RecordArgs,

        /// Export format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Directory to write into (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the report instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List the expense categories for a profile
    Categories {
        /// Profile type (student or employee); all when omitted
        #[arg(short, long, value_parser = parse_profile)]
        profile: Option<ProfileType>,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => handle_session_command(&paths, &settings)?,
        Commands::Report { record, view } => handle_report_command(&settings, &record, view)?,
        Commands::Export {
            record,
            format,
            output,
            stdout,
        } => handle_export_command(&paths, &settings, &record, format, output, stdout)?,
        Commands::Categories { profile } => handle_categories_command(profile),
        Commands::Config => {
            println!("spend-tracker Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Contact in file names: {}",
                settings.include_contact_in_file_name
            );
            println!("  Audit log enabled:     {}", settings.audit_enabled);
        }
        Commands::Log { limit } => handle_log_command(&paths, limit)?,
    }

    Ok(())
}
