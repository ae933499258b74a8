use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::cli::abbrev;
use crate::cli::error::{user_error, validate_time_code};
use crate::cli::output::{format_code_list, format_pto_summary, format_report, format_tracked};
use crate::config::Config;
use crate::repo::{CodeRepo, DayRepo};
use crate::report::{PtoSummary, Report, ReportType};
use crate::store::LedgerFile;
use crate::utils::{date, parse_date_expr, parse_duration};

#[derive(Parser)]
#[command(name = "ht")]
#[command(about = "Hour Tracker - track daily hours against time codes and report PTO accrual")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track hours for a specific time code
    Track {
        /// Duration of hours to track (e.g., '2h30m'). Format: XhYm, Xh or Ym
        duration: String,
        /// Time code for tracking hours
        time_code: String,
    },
    /// Generate a report of tracked hours for a specific date or period
    Report {
        /// Date for the report (YYYY-MM-DD, 'today' or 'yesterday')
        #[arg(short = 'd', long)]
        date: String,
        /// Type of report: daily, weekly, monthly, or yearly
        #[arg(short = 't', long = "type", default_value = "daily")]
        report_type: String,
    },
    /// Generate a PTO report
    Pto,
    /// Add a new time code
    #[command(name = "add_code", visible_alias = "add-code")]
    AddCode {
        /// New time code to add
        new_code: String,
    },
    /// List registered time codes
    Codes,
}

pub fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let args = match abbrev::expand_command_abbreviations(args) {
        Ok(expanded) => expanded,
        Err(e) => user_error(&e),
    };

    let clap_args = std::iter::once("ht".to_string()).chain(args);
    let cli = match Cli::try_parse_from(clap_args) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let Some(command) = cli.command else {
        println!("Invalid command. Use --help for usage information.");
        return Ok(());
    };

    let config = Config::resolve(cli.file.as_deref())?;

    let store = LedgerFile::new(&config.data_path);
    match command {
        Commands::Track {
            duration,
            time_code,
        } => handle_track(&store, &config, &duration, &time_code, date::today()),
        Commands::Report { date, report_type } => handle_report(&store, &date, &report_type),
        Commands::Pto => handle_pto(&store, &config),
        Commands::AddCode { new_code } => handle_add_code(&store, &new_code),
        Commands::Codes => handle_codes(&store),
    }
}

/// Track a duration against a code on `today`, saving only on success
pub fn handle_track(
    store: &LedgerFile,
    config: &Config,
    duration_text: &str,
    time_code: &str,
    today: NaiveDate,
) -> Result<()> {
    let mut state = store.load()?;

    // Unknown codes are reported before the duration is looked at
    DayRepo::ensure_code(&state, time_code)?;
    let duration = parse_duration(duration_text)?;

    DayRepo::track(&mut state, today, duration, time_code, config.daily_cap_hours)?;
    store.save(&state)?;

    println!("{}", format_tracked(duration, time_code, today));
    Ok(())
}

pub fn handle_report(store: &LedgerFile, date_expr: &str, report_type: &str) -> Result<()> {
    let report_type = ReportType::parse(report_type)?;
    let date = parse_date_expr(date_expr)?;
    let state = store.load()?;

    let report = Report::build(&state.tracked_hours, date, report_type)?;
    println!("{}", format_report(&report));
    Ok(())
}

pub fn handle_pto(store: &LedgerFile, config: &Config) -> Result<()> {
    let state = store.load()?;
    let summary = PtoSummary::compute(&state.tracked_hours, config.utilization_rate);
    println!("{}", format_pto_summary(&summary));
    Ok(())
}

pub fn handle_add_code(store: &LedgerFile, new_code: &str) -> Result<()> {
    if let Err(e) = validate_time_code(new_code) {
        user_error(&e);
    }

    let mut state = store.load()?;
    if !CodeRepo::add(&mut state, new_code) {
        println!("Time code '{}' already exists.", new_code);
        return Ok(());
    }

    store.save(&state)?;
    println!("Added new time code '{}'.", new_code);
    Ok(())
}

pub fn handle_codes(store: &LedgerFile) -> Result<()> {
    let state = store.load()?;
    println!("{}", format_code_list(&state.time_codes));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HtError;
    use crate::models::TrackedDuration;
    use clap::CommandFactory;
    use tempfile::TempDir;

    fn setup() -> (TempDir, LedgerFile) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerFile::new(temp_dir.path().join("tracked_hours.json"));
        (temp_dir, store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_defaults_to_daily() {
        let cli = Cli::try_parse_from(["ht", "report", "-d", "2023-06-01"]).unwrap();
        match cli.command {
            Some(Commands::Report { date, report_type }) => {
                assert_eq!(date, "2023-06-01");
                assert_eq!(report_type, "daily");
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_parse_add_code_aliases() {
        for name in ["add_code", "add-code"] {
            let cli = Cli::try_parse_from(["ht", name, "PTO"]).unwrap();
            assert!(matches!(cli.command, Some(Commands::AddCode { new_code }) if new_code == "PTO"));
        }
    }

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["ht"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_track_persists_state() {
        let (_dir, store) = setup();
        handle_add_code(&store, "PROJECT_X").unwrap();
        handle_track(&store, &Config::default(), "2h30m", "PROJECT_X", today()).unwrap();

        let state = store.load().unwrap();
        assert_eq!(
            state.tracked_hours.day(today()).unwrap()["PROJECT_X"],
            TrackedDuration::from_secs(9000)
        );
    }

    #[test]
    fn test_track_failure_writes_nothing() {
        let (_dir, store) = setup();
        handle_add_code(&store, "PROJECT_X").unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let err = handle_track(&store, &Config::default(), "1h", "UNKNOWN", today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HtError>(),
            Some(HtError::InvalidTimeCode { .. })
        ));

        let err = handle_track(&store, &Config::default(), "13h", "PROJECT_X", today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HtError>(),
            Some(HtError::DailyCapExceeded { .. })
        ));

        let err = handle_track(&store, &Config::default(), "abc", "PROJECT_X", today()).unwrap_err();
        assert!(matches!(err.downcast_ref::<HtError>(), Some(HtError::DurationFormat)));

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_unknown_code_reported_before_bad_duration() {
        let (_dir, store) = setup();
        let err = handle_track(&store, &Config::default(), "abc", "UNKNOWN", today()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HtError>(),
            Some(HtError::InvalidTimeCode { .. })
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_report_rejects_unknown_type() {
        let (_dir, store) = setup();
        let err = handle_report(&store, "2023-06-01", "hourly").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HtError>(),
            Some(HtError::InvalidReportType(_))
        ));
    }

    #[test]
    fn test_read_only_commands_do_not_create_file() {
        let (_dir, store) = setup();
        handle_report(&store, "2023-06-01", "weekly").unwrap();
        handle_pto(&store, &Config::default()).unwrap();
        handle_codes(&store).unwrap();
        assert!(!store.path().exists());
    }
}
