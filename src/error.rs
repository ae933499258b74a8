// Error types for Hour Tracker

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by ledger operations
///
/// The first six variants are user-input errors: they are reported with the
/// usage reminder and exit code 1. The rest are internal failures.
#[derive(Debug, Error)]
pub enum HtError {
    #[error("Invalid duration format. Use 'XhYm', 'Xh', or 'Ym' format.")]
    DurationFormat,

    #[error("Invalid time code '{code}'. Please add the time code first.{}", format_suggestions(.suggestions))]
    InvalidTimeCode {
        code: String,
        suggestions: Vec<String>,
    },

    #[error("Cannot track hours. Total hours for {date} would exceed the {limit_hours}-hour limit.")]
    DailyCapExceeded { date: NaiveDate, limit_hours: u32 },

    #[error("Invalid report type '{0}'. Available options are 'daily', 'weekly', 'monthly', 'yearly'")]
    InvalidReportType(String),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD, 'today' or 'yesterday'.")]
    InvalidDate(String),

    #[error("Invalid configuration {0}")]
    InvalidConfig(String),

    #[error("Error loading tracked hours: {0}")]
    PersistenceLoad(String),

    #[error("Failed to write tracked hours to {}", .path.display())]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HtError {
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            HtError::DurationFormat
                | HtError::InvalidTimeCode { .. }
                | HtError::DailyCapExceeded { .. }
                | HtError::InvalidReportType(_)
                | HtError::InvalidDate(_)
                | HtError::InvalidConfig(_)
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" Did you mean: {}?", suggestions.join(", "))
    }
}
