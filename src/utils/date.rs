// Date expression parsing for report selection

use chrono::{Duration, Local, NaiveDate};

use crate::error::HtError;

/// Parse a calendar date expression relative to `today`
///
/// Supports absolute dates (`2023-06-01`) plus `today` and `yesterday`.
pub fn parse_date_expr_from(expr: &str, today: NaiveDate) -> Result<NaiveDate, HtError> {
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    match expr {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        _ => Err(HtError::InvalidDate(expr.to_string())),
    }
}

/// Parse a calendar date expression relative to the local calendar
pub fn parse_date_expr(expr: &str) -> Result<NaiveDate, HtError> {
    parse_date_expr_from(expr, today())
}

/// Current date on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
