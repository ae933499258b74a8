use chrono::{Datelike, Duration, NaiveDate};

use crate::error::HtError;
use crate::models::{Ledger, TrackedDuration};

/// Report granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Daily => "daily",
            ReportType::Weekly => "weekly",
            ReportType::Monthly => "monthly",
            ReportType::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Result<Self, HtError> {
        match s {
            "daily" => Ok(ReportType::Daily),
            "weekly" => Ok(ReportType::Weekly),
            "monthly" => Ok(ReportType::Monthly),
            "yearly" => Ok(ReportType::Yearly),
            _ => Err(HtError::InvalidReportType(s.to_string())),
        }
    }

    /// Title-cased name, e.g. `Weekly`
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Daily => "Daily",
            ReportType::Weekly => "Weekly",
            ReportType::Monthly => "Monthly",
            ReportType::Yearly => "Yearly",
        }
    }

    /// Inclusive date range covered by a report of this type around `date`
    ///
    /// Weeks run Monday through Sunday. Months and years cover their full
    /// calendar span.
    pub fn range(&self, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            ReportType::Daily => Some((date, date)),
            ReportType::Weekly => {
                let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                Some((start, start + Duration::days(6)))
            }
            ReportType::Monthly => {
                let start = date.with_day(1)?;
                let next_month = if date.month() == 12 {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)?
                };
                Some((start, next_month.pred_opt()?))
            }
            ReportType::Yearly => Some((
                NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(date.year(), 12, 31)?,
            )),
        }
    }
}

/// One date's rounded durations, in the day record's code order
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDay {
    pub date: NaiveDate,
    pub entries: Vec<(String, TrackedDuration)>,
}

/// Report over the recorded days within a period
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub report_type: ReportType,
    pub date: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<ReportDay>,
}

impl Report {
    /// Collect the recorded days around `date`, rounding each duration down
    /// to the nearest quarter hour
    pub fn build(ledger: &Ledger, date: NaiveDate, report_type: ReportType) -> Result<Report, HtError> {
        let (start, end) = report_type
            .range(date)
            .ok_or_else(|| HtError::InvalidDate(date.to_string()))?;

        let days = ledger
            .days_between(start, end)
            .map(|(day, record)| ReportDay {
                date: *day,
                entries: record
                    .iter()
                    .map(|(code, duration)| (code.clone(), duration.round_down_quarter_hour()))
                    .collect(),
            })
            .collect();

        Ok(Report {
            report_type,
            date,
            start,
            end,
            days,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
