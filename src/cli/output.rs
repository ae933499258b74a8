// Human-readable rendering of command results

use chrono::NaiveDate;

use crate::models::{TimeCodeRegistry, TrackedDuration};
use crate::report::{PtoSummary, Report, ReportType};

/// Confirmation line for a successful track
pub fn format_tracked(duration: TrackedDuration, code: &str, date: NaiveDate) -> String {
    format!("Tracked {} hours for time code '{}' on {}", duration, code, date)
}

/// Render a report, or the "nothing tracked" notice when it has no days
pub fn format_report(report: &Report) -> String {
    if report.is_empty() {
        return match report.report_type {
            ReportType::Daily => format!("No hours tracked for {}", report.date),
            other => format!(
                "No hours tracked for the {} starting from {} to {}",
                other.as_str(),
                report.start,
                report.end
            ),
        };
    }

    let mut lines = vec![format!("{} report for {}:", report.report_type.title(), report.date)];
    for day in &report.days {
        lines.push(format!("Date: {}", day.date));
        for (code, duration) in &day.entries {
            lines.push(format!("  - {}: {}", code, duration));
        }
    }
    lines.join("\n")
}

pub fn format_pto_summary(summary: &PtoSummary) -> String {
    [
        "PTO Report:".to_string(),
        format!("  - Total Working Hours: {:.2} hours", summary.total_working_hours),
        format!("  - Total PTO Earned: {:.2} hours", summary.earned_hours),
        format!("  - Total PTO Used: {:.2} hours", summary.used_hours),
        format!("  - PTO Remaining: {:.2} hours", summary.remaining_hours),
    ]
    .join("\n")
}

pub fn format_code_list(codes: &TimeCodeRegistry) -> String {
    if codes.is_empty() {
        return "No time codes registered. Add one with 'ht add_code <new_code>'.".to_string();
    }
    let mut lines = vec!["Time codes:".to_string()];
    lines.extend(codes.iter().map(|code| format!("  - {}", code)));
    lines.join("\n")
}
