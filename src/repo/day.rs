use chrono::NaiveDate;

use crate::error::HtError;
use crate::models::{DayRecord, TrackedDuration, TrackerState};
use crate::utils::fuzzy;

/// Per-day tracking operations
///
/// Tracking is additive: repeated entries for the same code on the same day
/// accumulate. Every day's total is capped; an entry that would push the day
/// over the cap is rejected without touching the state.
pub struct DayRepo;

impl DayRepo {
    /// Add `duration` to `code` on `date`
    ///
    /// Returns the day's new total. Fails with `InvalidTimeCode` if the code is
    /// unregistered, or `DailyCapExceeded` if the new total would exceed
    /// `cap_hours`.
    pub fn track(
        state: &mut TrackerState,
        date: NaiveDate,
        duration: TrackedDuration,
        code: &str,
        cap_hours: u32,
    ) -> Result<TrackedDuration, HtError> {
        Self::ensure_code(state, code)?;

        // A total that does not fit in u64 is over any cap
        let limit = TrackedDuration::from_hours(u64::from(cap_hours));
        let current = match state.tracked_hours.day(date) {
            Some(day) => TrackedDuration::checked_sum(day.values()),
            None => Some(TrackedDuration::ZERO),
        };
        let new_total = current
            .and_then(|total| total.checked_add(duration))
            .filter(|total| *total <= limit)
            .ok_or(HtError::DailyCapExceeded {
                date,
                limit_hours: cap_hours,
            })?;

        if state.tracked_hours.day(date).is_none() {
            let fresh = Self::empty_day(state);
            state.tracked_hours.insert_day(date, fresh);
        }
        if let Some(day) = state.tracked_hours.day_mut(date) {
            *day.entry(code.to_string()).or_default() += duration;
        }

        log::debug!("Tracked {} against {} on {} (day total {})", duration, code, date, new_total);
        Ok(new_total)
    }

    /// Fail with `InvalidTimeCode` (plus near-miss suggestions) unless `code` is registered
    pub fn ensure_code(state: &TrackerState, code: &str) -> Result<(), HtError> {
        if state.time_codes.contains(code) {
            return Ok(());
        }
        Err(HtError::InvalidTimeCode {
            code: code.to_string(),
            suggestions: fuzzy::find_near_code_matches(code, state.time_codes.iter(), 2),
        })
    }

    /// A fresh day record with a zero entry for every registered code
    pub fn empty_day(state: &TrackerState) -> DayRecord {
        state
            .time_codes
            .iter()
            .map(|code| (code.to_string(), TrackedDuration::ZERO))
            .collect()
    }
}
