use crate::models::{TrackedDuration, TrackerState};

/// Time code registry operations
pub struct CodeRepo;

impl CodeRepo {
    /// Register a new time code
    ///
    /// Returns false (and changes nothing) if the code already exists.
    /// Otherwise the code is appended to the registry and every existing day
    /// gains a zero entry for it, so all day records stay uniform. Days
    /// created later pick the code up from the registry.
    pub fn add(state: &mut TrackerState, code: &str) -> bool {
        if !state.time_codes.register(code) {
            return false;
        }

        let mut backfilled = 0;
        for (_, day) in state.tracked_hours.days_mut() {
            day.entry(code.to_string()).or_insert(TrackedDuration::ZERO);
            backfilled += 1;
        }

        log::debug!("Registered time code {} (backfilled {} day(s))", code, backfilled);
        true
    }
}
