use crate::models::Ledger;

/// Reserved time code recording PTO taken
pub const PTO_CODE: &str = "PTO";

/// Paid-time-off accrual across the whole ledger
///
/// PTO accrues on the share of non-PTO hours above the utilization rate:
/// `earned = worked * (1 - utilization_rate)`. Remaining PTO is not clamped
/// and goes negative when more has been taken than earned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PtoSummary {
    pub total_working_hours: f64,
    pub earned_hours: f64,
    pub used_hours: f64,
    pub remaining_hours: f64,
}

impl PtoSummary {
    pub fn compute(ledger: &Ledger, utilization_rate: f64) -> PtoSummary {
        // u128 so that totals of large stored values cannot overflow
        let (worked, used) = ledger.days().flat_map(|(_, day)| day.iter()).fold(
            (0u128, 0u128),
            |(worked, used), (code, duration)| {
                let secs = u128::from(duration.as_secs());
                if code == PTO_CODE {
                    (worked, used + secs)
                } else {
                    (worked + secs, used)
                }
            },
        );

        let total_working_hours = worked as f64 / 3600.0;
        let used_hours = used as f64 / 3600.0;
        let earned_hours = total_working_hours * (1.0 - utilization_rate);

        PtoSummary {
            total_working_hours,
            earned_hours,
            used_hours,
            remaining_hours: earned_hours - used_hours,
        }
    }
}
