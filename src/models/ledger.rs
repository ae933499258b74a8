use std::collections::BTreeMap;
use std::fmt;
use std::ops::AddAssign;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Elapsed time at second granularity
///
/// Persisted as a plain count of seconds. Older data files wrote floating
/// point counts (`7200.0`), so deserialization accepts both forms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackedDuration(u64);

impl TrackedDuration {
    pub const ZERO: TrackedDuration = TrackedDuration(0);

    pub fn from_secs(secs: u64) -> Self {
        TrackedDuration(secs)
    }

    pub fn from_hours(hours: u64) -> Self {
        TrackedDuration(hours * 3600)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: TrackedDuration) -> Option<TrackedDuration> {
        self.0.checked_add(other.0).map(TrackedDuration)
    }

    /// Total of several durations, or None if it does not fit
    pub fn checked_sum<'a, I>(durations: I) -> Option<TrackedDuration>
    where
        I: IntoIterator<Item = &'a TrackedDuration>,
    {
        durations
            .into_iter()
            .try_fold(TrackedDuration::ZERO, |total, d| total.checked_add(*d))
    }

    /// Floor to the nearest 15-minute boundary, discarding seconds first
    pub fn round_down_quarter_hour(&self) -> TrackedDuration {
        let minutes = self.0 / 60;
        TrackedDuration((minutes / 15) * 15 * 60)
    }
}

/// Saturates at `u64::MAX`; callers that need the exact total use `checked_add`
impl AddAssign for TrackedDuration {
    fn add_assign(&mut self, rhs: TrackedDuration) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

/// Renders as `H:MM:SS`
impl fmt::Display for TrackedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 3600;
        let minutes = (self.0 % 3600) / 60;
        let seconds = self.0 % 60;
        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl<'de> Deserialize<'de> for TrackedDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SecondsVisitor;

        impl<'de> Visitor<'de> for SecondsVisitor {
            type Value = TrackedDuration;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative number of seconds")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TrackedDuration, E> {
                Ok(TrackedDuration(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TrackedDuration, E> {
                u64::try_from(v)
                    .map(TrackedDuration)
                    .map_err(|_| E::custom(format!("negative duration: {}", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TrackedDuration, E> {
                if !v.is_finite() || v < 0.0 || v > u64::MAX as f64 {
                    return Err(E::custom(format!("invalid duration: {}", v)));
                }
                Ok(TrackedDuration(v.round() as u64))
            }
        }

        deserializer.deserialize_any(SecondsVisitor)
    }
}

/// Per-day durations keyed by time code, in registration order
pub type DayRecord = IndexMap<String, TrackedDuration>;

/// Per-date ledger of tracked durations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&date)
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut DayRecord> {
        self.days.get_mut(&date)
    }

    pub fn insert_day(&mut self, date: NaiveDate, record: DayRecord) {
        self.days.insert(date, record);
    }

    /// All recorded days in calendar order
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.days.iter()
    }

    pub fn days_mut(&mut self) -> impl Iterator<Item = (&NaiveDate, &mut DayRecord)> {
        self.days.iter_mut()
    }

    /// Recorded days within `start..=end`, in calendar order
    pub fn days_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = (&NaiveDate, &DayRecord)> {
        self.days.range(start..=end)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }
}

/// Ordered set of known time codes
///
/// Loading goes through `register`, so duplicate entries in a data file
/// collapse onto their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TimeCodeRegistry {
    codes: Vec<String>,
}

impl TimeCodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// Append a code, returning false if it was already registered
    pub fn register(&mut self, code: &str) -> bool {
        if self.contains(code) {
            return false;
        }
        self.codes.push(code.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

impl<S: Into<String>> FromIterator<S> for TimeCodeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = TimeCodeRegistry::new();
        for code in iter {
            let code: String = code.into();
            registry.register(&code);
        }
        registry
    }
}

impl From<Vec<String>> for TimeCodeRegistry {
    fn from(codes: Vec<String>) -> Self {
        codes.into_iter().collect()
    }
}

impl From<TimeCodeRegistry> for Vec<String> {
    fn from(registry: TimeCodeRegistry) -> Self {
        registry.codes
    }
}

/// The complete persisted state: ledger plus code registry
///
/// Loaded once per command, mutated in memory, and written back as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub tracked_hours: Ledger,
    #[serde(default)]
    pub time_codes: TimeCodeRegistry,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }
}
