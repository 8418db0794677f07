//! A legacy-style mutable calendar value.
//!
//! [`Calendar`] models the field-based, mutate-in-place calendar type found
//! in older codebases: values are built from broken-down fields, adjusted
//! with in-place arithmetic, and meant to be precise to whole seconds. Its
//! sub-second field exists but is noise for comparison purposes, so the
//! [`Orderable`] adapter truncates it on both operands before comparing.
//! All other supported types compare at their intrinsic precision.

use std::cmp::Ordering;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use super::Orderable;

// ============================================================================
// CALENDAR
// ============================================================================

/// A mutable, field-based calendar value with whole-second comparison
/// semantics.
///
/// Direct field equality below one second is not meaningful for this type:
/// two values that differ only in milliseconds denote the same calendar
/// instant. The [`Orderable`] impl therefore normalizes both operands to
/// second granularity, which is what makes equality-sensitive checks such
/// as `is_greater_or_equals_than` behave correctly.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use covenant::{Calendar, Orderable};
///
/// let mut a = Calendar::from_ymd_hms(2019, 2, 10, 9, 40, 0).unwrap();
/// let mut b = a;
/// b.set_millisecond(750);
///
/// // Millisecond-only differences compare equal.
/// assert_eq!(a.compare(&b), Ordering::Equal);
///
/// a.add_minutes(5);
/// assert_eq!(a.compare(&b), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    stamp: NaiveDateTime,
}

impl Calendar {
    /// The current local date and time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            stamp: Local::now().naive_local(),
        }
    }

    /// Builds a calendar value from broken-down fields.
    ///
    /// Returns `None` when the fields do not name a real date or time.
    #[must_use]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        let stamp = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
        Some(Self { stamp })
    }

    /// Shifts this value by a number of minutes, in place. Negative values
    /// shift backwards.
    pub fn add_minutes(&mut self, minutes: i64) {
        self.stamp += TimeDelta::minutes(minutes);
    }

    /// Shifts this value by a number of seconds, in place.
    pub fn add_seconds(&mut self, seconds: i64) {
        self.stamp += TimeDelta::seconds(seconds);
    }

    /// Shifts this value by a number of days, in place.
    pub fn add_days(&mut self, days: i64) {
        self.stamp += TimeDelta::days(days);
    }

    /// Sets the millisecond field. Values above 999 are ignored.
    pub fn set_millisecond(&mut self, millisecond: u32) {
        // Reject out-of-range input here: 1000..=1999 would otherwise land
        // in chrono's leap-second nanosecond range and be accepted.
        if millisecond > 999 {
            return;
        }
        if let Some(stamp) = self.stamp.with_nanosecond(millisecond * 1_000_000) {
            self.stamp = stamp;
        }
    }

    /// Clears the millisecond field (and any finer component).
    pub fn clear_milliseconds(&mut self) {
        if let Some(stamp) = self.stamp.with_nanosecond(0) {
            self.stamp = stamp;
        }
    }

    /// The current millisecond field.
    #[must_use]
    pub fn millisecond(&self) -> u32 {
        self.stamp.nanosecond() / 1_000_000
    }

    /// The underlying naive date-time, sub-second component included.
    #[must_use]
    pub fn naive(&self) -> NaiveDateTime {
        self.stamp
    }

    // Whole-second granularity: the ordering this type actually means.
    fn normalized_seconds(&self) -> i64 {
        self.stamp.and_utc().timestamp()
    }
}

impl Orderable for Calendar {
    fn compare(&self, other: &Self) -> Ordering {
        self.normalized_seconds().cmp(&other.normalized_seconds())
    }
}

// ============================================================================
// TESTS
// ============================================================================
