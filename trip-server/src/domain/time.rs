//! Time points for trip timing.
//!
//! The picker widget reports a selection as raw epoch milliseconds. This
//! module wraps that into an immutable date-aware value so that overnight
//! arrivals (crossing midnight) can be represented by advancing the date.
//! Every adjustment produces a new value; nothing is mutated in place, so
//! a stored departure can never be changed by normalizing an arrival.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when a raw picker timestamp cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct InvalidTimestamp {
    reason: &'static str,
}

impl InvalidTimestamp {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An absolute instant: calendar date plus time of day.
///
/// Two selections at "01:30" may sit on different dates once rollover has
/// been applied, so the date is part of the value. Ordering and equality
/// compare the combined instant. No timezone conversion is performed; the
/// value is exactly what the picker reported.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TimePoint;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let t = TimePoint::new(date, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.minute(), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePoint {
    date: NaiveDate,
    time: NaiveTime,
}

impl TimePoint {
    /// Create a time point from date and time components.
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Interpret a raw picker timestamp (epoch milliseconds).
    ///
    /// Out-of-range values are rejected rather than silently clamped, so a
    /// malformed event can never corrupt stored state.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::TimePoint;
    ///
    /// assert!(TimePoint::from_timestamp_millis(1_710_513_000_000).is_ok());
    /// assert!(TimePoint::from_timestamp_millis(i64::MAX).is_err());
    /// ```
    pub fn from_timestamp_millis(ms: i64) -> Result<Self, InvalidTimestamp> {
        let dt = DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| InvalidTimestamp::new("epoch milliseconds out of range"))?
            .naive_utc();
        Ok(Self {
            date: dt.date(),
            time: dt.time(),
        })
    }

    /// Returns the date component.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the time-of-day component.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Converts to a NaiveDateTime.
    pub fn to_datetime(&self) -> chrono::NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Returns a copy anchored to a different calendar date, keeping the
    /// time of day.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            time: self.time,
        }
    }

    /// Returns a copy advanced one calendar day (the overnight rollover).
    ///
    /// `None` only at the end of chrono's date range.
    pub fn next_day(&self) -> Option<Self> {
        Some(Self {
            date: self.date.succ_opt()?,
            time: self.time,
        })
    }

    /// Returns the duration between two instants.
    ///
    /// Negative if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.to_datetime()
            .signed_duration_since(other.to_datetime())
    }
}

impl Ord for TimePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_datetime().cmp(&other.to_datetime())
    }
}

impl PartialOrd for TimePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimePoint({} {:02}:{:02})",
            self.date,
            self.hour(),
            self.minute()
        )
    }
}
