//! Elapsed time between the two endpoints of a trip.
//!
//! The arithmetic follows the reference implementation exactly: the span
//! is taken as a fraction of a day in floating point, the hour count is
//! rounded to the nearest integer, and a borrow step corrects the case
//! where rounding the hours up overshot the actual span. Rounding is half
//! away from zero on both sides, matching the reference.

use std::fmt;

use super::TimePoint;

/// An elapsed span broken into whole hours and minutes.
///
/// Values are not reduced modulo 24; a span longer than a day reports the
/// raw hour count. Normalization keeps such spans out of the interactive
/// flow, but the type does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripDuration {
    pub hours: i64,
    pub minutes: i64,
}

impl TripDuration {
    /// The hour count zero-padded to two digits, as shown in the UI.
    pub fn hours_label(&self) -> String {
        format!("{:02}", self.hours)
    }

    /// The minute count zero-padded to two digits, as shown in the UI.
    pub fn minutes_label(&self) -> String {
        format!("{:02}", self.minutes)
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Compute the elapsed hours and minutes from departure to arrival.
///
/// Pure and deterministic. Negative if the arrival precedes the
/// departure, which normalized inputs never do.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{TimePoint, TripDuration, diff};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let dep = TimePoint::new(d, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
/// let arr = TimePoint::new(d, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
///
/// assert_eq!(diff(&dep, &arr), TripDuration { hours: 8, minutes: 30 });
/// ```
pub fn diff(departure: &TimePoint, arrival: &TimePoint) -> TripDuration {
    let delta_ms = arrival.signed_duration_since(*departure).num_milliseconds();

    // Day-fraction route, kept to match the reference rounding behavior.
    let hours_float = (delta_ms as f64 / 86_400_000.0) * 24.0;
    let mut hours = hours_float.round() as i64;
    let mut minutes_float = (hours_float - hours as f64) * 60.0;

    // Borrow when rounding the hours up overshot the span.
    if minutes_float < 0.0 {
        hours -= 1;
        minutes_float += 60.0;
    }

    TripDuration {
        hours,
        minutes: minutes_float.round() as i64,
    }
}
