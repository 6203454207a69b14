//! 12-hour display labels.
//!
//! Labels follow the legacy picker display exactly, including two boundary
//! quirks that downstream consumers rely on:
//!
//! - the 12-hour conversion is `h - 12` only for `h > 12`, so hour 0
//!   renders as "00" (not "12") and hour 12 renders as "12";
//! - the period marker is "p.m" only for `h > 12`, so 12:xx (noon)
//!   renders as "a.m".
//!
//! Both are wrong by conventional clock rules and both are deliberate.

use super::TimePoint;

/// Render a time point as a `"hh:mm a.m"` / `"hh:mm p.m"` label.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{TimePoint, format_label};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let t = TimePoint::new(d, NaiveTime::from_hms_opt(17, 5, 0).unwrap());
/// assert_eq!(format_label(&t), "05:05 p.m");
/// ```
pub fn format_label(t: &TimePoint) -> String {
    let h24 = t.hour();
    let hour = if h24 > 12 { h24 - 12 } else { h24 };
    let period = if h24 > 12 { "p.m" } else { "a.m" };
    format!("{:02}:{:02} {}", hour, t.minute(), period)
}
