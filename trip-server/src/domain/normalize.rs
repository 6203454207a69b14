//! Date alignment for the two endpoints of a trip.
//!
//! The picker only selects a time of day; the date it attaches is whatever
//! "today" was when the widget opened. These functions anchor both
//! endpoints onto one conceptual trip of at most about a day: the two
//! selections default to the same calendar date, and when the arrival time
//! of day is earlier than the departure's the arrival is pushed to the
//! next day (an overnight trip).
//!
//! The two branches are not symmetric. Picking an arrival adjusts only the
//! arrival; picking a departure may also adjust the recorded arrival, and
//! that adjustment consults only the currently recorded value. Repicking
//! the departure after an arrival has already rolled over can therefore
//! advance the arrival a further day. That exposure is a faithful
//! reproduction of the legacy behavior and is covered by a test.

use super::time::{InvalidTimestamp, TimePoint};

/// Normalize a freshly picked arrival against the recorded departure.
///
/// The arrival is anchored to the departure's date; if that leaves it
/// earlier than the departure, it rolls over to the next day. With no
/// departure recorded the raw value passes through unchanged.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{TimePoint, normalize_arrival};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let dep = TimePoint::new(d, NaiveTime::from_hms_opt(23, 30, 0).unwrap());
/// let raw = TimePoint::new(d, NaiveTime::from_hms_opt(0, 15, 0).unwrap());
///
/// let arr = normalize_arrival(Some(&dep), raw).unwrap();
/// assert_eq!(arr.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
/// ```
pub fn normalize_arrival(
    departure: Option<&TimePoint>,
    raw: TimePoint,
) -> Result<TimePoint, InvalidTimestamp> {
    let Some(dep) = departure else {
        return Ok(raw);
    };

    let aligned = raw.with_date(dep.date());
    if aligned < *dep {
        return aligned
            .next_day()
            .ok_or_else(|| InvalidTimestamp::new("date overflow on rollover"));
    }
    Ok(aligned)
}

/// Normalize a freshly picked departure against the recorded arrival.
///
/// The departure takes the recorded arrival's date. If the new departure
/// then sits after the arrival, the *arrival* rolls over to the next day:
/// the departure pushed past it, so the arrival now happens tomorrow. The
/// second element of the result is the adjusted arrival, `None` when no
/// arrival was recorded or no adjustment was needed.
pub fn normalize_departure(
    raw: TimePoint,
    arrival: Option<&TimePoint>,
) -> Result<(TimePoint, Option<TimePoint>), InvalidTimestamp> {
    let Some(arr) = arrival else {
        return Ok((raw, None));
    };

    let departure = raw.with_date(arr.date());
    if departure > *arr {
        let rolled = arr
            .next_day()
            .ok_or_else(|| InvalidTimestamp::new("date overflow on rollover"))?;
        return Ok((departure, Some(rolled)));
    }
    Ok((departure, None))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use proptest::prelude::*;

    prop_compose! {
        fn valid_date()(
            year in 2000i32..2100,
            month in 1u32..=12,
            day in 1u32..=28
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day).unwrap()
        }
    }

    proptest! {
        /// A freshly normalized arrival is never earlier than the departure.
        #[test]
        fn arrival_never_precedes_departure(
            dh in 0u32..24, dm in 0u32..60,
            ah in 0u32..24, am in 0u32..60,
            d in valid_date()
        ) {
            let dep = TimePoint::new(d, NaiveTime::from_hms_opt(dh, dm, 0).unwrap());
            let raw = TimePoint::new(d, NaiveTime::from_hms_opt(ah, am, 0).unwrap());

            let arr = normalize_arrival(Some(&dep), raw).unwrap();
            prop_assert!(arr >= dep);
            // Rollover never exceeds one day on a fresh pick
            prop_assert!(arr.signed_duration_since(dep) < chrono::Duration::days(1));
        }

        /// After a departure pick, the effective arrival still follows it.
        #[test]
        fn departure_pick_keeps_order(
            dh in 0u32..24, dm in 0u32..60,
            ah in 0u32..24, am in 0u32..60,
            d in valid_date()
        ) {
            let arr = TimePoint::new(d, NaiveTime::from_hms_opt(ah, am, 0).unwrap());
            let raw = TimePoint::new(d, NaiveTime::from_hms_opt(dh, dm, 0).unwrap());

            let (dep, adjusted) = normalize_departure(raw, Some(&arr)).unwrap();
            let effective = adjusted.unwrap_or(arr);
            prop_assert!(effective >= dep);
        }
    }
}
