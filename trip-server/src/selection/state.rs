//! The selection state machine.
//!
//! One aggregate holds both endpoints of the trip, their display labels,
//! and the derived duration. Invariants, maintained by every operation:
//!
//! - `duration` is set if and only if both endpoints are set;
//! - each label is set if and only if its endpoint is set.
//!
//! Either endpoint may be picked first; once both are present every
//! subsequent pick recomputes the duration. A failed pick (malformed
//! timestamp, date overflow) leaves the aggregate untouched. `reset`
//! replaces the whole aggregate in one assignment, so no partially
//! cleared state is ever observable.

use tracing::debug;

use crate::domain::{
    InvalidTimestamp, TimePoint, TripDuration, diff, format_label, normalize_arrival,
    normalize_departure,
};

/// Which endpoints have been picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    DepartureOnly,
    ArrivalOnly,
    Ready,
}

/// The two endpoints of the trip and everything derived from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    departure: Option<TimePoint>,
    arrival: Option<TimePoint>,
    departure_label: Option<String>,
    arrival_label: Option<String>,
    duration: Option<TripDuration>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a departure pick.
    ///
    /// Runs the departure branch of the normalizer; when an arrival is
    /// already recorded this may push the arrival to the next day, and the
    /// duration is recomputed.
    pub fn pick_departure(&mut self, raw: TimePoint) -> Result<(), InvalidTimestamp> {
        let (departure, adjusted_arrival) = normalize_departure(raw, self.arrival.as_ref())?;

        self.departure_label = Some(format_label(&departure));
        self.departure = Some(departure);
        if let Some(arrival) = adjusted_arrival {
            // Time of day is unchanged, so the arrival label stands.
            self.arrival = Some(arrival);
        }
        self.recompute_duration();

        debug!(phase = ?self.phase(), ?departure, "departure picked");
        Ok(())
    }

    /// Record an arrival pick.
    ///
    /// Runs the arrival branch of the normalizer; with a departure already
    /// recorded an earlier time of day rolls over to the next day.
    pub fn pick_arrival(&mut self, raw: TimePoint) -> Result<(), InvalidTimestamp> {
        let arrival = normalize_arrival(self.departure.as_ref(), raw)?;

        self.arrival_label = Some(format_label(&arrival));
        self.arrival = Some(arrival);
        self.recompute_duration();

        debug!(phase = ?self.phase(), ?arrival, "arrival picked");
        Ok(())
    }

    /// Clear everything back to the empty selection.
    ///
    /// The whole aggregate is replaced at once; callers never see a
    /// half-cleared state.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("selection reset");
    }

    /// Current phase of the selection.
    pub fn phase(&self) -> Phase {
        match (&self.departure, &self.arrival) {
            (None, None) => Phase::Empty,
            (Some(_), None) => Phase::DepartureOnly,
            (None, Some(_)) => Phase::ArrivalOnly,
            (Some(_), Some(_)) => Phase::Ready,
        }
    }

    /// The recorded departure, if picked.
    pub fn departure(&self) -> Option<&TimePoint> {
        self.departure.as_ref()
    }

    /// The recorded arrival, if picked.
    pub fn arrival(&self) -> Option<&TimePoint> {
        self.arrival.as_ref()
    }

    /// The formatted departure label, if picked.
    pub fn departure_label(&self) -> Option<&str> {
        self.departure_label.as_deref()
    }

    /// The formatted arrival label, if picked.
    pub fn arrival_label(&self) -> Option<&str> {
        self.arrival_label.as_deref()
    }

    /// The derived duration; present exactly when both endpoints are.
    pub fn duration(&self) -> Option<&TripDuration> {
        self.duration.as_ref()
    }

    fn recompute_duration(&mut self) {
        self.duration = match (&self.departure, &self.arrival) {
            (Some(dep), Some(arr)) => Some(diff(dep, arr)),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, min: u32) -> TimePoint {
        TimePoint::new(d, NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    fn assert_invariants(state: &SelectionState) {
        assert_eq!(state.departure().is_some(), state.departure_label().is_some());
        assert_eq!(state.arrival().is_some(), state.arrival_label().is_some());
        assert_eq!(
            state.duration().is_some(),
            state.departure().is_some() && state.arrival().is_some()
        );
    }

    #[test]
    fn starts_empty() {
        let state = SelectionState::new();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.departure_label().is_none());
        assert!(state.arrival_label().is_none());
        assert!(state.duration().is_none());
        assert_invariants(&state);
    }

    #[test]
    fn departure_first() {
        let mut state = SelectionState::new();
        state.pick_departure(at(date(2024, 3, 15), 9, 0)).unwrap();

        assert_eq!(state.phase(), Phase::DepartureOnly);
        assert_eq!(state.departure_label(), Some("09:00 a.m"));
        assert!(state.duration().is_none());
        assert_invariants(&state);
    }

    #[test]
    fn arrival_first() {
        let mut state = SelectionState::new();
        state.pick_arrival(at(date(2024, 3, 15), 17, 30)).unwrap();

        assert_eq!(state.phase(), Phase::ArrivalOnly);
        assert_eq!(state.arrival_label(), Some("05:30 p.m"));
        assert!(state.duration().is_none());
        assert_invariants(&state);
    }

    #[test]
    fn simple_span_ready() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 9, 0)).unwrap();
        state.pick_arrival(at(d, 17, 30)).unwrap();

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.duration(), Some(&TripDuration { hours: 8, minutes: 30 }));
        assert_invariants(&state);
    }

    #[test]
    fn overnight_arrival_rolls_over() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 23, 30)).unwrap();
        state.pick_arrival(at(d, 0, 15)).unwrap();

        assert_eq!(state.arrival().unwrap().date(), date(2024, 3, 16));
        assert_eq!(state.duration(), Some(&TripDuration { hours: 0, minutes: 45 }));
        assert_eq!(state.arrival_label(), Some("00:15 a.m"));
        assert_invariants(&state);
    }

    #[test]
    fn repick_departure_recomputes() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 9, 0)).unwrap();
        state.pick_arrival(at(d, 17, 30)).unwrap();

        state.pick_departure(at(d, 10, 0)).unwrap();

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.departure_label(), Some("10:00 a.m"));
        assert_eq!(state.duration(), Some(&TripDuration { hours: 7, minutes: 30 }));
        assert_invariants(&state);
    }

    #[test]
    fn repick_arrival_recomputes() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 9, 0)).unwrap();
        state.pick_arrival(at(d, 17, 30)).unwrap();

        state.pick_arrival(at(d, 12, 0)).unwrap();

        assert_eq!(state.duration(), Some(&TripDuration { hours: 3, minutes: 0 }));
        assert_invariants(&state);
    }

    #[test]
    fn departure_past_arrival_pushes_arrival() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_arrival(at(d, 0, 15)).unwrap();
        state.pick_departure(at(d, 23, 30)).unwrap();

        assert_eq!(state.arrival().unwrap().date(), date(2024, 3, 16));
        assert_eq!(state.duration(), Some(&TripDuration { hours: 0, minutes: 45 }));
        assert_invariants(&state);
    }

    #[test]
    fn reset_clears_everything_at_once() {
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 9, 0)).unwrap();
        state.pick_arrival(at(d, 17, 30)).unwrap();
        assert_eq!(state.phase(), Phase::Ready);

        state.reset();

        assert_eq!(state, SelectionState::new());
        assert_eq!(state.phase(), Phase::Empty);
        assert_invariants(&state);
    }

    #[test]
    fn failed_pick_leaves_state_unchanged() {
        let last = NaiveDate::MAX;
        let mut state = SelectionState::new();
        state.pick_departure(at(last, 23, 30)).unwrap();
        let before = state.clone();

        // Rollover past the end of the date range fails
        assert!(state.pick_arrival(at(last, 0, 15)).is_err());
        assert_eq!(state, before);
        assert_invariants(&state);
    }

    #[test]
    fn label_round_trip_on_repick() {
        // Re-picking the same instant reproduces the same label
        let d = date(2024, 3, 15);
        let mut state = SelectionState::new();
        state.pick_departure(at(d, 8, 45)).unwrap();
        let first = state.departure_label().unwrap().to_string();

        state.pick_departure(at(d, 8, 45)).unwrap();
        assert_eq!(state.departure_label(), Some(first.as_str()));
    }
}
