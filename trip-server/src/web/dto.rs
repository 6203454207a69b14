//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use super::state::Session;

/// Placeholder shown for an endpoint that has not been picked.
pub const LABEL_PLACEHOLDER: &str = "HH:mm am/pm";

/// Placeholder shown for each duration field before both picks exist.
pub const DURATION_PLACEHOLDER: &str = "00";

/// A picker confirmation: the raw timestamp from the time widget.
#[derive(Debug, Deserialize)]
pub struct PickRequest {
    /// Epoch milliseconds of the selected instant
    pub timestamp_ms: i64,
}

/// Everything the presentation layer renders.
///
/// Unset values are already defaulted to their placeholders here, so
/// templates and API consumers never deal with absent fields.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Formatted departure label, or the placeholder
    pub departure_label: String,

    /// Formatted arrival label, or the placeholder
    pub arrival_label: String,

    /// Elapsed whole hours, zero-padded, or "00"
    pub duration_hours: String,

    /// Elapsed minutes, zero-padded, or "00"
    pub duration_minutes: String,

    /// Whether a deferred reset is pending
    pub refreshing: bool,
}

impl SessionView {
    /// Build the view from the live session.
    pub fn from_session(session: &Session) -> Self {
        let selection = &session.selection;
        let (duration_hours, duration_minutes) = match selection.duration() {
            Some(d) => (d.hours_label(), d.minutes_label()),
            None => (
                DURATION_PLACEHOLDER.to_string(),
                DURATION_PLACEHOLDER.to_string(),
            ),
        };

        Self {
            departure_label: selection
                .departure_label()
                .unwrap_or(LABEL_PLACEHOLDER)
                .to_string(),
            arrival_label: selection
                .arrival_label()
                .unwrap_or(LABEL_PLACEHOLDER)
                .to_string(),
            duration_hours,
            duration_minutes,
            refreshing: session.refreshing,
        }
    }
}

/// Error payload for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
