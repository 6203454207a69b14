//! Domain types for trip timing.
//!
//! The pure core: an immutable time point, the 12-hour label formatter,
//! the date normalizer that anchors both endpoints onto one trip, and the
//! duration calculator. Nothing in this module performs IO or holds
//! state; the selection state machine composes these pieces.

mod duration;
mod format;
mod normalize;
mod time;

pub use duration::{TripDuration, diff};
pub use format::format_label;
pub use normalize::{normalize_arrival, normalize_departure};
pub use time::{InvalidTimestamp, TimePoint};
