//! Trip clock server.
//!
//! Pick a departure time and an arrival time; see the elapsed hours and
//! minutes, with arrivals after midnight counted on the next day.

pub mod domain;
pub mod selection;
pub mod web;
