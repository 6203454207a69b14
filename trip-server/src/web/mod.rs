//! Web layer for the trip clock.
//!
//! Serves the page and the JSON endpoints the pickers post to.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Session};
