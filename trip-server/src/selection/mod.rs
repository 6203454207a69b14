//! Selection session: the state machine and its refresh plumbing.

mod config;
mod refresh;
mod state;

pub use config::RefreshConfig;
pub use refresh::RefreshTimer;
pub use state::{Phase, SelectionState};
