//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::selection::{RefreshConfig, RefreshTimer, SelectionState};

/// The one live session: the selection plus its refresh machinery.
///
/// `refreshing` is presentation state (it drives the spinner while a
/// deferred reset is pending), so it lives here rather than inside the
/// selection aggregate.
#[derive(Debug, Default)]
pub struct Session {
    pub selection: SelectionState,
    pub refreshing: bool,
    pub timer: RefreshTimer,
}

/// Shared application state.
///
/// The session sits behind a single async mutex; every handler locks it
/// for the whole of its update, which keeps picks and resets atomic under
/// the multi-threaded runtime.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub config: Arc<RefreshConfig>,
}

impl AppState {
    /// Create a new app state with an empty session.
    pub fn new(config: RefreshConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            config: Arc::new(config),
        }
    }
}
