//! Configuration for the selection session.

use std::time::Duration;

/// Configuration parameters for the refresh gesture.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Delay before a requested reset is applied (milliseconds).
    /// Mirrors the simulated-latency spinner of the original screen.
    pub delay_ms: u64,
}

impl RefreshConfig {
    /// Create a new configuration with the given delay.
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }

    /// Returns the reset delay as a Duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}
