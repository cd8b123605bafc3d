//! Layout settle timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long to wait for the host to finish applying a replaced layout.
///
/// After a replace, the engine sleeps `initial_delay_ms`, then polls the
/// host's group count every `poll_interval_ms` until it matches the new
/// layout or `timeout_ms` has elapsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettleConfig {
    /// Valid range: 0-2000.
    pub initial_delay_ms: u32,
    /// Valid range: 1-500.
    pub poll_interval_ms: u32,
    /// Valid range: 0-10000.
    pub timeout_ms: u32,
}

impl SettleConfig {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.initial_delay_ms))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms.max(1)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 0,
            poll_interval_ms: 10,
            timeout_ms: 300,
        }
    }
}
