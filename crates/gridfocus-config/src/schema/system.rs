//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the gridfocus crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "gridfocus=debug",
            LogLevel::Info => "gridfocus=info",
            LogLevel::Warning => "gridfocus=warn",
            LogLevel::Error => "gridfocus=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
