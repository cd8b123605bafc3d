//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod settle;
mod system;

pub use keybind_config::*;
pub use settle::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridFocusConfig {
    pub settle: SettleConfig,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}
