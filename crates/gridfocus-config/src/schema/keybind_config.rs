//! Keyboard shortcut configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Accelerators for the four grid focus commands.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Cmd.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub focus_top_left: String,
    pub focus_bottom_left: String,
    pub focus_top_right: String,
    pub focus_bottom_right: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            focus_top_left: "Ctrl+Alt+1".into(),
            focus_bottom_left: "Ctrl+Alt+2".into(),
            focus_top_right: "Ctrl+Alt+3".into(),
            focus_bottom_right: "Ctrl+Alt+4".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keybind_partial_toml() {
        let config: KeybindConfig = toml::from_str(r#"focus_top_right = "Cmd+K Right""#).unwrap();
        assert_eq!(config.focus_top_right, "Cmd+K Right");
        assert_eq!(config.focus_top_left, "Ctrl+Alt+1");
    }
}
