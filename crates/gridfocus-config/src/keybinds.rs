//! Keybind lookup and validation utilities.

use crate::schema::KeybindConfig;
use gridfocus_common::ConfigError;
use std::collections::HashMap;

pub const FOCUS_TOP_LEFT: &str = "gridfocus.focusTopLeft";
pub const FOCUS_BOTTOM_LEFT: &str = "gridfocus.focusBottomLeft";
pub const FOCUS_TOP_RIGHT: &str = "gridfocus.focusTopRight";
pub const FOCUS_BOTTOM_RIGHT: &str = "gridfocus.focusBottomRight";

/// Returns all keybinds as `(command, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&'static str, &str)> {
    vec![
        (FOCUS_TOP_LEFT, config.focus_top_left.as_str()),
        (FOCUS_BOTTOM_LEFT, config.focus_bottom_left.as_str()),
        (FOCUS_TOP_RIGHT, config.focus_top_right.as_str()),
        (FOCUS_BOTTOM_RIGHT, config.focus_bottom_right.as_str()),
    ]
}

fn normalize(binding: &str) -> String {
    binding
        .split('+')
        .map(|part| part.trim().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}

/// Resolve an accelerator to the command it is bound to.
///
/// Matching ignores case and whitespace around `+`.
pub fn command_for_key(config: &KeybindConfig, key: &str) -> Option<&'static str> {
    let wanted = normalize(key);
    all_keybinds(config)
        .into_iter()
        .find(|(_, binding)| normalize(binding) == wanted)
        .map(|(command, _)| command)
}

/// Validate that every command has a binding.
pub fn validate_not_empty(config: &KeybindConfig) -> Result<(), ConfigError> {
    for (command, binding) in all_keybinds(config) {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind for '{command}' is empty"
            )));
        }
    }
    Ok(())
}

/// Validate that no two commands are mapped to the same key combination.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (command, binding) in all_keybinds(config) {
        if let Some(existing) = seen.get(&normalize(binding)) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing}' and '{command}'"
            )));
        }
        seen.insert(normalize(binding), command);
    }

    Ok(())
}
