//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gridfocus configuration
# Only override what you want to change -- missing fields use defaults.

[settle]
# Wait before the first read-back after a layout replace.
# initial_delay_ms = 0      # 0-2000
# Group-count poll cadence while waiting for the layout to apply.
# poll_interval_ms = 10     # 1-500
# Give up waiting and trust the canonical mapping after this long.
# timeout_ms = 300          # 0-10000

[keybinds]
# focus_top_left = "Ctrl+Alt+1"
# focus_bottom_left = "Ctrl+Alt+2"
# focus_top_right = "Ctrl+Alt+3"
# focus_bottom_right = "Ctrl+Alt+4"

[logging]
# level = "INFO"            # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
