use super::*;
use crate::schema::{KeybindConfig, SettleConfig};

#[test]
fn default_config_is_valid() {
    assert!(validate(&GridFocusConfig::default()).is_ok());
}

#[test]
fn out_of_range_settle_values_are_reported_together() {
    let config = GridFocusConfig {
        settle: SettleConfig {
            initial_delay_ms: 5000,
            poll_interval_ms: 0,
            timeout_ms: 20_000,
        },
        ..Default::default()
    };
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("settle.initial_delay_ms = 5000"));
    assert!(err.contains("settle.poll_interval_ms = 0"));
    assert!(err.contains("settle.timeout_ms = 20000"));
}

#[test]
fn duplicate_keybinds_fail_validation() {
    let config = GridFocusConfig {
        keybinds: KeybindConfig {
            focus_bottom_left: "Ctrl+Alt+1".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("duplicate keybind"));
}

#[test]
fn boundary_values_are_valid() {
    let config = GridFocusConfig {
        settle: SettleConfig {
            initial_delay_ms: 2000,
            poll_interval_ms: 1,
            timeout_ms: 0,
        },
        ..Default::default()
    };
    assert!(validate(&config).is_ok());
}
