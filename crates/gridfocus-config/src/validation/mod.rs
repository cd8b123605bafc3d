//! Full configuration validation.
//!
//! Collects every violation into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::GridFocusConfig;
use gridfocus_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GridFocusConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_not_empty(&config.keybinds) {
        errors.push(e.to_string());
    }
    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    validate_settle(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_settle(errors: &mut Vec<String>, config: &GridFocusConfig) {
    let settle = &config.settle;
    validate_range(errors, "settle.initial_delay_ms", settle.initial_delay_ms, 0, 2000);
    validate_range(errors, "settle.poll_interval_ms", settle.poll_interval_ms, 1, 500);
    validate_range(errors, "settle.timeout_ms", settle.timeout_ms, 0, 10_000);
}
