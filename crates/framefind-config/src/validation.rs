//! Configuration validation.
//!
//! Collects every out-of-range value into a single `ConfigError`.

use crate::schema::FrameFindConfig;
use framefind_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FrameFindConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "host.queue_capacity",
        config.host.queue_capacity,
        1,
        4096,
    );
    validate_range(&mut errors, "window.width", config.window.width, 200, 8192);
    validate_range(&mut errors, "window.height", config.window.height, 200, 8192);

    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
