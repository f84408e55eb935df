//! Full configuration validation.
//!
//! Validates numeric ranges and the layer id. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod layer;

#[cfg(test)]
mod tests;

use crate::errors::ConfigError;
use crate::schema::RadarConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RadarConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layer::validate_layer(&mut errors, config);
    layer::validate_resolution(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
