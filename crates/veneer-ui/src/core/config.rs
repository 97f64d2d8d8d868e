//! Selector, attribute and class names used by the DOM adapter.
//!
//! # Design
//! - Every field has a default so an empty JSON object is a valid override.
//! - Unknown fields are rejected to surface typos in page-level overrides.
//! - Validation runs after parsing and reports the first offending field.

use serde::Deserialize;
use veneer_telemetry::LogFormat;

use crate::core::error::ConfigError;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "veneer-config";

/// Names the adapter uses to find sliders and publish results.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Slider container selector.
    pub slider_selector: String,
    /// Numeric control selector, evaluated inside a container.
    pub control_selector: String,
    /// Custom marker selector, evaluated inside a container.
    pub custom_marker_selector: String,
    /// Attribute holding a custom marker's position.
    pub custom_marker_attribute: String,
    /// CSS custom property receiving the progress percentage.
    pub progress_property: String,
    /// Class toggled on markers below the current value.
    pub below_class: String,
    /// Attribute marking a control whose listeners are already registered.
    pub bound_attribute: String,
    /// Events that trigger synchronization.
    pub sync_events: Vec<String>,
    /// Default tracing filter when none is supplied by the environment.
    pub log_level: String,
    /// Log output format (`json` or `pretty`); inferred from the build when unset.
    pub log_format: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            slider_selector: ".slider".to_string(),
            control_selector: "input[type=range]".to_string(),
            custom_marker_selector: ".markers > *".to_string(),
            custom_marker_attribute: "data-value".to_string(),
            progress_property: "--value".to_string(),
            below_class: "below".to_string(),
            bound_attribute: "data-slider-bound".to_string(),
            sync_events: vec!["input".to_string()],
            log_level: veneer_telemetry::DEFAULT_LOG_LEVEL.to_string(),
            log_format: None,
        }
    }
}

impl SyncConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field for values the adapter cannot use.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("slider_selector", &self.slider_selector),
            ("control_selector", &self.control_selector),
            ("custom_marker_selector", &self.custom_marker_selector),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        for (field, value) in [
            ("custom_marker_attribute", &self.custom_marker_attribute),
            ("below_class", &self.below_class),
            ("bound_attribute", &self.bound_attribute),
            ("log_level", &self.log_level),
        ] {
            check_token(field, value)?;
        }
        check_token("progress_property", &self.progress_property)?;
        if !self.progress_property.starts_with("--") || self.progress_property.len() == 2 {
            return Err(invalid(
                "progress_property",
                "must be a css custom property (`--name`)",
            ));
        }
        if self.sync_events.is_empty() {
            return Err(invalid("sync_events", "must list at least one event"));
        }
        for event in &self.sync_events {
            check_token("sync_events", event)?;
        }
        if self
            .log_format
            .as_deref()
            .is_some_and(|format| LogFormat::from_name(format).is_none())
        {
            return Err(invalid("log_format", "must be `json` or `pretty`"));
        }
        Ok(())
    }
}

fn check_token(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field, "must not contain whitespace"));
    }
    Ok(())
}

const fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField { field, reason }
}
