//! Error types for slider diagnostics and configuration.

use thiserror::Error;

/// Which slider field a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderField {
    /// The current value.
    Current,
    /// The lower bound.
    Min,
    /// The upper bound.
    Max,
}

impl SliderField {
    /// Stable lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Malformed slider state detected by strict parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliderError {
    /// Field was absent or blank.
    #[error("slider field `{}` is missing", field.as_str())]
    Missing {
        /// Field that was missing.
        field: SliderField,
    },
    /// Field did not parse as a finite number.
    #[error("slider field `{}` is not numeric: {value:?}", field.as_str())]
    NotNumeric {
        /// Field that failed to parse.
        field: SliderField,
        /// Offending raw text.
        value: String,
    },
}

/// Invalid synchronization configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration JSON could not be parsed.
    #[error("invalid configuration document")]
    Parse {
        /// Underlying serde error.
        #[from]
        source: serde_json::Error,
    },
    /// A field held an unusable value.
    #[error("invalid configuration field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}
