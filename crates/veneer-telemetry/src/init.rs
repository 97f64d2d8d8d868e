//! Logging initialisation and configuration.
//!
//! # Design
//! - Centralises logging setup (pretty or JSON) with a single entry point.
//! - On wasm32 the formatter writes through the browser console and skips
//!   timestamps, since `SystemTime` is unavailable there.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};

/// Default logging target when `RUST_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Log level string (e.g., `info`, `debug`).
    pub level: &'a str,
    /// Output format selection for the tracing subscriber.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit logs as structured JSON objects.
    Json,
    /// Emit human-readable, pretty-printed logs.
    Pretty,
}

impl LogFormat {
    /// Choose a sensible default for the current build.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Parse a format name, returning `None` for unknown values.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be installed (for example,
/// because another subscriber has already been set globally).
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(build_env_filter(config.level));
    let installed = match config.format {
        LogFormat::Json => registry.with(platform_layer().json()).try_init(),
        LogFormat::Pretty => registry.with(platform_layer().pretty()).try_init(),
    };
    installed.map_err(|source| TelemetryError::SubscriberInstall { source })
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_layer<S>() -> fmt::Layer<S>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    fmt::layer().with_target(false).with_thread_ids(false)
}

#[cfg(target_arch = "wasm32")]
fn platform_layer<S>() -> fmt::Layer<
    S,
    fmt::format::DefaultFields,
    fmt::format::Format<fmt::format::Full, ()>,
    crate::console::ConsoleWriter,
>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    fmt::layer()
        .with_writer(crate::console::ConsoleWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_info_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.format, LogFormat::infer());
    }

    #[test]
    fn format_names_parse() {
        assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::from_name("xml"), None);
    }

    #[test]
    fn second_install_is_rejected() {
        let config = LoggingConfig {
            level: "debug",
            format: LogFormat::Json,
        };
        // The first call may lose a race with another test installing a subscriber.
        let _ = init_logging(&config);
        let err = init_logging(&config);
        assert!(matches!(
            err,
            Err(TelemetryError::SubscriberInstall { .. })
        ));
    }
}
