// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use bitflow_config::LogConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("A global tracing subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for logging initialization
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
}

impl<'a> From<&'a LogConfig> for LoggingConfig<'a> {
    fn from(config: &'a LogConfig) -> Self {
        Self {
            level: &config.level,
            json_format: config.json,
            strip_ansi: config.strip_ansi,
        }
    }
}

/// Filter for `level`, keeping noisy HTTP internals at `warn` unless tracing.
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = if level == "trace" {
        level.to_string()
    } else {
        format!("{},hyper=warn,reqwest=warn", level)
    };

    EnvFilter::try_new(directive).map_err(|source| LoggingError::InvalidLogLevel {
        level: level.to_string(),
        source,
    })
}

/// Initialize tracing/logging to stdout
///
/// # Examples
/// ```no_run
/// use bitflow_bitcoin_node::logging::{self, LoggingConfig};
///
/// logging::init_with_config(LoggingConfig {
///     level: "debug",
///     json_format: false,
///     strip_ansi: false,
/// })?;
/// # Ok::<(), bitflow_bitcoin_node::logging::LoggingError>(())
/// ```
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config.level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_format {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!config.strip_ansi);

        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_valid_levels() {
        for level in bitflow_config::VALID_LOG_LEVELS {
            assert!(build_filter(level).is_ok(), "{} should parse", level);
        }
    }

    #[test]
    fn test_build_filter_invalid_level() {
        let err = build_filter("bitflow=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_logging_config_from_log_config() {
        let log = LogConfig {
            level: "debug".to_string(),
            json: true,
            strip_ansi: true,
        };
        let config = LoggingConfig::from(&log);
        assert_eq!(config.level, "debug");
        assert!(config.json_format);
        assert!(config.strip_ansi);
    }
}
