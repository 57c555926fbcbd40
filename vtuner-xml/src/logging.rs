//! Logging setup for services hosting the encoder
//!
//! The encoder only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber, either its own or one from this module.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for the hosting process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber installed
    Silent,
    /// Compact stderr output at info level
    Development,
    /// Verbose output with source locations; includes every rendered document
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),
}

/// Initialize logging with the specified mode
///
/// # Examples
///
/// ```rust,ignore
/// // Log each rendered page body
/// vtuner_xml::logging::init_logging(LoggingMode::Debug)?;
/// ```
///
/// # Environment Variables
///
/// - `VTUNER_LOG_LEVEL`: Override the filter (e.g. `vtuner_xml=trace`)
/// - `RUST_LOG`: Used when `VTUNER_LOG_LEVEL` is unset
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact())
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter("debug")?;

            Registry::default()
                .with(fmt::layer()
                    .pretty()
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true))
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Parse a `VTUNER_LOG_MODE` value; unknown values mean silent
pub fn mode_from_str(value: &str) -> LoggingMode {
    match value.trim().to_ascii_lowercase().as_str() {
        "development" => LoggingMode::Development,
        "debug" => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

/// Initialize logging from `VTUNER_LOG_MODE` (`silent`, `development`, `debug`)
///
/// Defaults to silent when unset or unrecognized.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var("VTUNER_LOG_MODE")
        .map(|value| mode_from_str(&value))
        .unwrap_or(LoggingMode::Silent);

    init_logging(mode)
}

/// Build the filter from `VTUNER_LOG_LEVEL`, then `RUST_LOG`, then `default_level`
fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var("VTUNER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    EnvFilter::try_new(&directives).map_err(|_| LoggingError::InvalidFilter(directives))
}

/// Check if a global subscriber has already been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_silent_mode_installs_no_subscriber() {
        let before = is_initialized();
        init_logging(LoggingMode::Silent).unwrap();
        assert_eq!(is_initialized(), before);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(mode_from_str("debug"), LoggingMode::Debug);
        assert_eq!(mode_from_str(" Development "), LoggingMode::Development);
        assert_eq!(mode_from_str("silent"), LoggingMode::Silent);
        assert_eq!(mode_from_str("verbose"), LoggingMode::Silent);
    }

    #[test]
    fn test_logging_error_display() {
        let err = LoggingError::InvalidFilter("[[".to_string());
        assert_eq!(err.to_string(), "Invalid log filter '[['");
    }
}
