//! Structured logging setup for packfile
//!
//! Logging goes through the `tracing` ecosystem. Output is pretty console text by
//! default, with an optional JSON layer for machine consumption. `RUST_LOG` takes
//! precedence over the configured level when it is set.
//!
//! # Example
//!
//! ```no_run
//! use packfile::util::logging;
//!
//! logging::init_from_env();
//!
//! tracing::info!("Application started");
//! tracing::debug!(dir = "weights", "Scanning directory");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., packfile::generate) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Reads `PACKFILE_LOG_LEVEL` and `PACKFILE_LOG_JSON` (true/false)
    pub fn from_env() -> Self {
        let level_str = env::var("PACKFILE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let use_json = env::var("PACKFILE_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level: parse_level(&level_str),
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string
///
/// Unknown values fall back to `Level::INFO` with a warning on stderr.
///
/// ```
/// use packfile::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Builds the filter for a level, deferring to `RUST_LOG` when it is set
fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }
    EnvFilter::new(format!("warn,packfile={}", level))
}

/// Initializes the logging system
///
/// Only the first call has any effect. Logs are written to stderr so that
/// manifests printed to stdout stay clean.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from environment variables, see [`LoggingConfig::from_env`]
pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
