//! Configuration management for packfile
//!
//! Settings are loaded from environment variables with sensible defaults.
//!
//! # Environment Variables
//!
//! - `PACKFILE_LOG_LEVEL`: Logging level - default: "info"
//! - `PACKFILE_CATCHALL_THRESHOLD`: Unprocessed directories tolerated before the whole
//!   root is packaged as code - default: "5"
//! - `PACKFILE_MAX_LICENSE_BYTES`: Bytes read from a license file - default: "1048576" (1MB)
//! - `PACKFILE_MANIFEST_NAME`: File name the CLI writes - default: "Packfile"
//!
//! # Example
//!
//! ```no_run
//! use packfile::{ManifestGenerator, PackfileConfig};
//! use std::path::Path;
//!
//! let config = PackfileConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let generator = ManifestGenerator::new().with_config(config.generator_config());
//! let manifest = generator.generate(Path::new("."), None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::generate::GeneratorConfig;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CATCHALL_THRESHOLD: usize = 5;
const DEFAULT_MAX_LICENSE_BYTES: usize = 1_048_576; // 1MB
const DEFAULT_MANIFEST_NAME: &str = "Packfile";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Main configuration structure for packfile
///
/// `Default::default()` loads from the environment. Unparseable numeric values
/// fall back to their defaults; use [`PackfileConfig::from_env`] to surface them
/// as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackfileConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// More unprocessed directories than this collapse into a catch-all code entry
    pub catchall_threshold: usize,

    /// Maximum bytes read from a license file
    pub max_license_bytes: usize,

    /// File name the manifest is written under
    pub manifest_name: String,
}

impl Default for PackfileConfig {
    fn default() -> Self {
        let log_level = env::var("PACKFILE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let catchall_threshold = env::var("PACKFILE_CATCHALL_THRESHOLD")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_CATCHALL_THRESHOLD);

        let max_license_bytes = env::var("PACKFILE_MAX_LICENSE_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_LICENSE_BYTES);

        let manifest_name =
            env::var("PACKFILE_MANIFEST_NAME").unwrap_or_else(|_| DEFAULT_MANIFEST_NAME.to_string());

        Self {
            log_level,
            catchall_threshold,
            max_license_bytes,
            manifest_name,
        }
    }
}

impl PackfileConfig {
    /// Loads configuration from the environment, rejecting unparseable values
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            catchall_threshold: parse_env_var(
                "PACKFILE_CATCHALL_THRESHOLD",
                DEFAULT_CATCHALL_THRESHOLD,
            )?,
            max_license_bytes: parse_env_var(
                "PACKFILE_MAX_LICENSE_BYTES",
                DEFAULT_MAX_LICENSE_BYTES,
            )?,
            ..defaults
        })
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the license cap is zero, the log level is
    /// unknown, or the manifest name is empty or not a plain file name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_license_bytes == 0 {
            return Err(ConfigError::ValidationFailed(
                "Max license bytes must be at least 1".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.manifest_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Manifest name cannot be empty".to_string(),
            ));
        }

        if self.manifest_name.contains(['/', '\\'])
            || self.manifest_name == "."
            || self.manifest_name == ".."
        {
            return Err(ConfigError::ValidationFailed(format!(
                "Manifest name must be a plain file name: {}",
                self.manifest_name
            )));
        }

        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            catchall_dir_threshold: self.catchall_threshold,
            max_license_bytes: self.max_license_bytes,
            manifest_name: self.manifest_name.clone(),
        }
    }
}

impl fmt::Display for PackfileConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packfile Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Catch-all Threshold: {}", self.catchall_threshold)?;
        writeln!(f, "  Max License Size: {} bytes", self.max_license_bytes)?;
        writeln!(f, "  Manifest Name: {}", self.manifest_name)?;
        Ok(())
    }
}

fn parse_env_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().map_err(|e| ConfigError::ParseError {
            field: key.to_string(),
            error: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    fn valid_config() -> PackfileConfig {
        PackfileConfig {
            log_level: "info".to_string(),
            catchall_threshold: 5,
            max_license_bytes: 1024,
            manifest_name: "Packfile".to_string(),
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("PACKFILE_LOG_LEVEL"),
            EnvGuard::unset("PACKFILE_CATCHALL_THRESHOLD"),
            EnvGuard::unset("PACKFILE_MAX_LICENSE_BYTES"),
            EnvGuard::unset("PACKFILE_MANIFEST_NAME"),
        ];

        let config = PackfileConfig::default();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.catchall_threshold, DEFAULT_CATCHALL_THRESHOLD);
        assert_eq!(config.max_license_bytes, DEFAULT_MAX_LICENSE_BYTES);
        assert_eq!(config.manifest_name, DEFAULT_MANIFEST_NAME);
        assert_eq!(config.generator_config(), GeneratorConfig::default());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("PACKFILE_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("PACKFILE_CATCHALL_THRESHOLD", "10"),
            EnvGuard::set("PACKFILE_MAX_LICENSE_BYTES", "2048"),
            EnvGuard::set("PACKFILE_MANIFEST_NAME", "packfile"),
        ];

        let config = PackfileConfig::default();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catchall_threshold, 10);
        assert_eq!(config.max_license_bytes, 2048);
        assert_eq!(config.manifest_name, "packfile");

        let generator_config = config.generator_config();
        assert_eq!(generator_config.catchall_dir_threshold, 10);
        assert_eq!(generator_config.max_license_bytes, 2048);
    }

    #[test]
    #[serial]
    fn test_invalid_number_falls_back_to_default() {
        let _guard = EnvGuard::set("PACKFILE_CATCHALL_THRESHOLD", "many");

        let config = PackfileConfig::default();
        assert_eq!(config.catchall_threshold, DEFAULT_CATCHALL_THRESHOLD);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_number() {
        let _guard = EnvGuard::set("PACKFILE_MAX_LICENSE_BYTES", "lots");

        let err = PackfileConfig::from_env().unwrap_err();
        match err {
            ConfigError::ParseError { field, .. } => {
                assert_eq!(field, "PACKFILE_MAX_LICENSE_BYTES")
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_configuration_validation_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_configuration_validation_zero_license_bytes() {
        let config = PackfileConfig {
            max_license_bytes: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_validation_invalid_log_level() {
        let config = PackfileConfig {
            log_level: "loud".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_validation_empty_manifest_name() {
        let config = PackfileConfig {
            manifest_name: "  ".to_string(),
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_validation_manifest_name_with_separator() {
        for name in ["../Packfile", "nested/Packfile", "..\\Packfile", ".."] {
            let config = PackfileConfig {
                manifest_name: name.to_string(),
                ..valid_config()
            };
            assert!(config.validate().is_err(), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_config_display() {
        let display = format!("{}", valid_config());
        assert!(display.contains("Packfile Configuration:"));
        assert!(display.contains("Catch-all Threshold: 5"));
    }
}
