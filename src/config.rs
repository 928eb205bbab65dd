//! Command-line configuration loaded from environment variables.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level or filter directives (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `.env` file in the working directory is honoured as well.

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Binary configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `log_level` is empty or not a valid filter directive
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("RUST_LOG must not be empty");
        }

        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            anyhow::bail!("RUST_LOG is not a valid filter '{}': {}", self.log_level, e);
        }

        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.log_format == "json"
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json());

        config.log_level = "  ".to_string();
        assert!(config.validate().is_err());

        config.log_level = "email_builder=debug,warn".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_invalid_filter() {
        let config = Config {
            log_level: "email_builder=loud".to_string(),
            ..Config::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("RUST_LOG"));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(!config.is_json());
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_unknown_format() {
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        let result = load_from_env();

        unsafe {
            env::remove_var("LOG_FORMAT");
        }

        let err = result.unwrap_err();
        assert!(err.to_string().contains("LOG_FORMAT"));
    }

    #[test]
    #[serial]
    fn test_load_from_env_reads_variables() {
        unsafe {
            env::set_var("RUST_LOG", "debug");
            env::set_var("LOG_FORMAT", "json");
        }

        let result = load_from_env();

        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = result.unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.is_json());
    }
}
