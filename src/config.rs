//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::domain::NameValidation;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing CSV file (default: "contacts.csv")
    pub contacts_file: PathBuf,

    /// Destination of the export command (default: "exported_contacts.csv")
    pub export_file: PathBuf,

    /// How first and last names are validated (default: permissive)
    pub name_validation: NameValidation,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Backing CSV file (default: contacts.csv)
    /// - `CONTACTS_EXPORT_FILE`: Export destination (default: exported_contacts.csv)
    /// - `NAME_VALIDATION`: `permissive` or `strict` (default: permissive)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let contacts_file = Self::parse_env_path("CONTACTS_FILE", defaults.contacts_file)?;
        let export_file = Self::parse_env_path("CONTACTS_EXPORT_FILE", defaults.export_file)?;

        if contacts_file == export_file {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_EXPORT_FILE".to_string(),
                reason: "Must differ from CONTACTS_FILE".to_string(),
            });
        }

        let name_validation = match env::var("NAME_VALIDATION") {
            Ok(val) => val
                .parse::<NameValidation>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "NAME_VALIDATION".to_string(),
                    reason,
                })?,
            Err(_) => defaults.name_validation,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_file,
            export_file,
            name_validation,
            log_level,
        })
    }

    /// Parse an environment variable as a file path with a default value.
    fn parse_env_path(var_name: &str, default: PathBuf) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val.trim())),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
            Err(env::VarError::NotPresent) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from("contacts.csv"),
            export_file: PathBuf::from("exported_contacts.csv"),
            name_validation: NameValidation::Permissive,
            log_level: "error".to_string(),
        }
    }
}
