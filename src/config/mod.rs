//! Configuration management for the vesper application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the directory where
//! the journal's persisted state lives.
//!
//! # Environment Variables
//!
//! - `VESPER_DIR`: Path to the data directory (defaults to ~/Documents/vesper)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the vesper application.
///
/// This struct holds the configuration settings needed for the application,
/// currently the directory where the journal's key-value store file is kept.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use vesper::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/journal"),
/// };
/// assert!(config.store_path().ends_with("vesper.json"));
/// ```
pub struct Config {
    /// Directory where journal state is stored.
    ///
    /// This is loaded from the VESPER_DIR environment variable with a fallback
    /// to ~/Documents/vesper if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads configuration from environment variables, with fallbacks
    /// for missing values. It will expand the data directory path using `shellexpand`
    /// to handle `~` and environment variable references.
    ///
    /// # Environment Variables
    ///
    /// - `VESPER_DIR`: Data directory path (defaults to ~/Documents/vesper)
    ///
    /// # Returns
    ///
    /// A Result containing either the loaded Config or an AppError if path expansion fails.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails
    /// - The expanded data directory path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vesper::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Data directory: {}", config.data_dir.display()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get data directory from VESPER_DIR env var, fallback to ~/Documents/vesper
        let data_dir_str = env::var(constants::ENV_VAR_VESPER_DIR).unwrap_or_else(|_| {
            let home = env::var(constants::ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, constants::DEFAULT_DATA_SUBDIR)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let data_dir = PathBuf::from(expanded_path.into_owned());

        // Validate the configuration
        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// This method checks if the configuration meets the minimum requirements:
    /// - Data directory path is not empty
    /// - Data directory path is absolute
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty" if the data directory path is empty
    /// - "Data directory must be an absolute path" if the path is relative
    ///
    /// # Examples
    ///
    /// ```
    /// use vesper::Config;
    /// use std::path::PathBuf;
    ///
    /// // Valid configuration
    /// let valid_config = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// // Invalid configuration (relative path)
    /// let invalid_config = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns the path of the key-value store file inside the data directory.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(constants::STORE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_is_under_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/journal/data"),
        };
        assert_eq!(
            config.store_path(),
            PathBuf::from("/journal/data").join(constants::STORE_FILE_NAME)
        );
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_err());
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected Config error about empty path"),
        }
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        let config = Config {
            data_dir: PathBuf::from("relative/path"),
        };
        let result = config.validate();
        assert!(result.is_err());
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("absolute")),
            _ => panic!("Expected Config error about relative path"),
        }
    }

    #[test]
    fn test_debug_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/secret/location"),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("/secret/location"));
        assert!(debug.contains("[REDACTED_PATH]"));
    }
}
