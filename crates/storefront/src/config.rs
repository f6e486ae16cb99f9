//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HONEYSHOP_DATA_DIR` - Directory for the durable snapshot files
//!   (default: `./data`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory when `HONEYSHOP_DATA_DIR` is unset.
const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is present but not valid for its type.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed storage writes under.
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("HONEYSHOP_DATA_DIR", DEFAULT_DATA_DIR);
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "HONEYSHOP_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        let value = get_env_or_default("HONEYSHOP_TEST_UNSET_VAR", DEFAULT_DATA_DIR);
        assert_eq!(value, "./data");
    }
}
