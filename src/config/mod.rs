//! Runtime configuration for the `myhealth` library.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{MyHealthError, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MYHEALTH_DATA_DIR";

/// Configuration for local data storage and serialization
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding locally persisted application data
    pub data_dir: PathBuf,
    /// File name of the passport key-value store inside `data_dir`
    pub passport_file: String,
    /// Whether persisted JSON is pretty-printed
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./myhealth-data"),
            passport_file: "passport.json".to_string(),
            pretty_json: false,
        }
    }
}

impl AppConfig {
    /// Builds a configuration from the environment, falling back to defaults.
    ///
    /// `MYHEALTH_DATA_DIR` overrides the data directory when set. A value
    /// that is set but not valid Unicode is rejected.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        match env::var(DATA_DIR_ENV) {
            Ok(dir) => config.data_dir = PathBuf::from(dir),
            Err(env::VarError::NotPresent) => {}
            Err(env::VarError::NotUnicode(_)) => {
                return Err(MyHealthError::ConfigError(format!(
                    "{DATA_DIR_ENV} is not valid Unicode"
                )));
            }
        }
        Ok(config)
    }

    /// Full path of the passport store file.
    #[must_use]
    pub fn passport_path(&self) -> PathBuf {
        self.data_dir.join(&self.passport_file)
    }

    /// Returns a copy with the data directory replaced.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = dir.to_path_buf();
        self
    }
}
