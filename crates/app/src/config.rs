//! Application configuration.
//!
//! Values come from an optional `oapub.toml` file, overridden by `OAPUB_*`
//! environment variables (`OAPUB_OUTPUT_DIR`, `OAPUB_LOG_FILTER`).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "oapub.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "OAPUB";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory exported files are written to
    pub output_dir: PathBuf,
    /// Tracing filter directive; `RUST_LOG` applies when unset
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `file` (if it exists) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed or a value has the wrong
    /// type.
    pub fn load(file: &Path) -> Result<Self, ConfigError> {
        Self::load_with(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(file: &Path, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::from(file.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
