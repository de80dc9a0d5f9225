//! Configuration System
//!
//! Layered configuration for the navigation host: an optional config file
//! overlaid with `CASETREE_`-prefixed environment variables, deserialized
//! onto serde defaults.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CasetreeConfig {
    /// Case settings
    #[serde(default)]
    pub case: CaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Case-related settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Default case description file, used when the CLI gives none
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl CasetreeConfig {
    /// Load configuration from an explicit file plus the environment.
    ///
    /// With no file given, `casetree.toml` in the working directory is
    /// used when present. Environment variables use the `CASETREE_`
    /// prefix with `__` as the section separator
    /// (e.g. `CASETREE_LOGGING__LEVEL=debug`).
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("casetree").required(false)),
        };
        builder = builder.add_source(
            config::Environment::with_prefix("CASETREE")
                .separator("__")
                .try_parsing(true),
        );
        let loaded = builder.build()?;
        Ok(loaded.try_deserialize()?)
    }
}
