//! Configuration system for sfdoc.
//!
//! # Configuration Hierarchy
//!
//! Settings are resolved in the following order of precedence (highest to
//! lowest):
//! 1. **Environment Variables**: `SFDOC_*` (e.g. `SFDOC_DOCUMENTER__USERNAME=jane@example.com`)
//! 2. **Configuration File**: `sfdoc.toml` (`[documenter]` and `[logging]` tables)
//! 3. **Migrated Legacy Values**: a pre-rename `[autoheader]` table, honored with a warning
//! 4. **Default Values**: hardcoded defaults in the configuration structs
//!
//! # Configuration File Example
//!
//! ```toml
//! # sfdoc.toml
//! [documenter]
//! username = "jane@example.com"
//! date_format = "DD-MM-YYYY"
//!
//! [documenter.languages]
//! lightning_javascript = true
//!
//! [documenter.file_header]
//! modification_log = false
//! ```
//!
//! # Environment Variables
//!
//! Override any setting using environment variables with the prefix
//! `SFDOC_`. Use `__` as a separator for nested keys.
//!
//! ```bash
//! # Overrides [documenter].username
//! export SFDOC_DOCUMENTER__USERNAME=ci-bot@example.com
//!
//! # Overrides [documenter.languages].all_web_files
//! export SFDOC_DOCUMENTER__LANGUAGES__ALL_WEB_FILES=true
//! ```

pub mod documenter;
pub mod logging;
mod migration;

pub use documenter::{DocumenterConfig, FileHeaderConfig, LanguageToggles, MethodHeaderConfig};
pub use logging::{LogFormat, LoggingConfig};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the sfdoc binary and engine.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging output settings.
    pub logging: LoggingConfig,
    /// Header engine settings.
    pub documenter: DocumenterConfig,
}

impl AppConfig {
    /// Default configuration file name, searched in the working directory.
    pub const FILE_NAME: &'static str = "sfdoc.toml";

    /// Loads configuration by layering defaults, migrated legacy values,
    /// the TOML file, and environment variables.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();

        if let Some(legacy) = migration::legacy_documenter_values(config_path) {
            figment = figment.merge(Serialized::default("documenter", legacy));
        }

        figment
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SFDOC_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Figment error: {0}")]
    Figment(#[from] figment::Error),
}
