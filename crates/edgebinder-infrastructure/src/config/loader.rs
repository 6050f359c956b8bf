//! Configuration loader
//!
//! Reads the host configuration from a TOML file and environment variables
//! using Figment.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [edgebinder.default]
//! adapter = "weaviate"
//! collection_name = "EdgeBindings"
//!
//! [edgebinder.analytics]
//! adapter = "memory"
//! ```
//!
//! Environment variables use the `EDGEBINDER_` prefix and `__` for nesting,
//! e.g. `EDGEBINDER_EDGEBINDER__ANALYTICS__ADAPTER=memory` or
//! `EDGEBINDER_LOGGING__LEVEL=debug`.

use std::env;
use std::path::{Path, PathBuf};

use edgebinder_domain::error::Result;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde_json::Value;

use crate::config::types::{HostConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default logging settings
    /// 2. TOML configuration file (if found)
    /// 3. Environment variables with the prefix
    pub fn load(&self) -> Result<HostConfig> {
        let mut figment =
            Figment::new().merge(Serialized::default("logging", LoggingConfig::default()));

        let path = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => Self::find_default_config_path(),
        };
        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                log_config_loaded(&path, true);
            } else {
                log_config_loaded(&path, false);
            }
        }

        // The log filter variable shares the prefix but is not configuration
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .ignore(&["log"])
                .split(CONFIG_ENV_SEPARATOR),
        );

        let tree: Value = figment
            .extract()
            .config_context("Failed to extract configuration")?;
        let logging: LoggingConfig = figment
            .extract_inner("logging")
            .config_context("Failed to extract logging configuration")?;

        parse_log_level(&logging.level)?;

        Ok(HostConfig { logging, tree })
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}
