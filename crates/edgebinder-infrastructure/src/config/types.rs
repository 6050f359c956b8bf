//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Configuration loaded from files and environment
///
/// `tree` is the whole host configuration; it becomes the container's
/// `config` service, with the EdgeBinder instances under its `edgebinder`
/// key. `logging` is the typed view of its `logging` key.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Full configuration tree
    pub tree: Value,
}
