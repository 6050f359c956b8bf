//! Configuration value objects
//!
//! The host configuration is an untyped tree. These types give the
//! EdgeBinder part of it a shape: [`GlobalConfig`] is the `edgebinder`
//! sub-tree, [`InstanceConfig`] one named instance inside it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{ADAPTER_KEY, DEFAULT_ADAPTER_TYPE};
use crate::error::{ConfigResult, ConfigurationError};

/// The `edgebinder` configuration sub-tree
///
/// Normally maps instance names to instance configurations. Older setups
/// put a single instance configuration directly at this level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig(Map<String, Value>);

impl GlobalConfig {
    /// Create from an already extracted mapping
    pub fn new(entries: Map<String, Value>) -> Self {
        Self(entries)
    }

    /// Create from a JSON value, which must be a mapping
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        match value {
            Value::Object(entries) => Ok(Self(entries)),
            other => Err(ConfigurationError::invalid_configuration(format!(
                "edgebinder configuration must be a mapping, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Value stored under `key`, treating explicit nulls as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Whether `key` holds a non-null value
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether the configuration uses the legacy single-instance shape
    pub fn is_legacy_shape(&self) -> bool {
        self.contains(ADAPTER_KEY)
    }

    /// Whether the configuration has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying mapping
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert back into a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for GlobalConfig {
    fn from(entries: Map<String, Value>) -> Self {
        Self(entries)
    }
}

/// Configuration of a single EdgeBinder instance
///
/// `adapter` selects the adapter type. Every other key is adapter-specific
/// and carried through untouched in `settings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Adapter type identifier (e.g., "weaviate", "memory")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
    /// Adapter-specific settings
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl InstanceConfig {
    /// Create a config for the given adapter type
    pub fn new(adapter: impl Into<String>) -> Self {
        Self {
            adapter: Some(adapter.into()),
            settings: Map::new(),
        }
    }

    /// Parse the configuration of instance `instance` from a JSON value
    ///
    /// The value must be a mapping and `adapter`, when present and not null,
    /// must be a string.
    pub fn from_value(instance: &str, value: &Value) -> ConfigResult<Self> {
        let Value::Object(entries) = value else {
            return Err(ConfigurationError::invalid_configuration(format!(
                "configuration of instance '{instance}' must be a mapping, got {}",
                value_kind(value)
            )));
        };

        let mut settings = entries.clone();
        let adapter = match settings.remove(ADAPTER_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(adapter)) => Some(adapter),
            Some(other) => {
                return Err(ConfigurationError::invalid_configuration(format!(
                    "'{ADAPTER_KEY}' of instance '{instance}' must be a string, got {}",
                    value_kind(&other)
                )));
            }
        };

        Ok(Self { adapter, settings })
    }

    /// Adapter type, falling back to [`DEFAULT_ADAPTER_TYPE`]
    pub fn adapter_type(&self) -> &str {
        self.adapter.as_deref().unwrap_or(DEFAULT_ADAPTER_TYPE)
    }

    /// Adapter-specific setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    /// Adapter-specific setting as a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    /// Add an adapter-specific setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Convert back into the JSON mapping it was parsed from
    pub fn to_value(&self) -> Value {
        let mut entries = self.settings.clone();
        if let Some(adapter) = &self.adapter {
            entries.insert(ADAPTER_KEY.to_string(), Value::String(adapter.clone()));
        }
        Value::Object(entries)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
