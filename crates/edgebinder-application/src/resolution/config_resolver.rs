//! Instance configuration lookup
//!
//! Finds the configuration of a named instance inside the `edgebinder`
//! sub-tree. Named instances live under their own key; older setups put a
//! single configuration at the top level, which only the `default`
//! instance may use.

use edgebinder_domain::constants::DEFAULT_INSTANCE_NAME;
use edgebinder_domain::error::{ConfigResult, ConfigurationError};
use edgebinder_domain::{GlobalConfig, InstanceConfig};
use serde_json::Value;

/// Resolve the configuration of instance `name`
///
/// 1. `global[name]` when present (multi-instance form)
/// 2. `global` itself when `name` is `default` and `global` has an
///    `adapter` key (legacy single-instance form)
/// 3. otherwise `InstanceNotConfigured(name)`
///
/// The matched sub-tree is parsed into an [`InstanceConfig`]; a malformed
/// sub-tree fails with `InvalidConfiguration`.
pub fn resolve_instance_config(global: &GlobalConfig, name: &str) -> ConfigResult<InstanceConfig> {
    if let Some(instance) = global.get(name) {
        return InstanceConfig::from_value(name, instance);
    }

    if name == DEFAULT_INSTANCE_NAME && global.is_legacy_shape() {
        return InstanceConfig::from_value(name, &global.to_value());
    }

    Err(ConfigurationError::instance_not_configured(name))
}

/// Names of the instances `global` configures
///
/// A legacy single-instance configuration yields `["default"]`; otherwise
/// every key holding a mapping is an instance. Names are sorted.
pub fn configured_instances(global: &GlobalConfig) -> Vec<String> {
    let legacy = global.is_legacy_shape() && !global.contains(DEFAULT_INSTANCE_NAME);
    let mut names: Vec<String> = if legacy {
        vec![DEFAULT_INSTANCE_NAME.to_string()]
    } else {
        global
            .as_map()
            .iter()
            .filter(|(_, value)| matches!(value, Value::Object(_)))
            .map(|(name, _)| name.clone())
            .collect()
    };
    names.sort();
    names
}
