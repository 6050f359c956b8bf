//! Unit tests for instance configuration lookup

use edgebinder_application::resolution::{configured_instances, resolve_instance_config};
use edgebinder_domain::{ConfigurationError, GlobalConfig};
use serde_json::{Value, json};

fn global(value: Value) -> GlobalConfig {
    GlobalConfig::from_value(value).unwrap()
}

#[test]
fn test_named_instance_is_returned_unchanged() {
    let analytics = json!({
        "adapter": "memory",
        "max_bindings": 100,
        "schema": {"auto_create": true}
    });
    let config = global(json!({
        "default": {"adapter": "weaviate"},
        "analytics": analytics.clone()
    }));

    let instance = resolve_instance_config(&config, "analytics").unwrap();

    assert_eq!(instance.adapter.as_deref(), Some("memory"));
    assert_eq!(instance.to_value(), analytics);
}

#[test]
fn test_legacy_shape_serves_default_only() {
    let config = global(json!({
        "adapter": "weaviate",
        "collection_name": "EdgeBindings"
    }));

    let default = resolve_instance_config(&config, "default").unwrap();
    assert_eq!(default.adapter_type(), "weaviate");
    assert_eq!(default.get_str("collection_name"), Some("EdgeBindings"));

    assert_eq!(
        resolve_instance_config(&config, "analytics"),
        Err(ConfigurationError::instance_not_configured("analytics"))
    );
}

#[test]
fn test_default_without_adapter_key_is_not_configured() {
    let config = global(json!({"analytics": {"adapter": "memory"}}));

    let err = resolve_instance_config(&config, "default").unwrap_err();

    assert_eq!(err, ConfigurationError::instance_not_configured("default"));
    assert_eq!(
        err.to_string(),
        "EdgeBinder instance 'default' is not configured"
    );
}

#[test]
fn test_null_instance_is_not_configured() {
    let config = global(json!({"analytics": null}));

    assert_eq!(
        resolve_instance_config(&config, "analytics"),
        Err(ConfigurationError::instance_not_configured("analytics"))
    );
}

#[test]
fn test_malformed_instance_is_invalid() {
    let config = global(json!({
        "scalar": "memory",
        "numeric_adapter": {"adapter": 42}
    }));

    for name in ["scalar", "numeric_adapter"] {
        assert!(matches!(
            resolve_instance_config(&config, name),
            Err(ConfigurationError::InvalidConfiguration { .. })
        ));
    }
}

#[test]
fn test_instance_without_adapter_defaults_to_weaviate() {
    let config = global(json!({"default": {"collection_name": "Edges"}}));

    let instance = resolve_instance_config(&config, "default").unwrap();

    assert_eq!(instance.adapter, None);
    assert_eq!(instance.adapter_type(), "weaviate");
}

#[test]
fn test_configured_instances_lists_mappings_sorted() {
    let config = global(json!({
        "primary": {"adapter": "memory"},
        "analytics": {"adapter": "null"},
        "version": 2
    }));

    assert_eq!(
        configured_instances(&config),
        vec!["analytics".to_string(), "primary".to_string()]
    );
    assert!(configured_instances(&GlobalConfig::default()).is_empty());
}
