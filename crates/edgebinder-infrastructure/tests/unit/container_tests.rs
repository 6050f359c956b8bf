//! Service container tests

use std::sync::Arc;

use edgebinder_domain::ports::{AdapterFactoryService, ServiceContainer, SharedAdapter};
use edgebinder_infrastructure::InMemoryServiceContainer;
use edgebinder_providers::NullAdapter;
use serde_json::{Value, json};

#[test]
fn test_config_service_downcasts_to_value() {
    let container = InMemoryServiceContainer::with_config(json!({"edgebinder": {}}));
    let container: &dyn ServiceContainer = &container;

    let config: Option<Value> = container.get_as("config");

    assert_eq!(config, Some(json!({"edgebinder": {}})));
}

#[test]
fn test_adapter_factory_is_retrievable_by_type_name() {
    let container = InMemoryServiceContainer::new();
    container.register_adapter_factory(
        "null",
        AdapterFactoryService::callable(|_| Some(Arc::new(NullAdapter::new()) as SharedAdapter)),
    );
    let container: &dyn ServiceContainer = &container;

    let service = container.get_as::<AdapterFactoryService>("edgebinder.adapter.null");

    assert_eq!(service.map(|s| s.convention()), Some("callable"));
    assert!(container.get_as::<Value>("edgebinder.adapter.null").is_none());
}

#[test]
fn test_service_names_sorted() {
    let container = InMemoryServiceContainer::new();
    container.register("zeta", 1_u8);
    container.register("alpha", 2_u8);
    container.register_config(json!({}));

    assert_eq!(container.service_names(), vec!["alpha", "config", "zeta"]);
    assert_eq!(container.len(), 3);
    assert!(!container.is_empty());
}

#[test]
fn test_remove_unknown_service() {
    let container = InMemoryServiceContainer::new();

    assert!(!container.remove("missing"));
    assert!(container.is_empty());
}
