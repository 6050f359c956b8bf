//! Runtime bootstrap tests
//!
//! Resolve instances end to end against the bundled adapters.

use std::sync::Arc;

use edgebinder_domain::ports::{
    AdapterFactoryService, ServiceContainer, SharedAdapter, WeaviateAdapterFactory,
};
use edgebinder_domain::{ConfigurationError, EntityRef, InstanceConfig, Result};
use edgebinder_infrastructure::{ConfigLoader, EdgeBinderRuntime, build_container};
use edgebinder_providers::{InMemoryAdapter, NullAdapter};
use figment::Jail;
use serde_json::{Map, json};

fn runtime() -> EdgeBinderRuntime {
    EdgeBinderRuntime::from_config(json!({
        "edgebinder": {
            "default": {"adapter": "memory"},
            "audit": {"adapter": "null"},
            "limited": {"adapter": "memory", "max_bindings": "many"},
            "vectors": {"adapter": "weaviate", "collection_name": "Edges"}
        }
    }))
}

struct FakeWeaviateFactory;

impl WeaviateAdapterFactory for FakeWeaviateFactory {
    fn create_adapter_from_config(
        &self,
        _container: &dyn ServiceContainer,
        instance: &InstanceConfig,
    ) -> Result<SharedAdapter> {
        assert_eq!(instance.get_str("collection_name"), Some("Edges"));
        Ok(Arc::new(InMemoryAdapter::new()))
    }
}

#[test]
fn test_build_container_registers_config() {
    let container = build_container(json!({"edgebinder": {}}));

    assert_eq!(container.service_names(), vec!["config"]);
}

#[test]
fn test_bundled_adapters_resolve() {
    let runtime = runtime();

    assert_eq!(runtime.default_binder().unwrap().provider_name(), "memory");
    assert_eq!(runtime.binder("audit").unwrap().provider_name(), "null");
}

#[test]
fn test_adapter_validation_error_surfaces() {
    let err = runtime().binder("limited").unwrap_err();

    assert!(matches!(
        err.as_configuration(),
        Some(ConfigurationError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_weaviate_needs_registered_factory() {
    let runtime = runtime();

    let err = runtime.binder("vectors").unwrap_err();
    assert_eq!(
        err.as_configuration(),
        Some(&ConfigurationError::missing_service(
            "edgebinder.factory.weaviate"
        ))
    );

    runtime
        .container()
        .register_weaviate_factory(Arc::new(FakeWeaviateFactory));
    assert_eq!(runtime.binder("vectors").unwrap().provider_name(), "memory");
}

#[test]
fn test_container_factory_for_custom_type() {
    let runtime = EdgeBinderRuntime::from_config(json!({
        "edgebinder": {"graph": {"adapter": "graph"}}
    }));
    runtime.container().register_adapter_factory(
        "graph",
        AdapterFactoryService::callable(|_| Some(Arc::new(NullAdapter::new()) as SharedAdapter)),
    );

    assert_eq!(runtime.binder("graph").unwrap().provider_name(), "null");
}

#[test]
fn test_unknown_instance_and_type() {
    let runtime = EdgeBinderRuntime::from_config(json!({
        "edgebinder": {"other": {"adapter": "cassandra"}}
    }));

    assert_eq!(
        runtime.binder("missing").unwrap_err().as_configuration(),
        Some(&ConfigurationError::instance_not_configured("missing"))
    );
    assert_eq!(
        runtime.binder("other").unwrap_err().as_configuration(),
        Some(&ConfigurationError::unsupported_adapter("cassandra"))
    );
}

#[test]
fn test_configured_instances() {
    assert_eq!(
        runtime().configured_instances().unwrap(),
        vec!["audit", "default", "limited", "vectors"]
    );
}

#[tokio::test]
async fn test_binder_round_trip_through_runtime() {
    let binder = runtime().default_binder().unwrap();
    let from = EntityRef::new("user", "u-1");
    let to = EntityRef::new("document", "d-1");

    let binding = binder
        .bind(from.clone(), to.clone(), "owns", Map::new())
        .await
        .unwrap();

    assert!(binder.are_bound(&from, &to, "owns").await.unwrap());
    assert_eq!(binder.bindings_for(&to).await.unwrap(), vec![binding]);
}

#[test]
fn test_load_from_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "edgebinder.toml",
            r#"
                [edgebinder]
                adapter = "null"
            "#,
        )?;

        let runtime = EdgeBinderRuntime::load(&ConfigLoader::new()).map_err(|e| e.to_string())?;
        let binder = runtime.default_binder().map_err(|e| e.to_string())?;

        assert_eq!(binder.provider_name(), "null");
        assert_eq!(runtime.configured_instances().unwrap(), vec!["default"]);
        Ok(())
    });
}
