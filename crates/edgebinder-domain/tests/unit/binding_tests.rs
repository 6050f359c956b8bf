//! Unit tests for binding value objects

use edgebinder_domain::{Binding, EntityRef};
use serde_json::{Map, json};

#[test]
fn test_binding_involves_both_ends() {
    let workspace = EntityRef::new("workspace", "ws-1");
    let project = EntityRef::new("project", "p-1");
    let other = EntityRef::new("project", "p-2");

    let binding = Binding::new("b-1", workspace.clone(), project.clone(), "contains");

    assert!(binding.involves(&workspace));
    assert!(binding.involves(&project));
    assert!(!binding.involves(&other));
}

#[test]
fn test_binding_serialization() {
    let mut metadata = Map::new();
    metadata.insert("access_level".to_string(), json!("write"));

    let binding = Binding::new(
        "b-2",
        EntityRef::new("user", "u-1"),
        EntityRef::new("workspace", "ws-1"),
        "has_access",
    )
    .with_metadata(metadata);

    let value = serde_json::to_value(&binding).unwrap();
    assert_eq!(value["from"]["entity_type"], "user");
    assert_eq!(value["binding_type"], "has_access");
    assert_eq!(value["metadata"]["access_level"], "write");

    let parsed: Binding = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, binding);
}

#[test]
fn test_entity_ref_display() {
    assert_eq!(EntityRef::new("user", "u-1").to_string(), "user:u-1");
}
