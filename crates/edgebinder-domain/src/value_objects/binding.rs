//! Binding value objects
//!
//! A binding is a typed, directed relationship between two entities,
//! persisted by whichever adapter an EdgeBinder instance resolved to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to an entity taking part in a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    /// Entity type (e.g., "workspace", "project")
    pub entity_type: String,
    /// Entity identifier within its type
    pub entity_id: String,
}

impl EntityRef {
    /// Create a new entity reference
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.entity_id)
    }
}

/// Relationship between two entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Unique binding identifier
    pub id: String,
    /// Source entity
    pub from: EntityRef,
    /// Target entity
    pub to: EntityRef,
    /// Relationship type (e.g., "has_access", "references")
    pub binding_type: String,
    /// Free-form metadata attached to the relationship
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Binding {
    /// Create a binding without metadata, timestamped now
    pub fn new(
        id: impl Into<String>,
        from: EntityRef,
        to: EntityRef,
        binding_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from,
            to,
            binding_type: binding_type.into(),
            metadata: Map::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether `entity` is either end of this binding
    pub fn involves(&self, entity: &EntityRef) -> bool {
        &self.from == entity || &self.to == entity
    }
}
