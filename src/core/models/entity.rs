//! Catalog entity model
//!
//! Only `kind` and the annotation map are interpreted. Every other field is
//! carried through untouched so entities round-trip losslessly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API version written by [`Entity::new`]
pub const DEFAULT_API_VERSION: &str = "backstage.io/v1alpha1";

/// A catalog entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Descriptor format version, e.g. `backstage.io/v1alpha1`
    pub api_version: String,

    /// Entity kind, e.g. `Component` or `API`
    pub kind: String,

    /// Entity metadata
    pub metadata: EntityMetadata,

    /// Remaining top-level fields (`spec`, `relations`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entity metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Entity name
    pub name: String,

    /// Annotations; absent until the first key is written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    /// Remaining metadata fields (`namespace`, `labels`, `tags`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Create a bare entity with the default API version
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: DEFAULT_API_VERSION.to_string(),
            kind: kind.into(),
            metadata: EntityMetadata {
                name: name.into(),
                annotations: None,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Look up an annotation value
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.as_ref()?.get(key).map(String::as_str)
    }

    /// Set an annotation unless the key is already present
    ///
    /// Returns `true` if the value was written. An existing value is never
    /// replaced, even when it differs.
    pub fn set_annotation_if_absent(&mut self, key: &str, value: impl Into<String>) -> bool {
        let annotations = self.metadata.annotations.get_or_insert_with(BTreeMap::new);
        if annotations.contains_key(key) {
            return false;
        }
        annotations.insert(key.to_string(), value.into());
        true
    }
}
