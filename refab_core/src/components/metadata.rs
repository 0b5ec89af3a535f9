use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single legacy parameter value. The importer wraps every value in an object;
/// only `value` survives migration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MetadataValue {
    pub value: String,
}

impl MetadataValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Legacy metadata representation as written by the importer.
///
/// A node may end up carrying several copies of this component; everything past the
/// first is stale and gets discarded during migration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Persisted metadata representation, queryable outside the editor.
///
/// At most one per node; migration is skipped when one is already attached.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MetadataPlus {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, String>,
}

impl MetadataPlus {
    pub fn new() -> Self {
        Self::default()
    }
}
