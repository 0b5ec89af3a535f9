use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;

use crate::components::{ColliderShape3D, Metadata, MetadataPlus};
use crate::nodes::mesh_instance_3d::MeshInstance3D;
use crate::nodes::node_3d::Node3D;
use crate::structs3d::MeshData;

/// Per-kind node payload. The `type` tag distinguishes the variants in the
/// serialized form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type")]
pub enum SceneNodeData {
    #[default]
    Node,
    Node3D(Node3D),
    MeshInstance3D(MeshInstance3D),
}

impl SceneNodeData {
    pub fn node_type(&self) -> &'static str {
        match self {
            SceneNodeData::Node => "Node",
            SceneNodeData::Node3D(_) => "Node3D",
            SceneNodeData::MeshInstance3D(_) => "MeshInstance3D",
        }
    }
}

/// A node in a prefab document.
///
/// Identity/hierarchy plus explicit component slots; the kind-specific payload lives
/// in `data`. Children are rebuilt from the serialized parent pointers on load, and
/// the map key in `PrefabData` is the canonical id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SceneNode {
    #[serde(skip)]
    pub id: Uuid,

    pub name: Cow<'static, str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Uuid>,

    #[serde(skip)]
    pub children: Vec<Uuid>,

    /// Stored prefab this node is an instance of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_of: Option<Cow<'static, str>>,

    /// Stored prefab this node is the root of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root_of: Option<Cow<'static, str>>,

    /// Legacy metadata copies. More than one means stale duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_metadata: Vec<Metadata>,

    /// Persisted metadata, at most one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataPlus>,

    /// Collision proxy, at most one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collider: Option<ColliderShape3D>,

    #[serde(flatten)]
    pub data: SceneNodeData,
}

impl SceneNode {
    pub fn new(name: impl Into<Cow<'static, str>>, data: SceneNodeData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            instance_of: None,
            is_root_of: None,
            legacy_metadata: Vec::new(),
            metadata: None,
            collider: None,
            data,
        }
    }

    pub fn node_type(&self) -> &'static str {
        self.data.node_type()
    }

    /// The spatial payload of a 3D node, if any.
    pub fn spatial(&self) -> Option<&Node3D> {
        match &self.data {
            SceneNodeData::Node => None,
            SceneNodeData::Node3D(n) => Some(n),
            SceneNodeData::MeshInstance3D(m) => Some(&m.base),
        }
    }

    pub fn spatial_mut(&mut self) -> Option<&mut Node3D> {
        match &mut self.data {
            SceneNodeData::Node => None,
            SceneNodeData::Node3D(n) => Some(n),
            SceneNodeData::MeshInstance3D(m) => Some(&mut m.base),
        }
    }

    /// Whether this node carries renderable geometry.
    pub fn is_renderable(&self) -> bool {
        matches!(self.data, SceneNodeData::MeshInstance3D(_))
    }

    pub fn mesh_data(&self) -> Option<&MeshData> {
        match &self.data {
            SceneNodeData::MeshInstance3D(m) => m.mesh.as_ref(),
            _ => None,
        }
    }

    /// The stored asset backing this node: the prefab it instances, or, failing
    /// that, the prefab it is itself the root of.
    pub fn source_asset_path(&self) -> Option<&str> {
        self.instance_of
            .as_deref()
            .or(self.is_root_of.as_deref())
    }

    pub fn add_child(&mut self, child: Uuid) {
        self.children.push(child);
    }

    pub fn remove_child(&mut self, c: &Uuid) {
        self.children.retain(|x| x != c);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }
}
