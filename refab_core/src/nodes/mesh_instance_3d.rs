use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use crate::nodes::node_3d::Node3D;
use crate::structs3d::MeshData;

/// A single renderable mesh within a prefab.
///
/// Wraps a `Node3D` for the transform and either references a mesh resource by path
/// or embeds the triangle data directly (BIM exports embed).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MeshInstance3D {
    /// Resource path for the mesh this instance uses (e.g., "res://models/duct.pmesh")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh_path: Option<Cow<'static, str>>,

    /// Embedded triangle geometry, local frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshData>,

    /// Base transform node (provides position/rotation/scale)
    #[serde(rename = "base", default)]
    pub base: Node3D,
}

impl MeshInstance3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mesh(mesh: MeshData) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::default()
        }
    }
}

impl Deref for MeshInstance3D {
    type Target = Node3D;
    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for MeshInstance3D {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
