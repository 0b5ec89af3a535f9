use serde::{Deserialize, Serialize};

use crate::structs3d::Vector3;

/// Embedded triangle geometry carried by a mesh instance node.
///
/// Positions are in the node's local frame; indices triple into `positions`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vector3>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(positions: Vec<Vector3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
