pub mod mesh_instance_3d;
pub mod node_3d;
pub mod scene_node;

pub use mesh_instance_3d::MeshInstance3D;
pub use node_3d::Node3D;
pub use scene_node::{SceneNode, SceneNodeData};
