pub mod aabb_3d;
pub mod mesh_data;
pub mod quaternion;
pub mod transform_3d;
pub mod vector3;

pub use aabb_3d::Aabb3;
pub use mesh_data::MeshData;
pub use quaternion::Quaternion;
pub use transform_3d::Transform3D;
pub use vector3::Vector3;
