pub mod collider_shape_3d;
pub mod metadata;

pub use collider_shape_3d::ColliderShape3D;
pub use metadata::{Metadata, MetadataPlus, MetadataValue};
