use serde::{Deserialize, Serialize};

use crate::structs3d::{Quaternion, Vector3};

fn default_position() -> Vector3 {
    Vector3::zero()
}
fn is_default_position(v: &Vector3) -> bool {
    *v == default_position()
}

fn default_rotation() -> Quaternion {
    Quaternion::identity()
}
fn is_default_rotation(v: &Quaternion) -> bool {
    *v == default_rotation()
}

fn default_scale() -> Vector3 {
    Vector3::one()
}
fn is_default_scale(v: &Vector3) -> bool {
    *v == default_scale()
}

/// Local 3D transform carried by spatial nodes.
///
/// Position (`Vector3`), rotation (`Quaternion`), and scale (`Vector3`).
#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq)]
pub struct Transform3D {
    #[serde(
        default = "default_position",
        skip_serializing_if = "is_default_position"
    )]
    pub position: Vector3,

    #[serde(
        default = "default_rotation",
        skip_serializing_if = "is_default_rotation"
    )]
    pub rotation: Quaternion,

    #[serde(default = "default_scale", skip_serializing_if = "is_default_scale")]
    pub scale: Vector3,
}

impl Transform3D {
    /// Create a new `Transform3D`
    pub fn new(position: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Build a transform from a position, with identity rotation and unit scale.
    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Check whether all components are default.
    pub fn is_default(&self) -> bool {
        is_default_position(&self.position)
            && is_default_rotation(&self.rotation)
            && is_default_scale(&self.scale)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: default_position(),
            rotation: default_rotation(),
            scale: default_scale(),
        }
    }
}
