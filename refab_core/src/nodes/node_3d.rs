use serde::{Deserialize, Serialize};

use crate::structs3d::Transform3D;

fn default_visible() -> bool {
    true
}

fn is_default_visible(v: &bool) -> bool {
    *v == default_visible()
}

/// Spatial node payload: local transform plus visibility.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node3D {
    #[serde(
        skip_serializing_if = "Transform3D::is_default",
        default = "Transform3D::default"
    )]
    pub transform: Transform3D,

    #[serde(
        default = "default_visible",
        skip_serializing_if = "is_default_visible"
    )]
    pub visible: bool,
}

impl Node3D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for Node3D {
    fn default() -> Self {
        Self {
            transform: Transform3D::default(),
            visible: default_visible(),
        }
    }
}
