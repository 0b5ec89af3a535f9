use serde::{Deserialize, Serialize};

use crate::structs3d::Vector3;

/// Axis-aligned bounding box in center/size form.
///
/// `size` is non-negative per axis. The box fitted from an empty point cloud is the
/// degenerate zero box at the origin.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Aabb3 {
    pub center: Vector3,
    pub size: Vector3,
}

impl Aabb3 {
    pub fn new(center: Vector3, size: Vector3) -> Self {
        Self { center, size }
    }

    /// Fit the tightest box around a point cloud.
    pub fn from_points(points: &[Vector3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }

        Self {
            center: (min + max) / 2.0,
            size: max - min,
        }
    }

    /// Lower corner of the box.
    pub fn min(&self) -> Vector3 {
        self.center - self.size / 2.0
    }

    /// Upper corner of the box.
    pub fn max(&self) -> Vector3 {
        self.center + self.size / 2.0
    }

    /// Whether the box spans no volume on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0 || self.size.z <= 0.0
    }
}
