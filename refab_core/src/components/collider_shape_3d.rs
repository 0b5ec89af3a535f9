use rapier3d::na::Point3;
use rapier3d::prelude::SharedShape;
use serde::{Deserialize, Serialize};

use crate::structs3d::{Aabb3, MeshData, Vector3};

/// Collision proxy attached to a node.
///
/// `Box` is the transient proxy fitted from an AABB; `ConvexHull` is the persisted
/// proxy derived from actual mesh geometry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "shape")]
pub enum ColliderShape3D {
    Box { center: Vector3, size: Vector3 },
    ConvexHull { points: Vec<Vector3> },
}

impl ColliderShape3D {
    /// Fit a box proxy to the mesh's local bounds. An empty mesh yields the zero box.
    pub fn fit_box(mesh: &MeshData) -> Self {
        let aabb = Aabb3::from_points(&mesh.positions);
        Self::Box {
            center: aabb.center,
            size: aabb.size,
        }
    }

    /// Build a convex hull proxy from the mesh's vertex cloud.
    ///
    /// Returns `None` for geometry the hull builder cannot handle (fewer than four
    /// vertices, or a cloud that spans no volume).
    pub fn convex_hull(mesh: &MeshData) -> Option<Self> {
        if mesh.positions.len() < 4 {
            return None;
        }
        if Aabb3::from_points(&mesh.positions).is_degenerate() {
            return None;
        }

        let points: Vec<Point3<f32>> = mesh
            .positions
            .iter()
            .map(|p| Point3::new(p.x, p.y, p.z))
            .collect();

        let shape = SharedShape::convex_hull(&points)?;
        let hull = shape.as_convex_polyhedron()?;

        Some(Self::ConvexHull {
            points: hull
                .points()
                .iter()
                .map(|p| Vector3::new(p.x, p.y, p.z))
                .collect(),
        })
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Self::Box { .. })
    }

    pub fn is_convex_hull(&self) -> bool {
        matches!(self, Self::ConvexHull { .. })
    }
}
