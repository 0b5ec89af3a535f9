use refab_core::{Aabb3, ColliderShape3D, MeshData, PrefabData, Vector3};

/// Normalize the orientation and origin of the prefab's first renderable part and
/// swap its temporary box proxy for a convex hull.
///
/// The box proxy is fitted to the mesh bounds and read *before* any rotation; the
/// rotated branch reuses that pre-rotation center when computing the offset. After
/// the move, the part sits horizontally centered at the origin with its lower bound
/// at y = 0, footprint long axis along X.
///
/// A prefab without a renderable part is left untouched.
pub fn recentre_bounds(prefab: &mut PrefabData) {
    let Some(target_id) = prefab.find_first_renderable() else {
        return;
    };
    let Some(node) = prefab.get_mut(&target_id) else {
        return;
    };

    let mesh = node.mesh_data().cloned().unwrap_or_else(MeshData::default);
    let aabb = Aabb3::from_points(&mesh.positions);
    node.collider = Some(ColliderShape3D::Box {
        center: aabb.center,
        size: aabb.size,
    });
    let (center, size) = (aabb.center, aabb.size);

    // Footprint deeper than wide: turn the part 90° about Y so the long axis lands
    // on X, and swap the X/Z roles of the pre-rotation center in the offset.
    let offset = if size.x < size.z {
        if let Some(spatial) = node.spatial_mut() {
            spatial.transform.rotation = spatial.transform.rotation.rotate_y(90.0);
        }
        Vector3::new(center.z, -(size.y / 2.0 - center.y), -center.x)
    } else {
        Vector3::new(center.x, -(size.y / 2.0 - center.y), center.z)
    };

    if let Some(spatial) = node.spatial_mut() {
        let new_position = spatial.transform.position - offset;
        spatial.transform.position = new_position;
    }

    // Replacing the slot destroys the temporary box.
    match ColliderShape3D::convex_hull(&mesh) {
        Some(hull) => node.collider = Some(hull),
        None => {
            node.collider = None;
            log::warn!(
                "convex hull construction failed for `{}`, no collision proxy attached",
                node.name
            );
        }
    }
}
