use std::io;

use refab_core::{Node3D, PREFAB_EXT, PrefabData, SceneNode, SceneNodeData, Vector3};

/// Turn a loaded child prefab into a standalone asset under `output_dir`.
///
/// The root's inherited position offset is stripped (rotation untouched). A root
/// that already has children is saved as-is; a leaf is nested inside a fresh empty
/// wrapper so every output shares the same one-extra-level container shape, which
/// keeps the downstream renderable lookup uniform. The input document is consumed.
///
/// Returns the persisted path (`<output_dir>/<name>.pfab`). A later child with the
/// same name overwrites an earlier one's file.
pub fn flatten_child(mut child: PrefabData, output_dir: &str) -> io::Result<String> {
    let Some(root) = child.root_mut() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "prefab has no root node",
        ));
    };

    if let Some(spatial) = root.spatial_mut() {
        spatial.transform.position = Vector3::zero();
    }

    let name = root.name.to_string();
    let local_path = format!("{}/{name}.{PREFAB_EXT}", output_dir.trim_end_matches('/'));

    if !root.children.is_empty() {
        child.save(&local_path)?;
    } else {
        let wrapper = PrefabData::new(SceneNode::new(
            name,
            SceneNodeData::Node3D(Node3D::new()),
        ));
        wrapper.save(&local_path)?;

        let mut formatted = PrefabData::load(&local_path)?;
        let wrapper_root = formatted.root_id;
        formatted.instantiate_from(&child, child.root_id, wrapper_root);
        formatted.save(&local_path)?;
    }

    Ok(local_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_test_dir;
    use refab_core::{MeshInstance3D, Transform3D};
    use std::fs;

    fn leaf_child(name: &str, position: Vector3) -> PrefabData {
        let mut node = SceneNode::new(
            name.to_string(),
            SceneNodeData::MeshInstance3D(MeshInstance3D::new()),
        );
        if let Some(spatial) = node.spatial_mut() {
            spatial.transform = Transform3D::from_position(position);
        }
        PrefabData::new(node)
    }

    #[test]
    fn leaf_gets_wrapped_in_a_container() -> io::Result<()> {
        let base = temp_test_dir();
        let out = base.to_string_lossy().to_string();

        let path = flatten_child(leaf_child("Pipe", Vector3::new(4.0, 0.0, -2.0)), &out)?;
        assert!(path.ends_with("Pipe.pfab"));

        let output = PrefabData::load(&path)?;
        let root = output.root().expect("wrapper root");
        assert_eq!(root.name, "Pipe");
        // Uniform container shape: exactly one immediate child, whatever the input was.
        assert_eq!(root.children.len(), 1);

        let inner = output.get(&root.children[0]).unwrap();
        assert_eq!(inner.name, "Pipe");
        assert!(inner.is_renderable());
        assert_eq!(
            inner.spatial().unwrap().transform.position,
            Vector3::zero()
        );

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn composite_is_saved_directly() -> io::Result<()> {
        let base = temp_test_dir();
        let out = base.to_string_lossy().to_string();

        let mut child = PrefabData::new(SceneNode::new(
            "Frame",
            SceneNodeData::Node3D(Node3D::new()),
        ));
        if let Some(spatial) = child.root_mut().unwrap().spatial_mut() {
            spatial.transform.position = Vector3::new(10.0, 0.0, 3.0);
        }
        let root_id = child.root_id;
        child.add_node(
            SceneNode::new(
                "FrameMesh",
                SceneNodeData::MeshInstance3D(MeshInstance3D::new()),
            ),
            Some(root_id),
        );

        let path = flatten_child(child, &out)?;
        let output = PrefabData::load(&path)?;
        let root = output.root().expect("root");
        assert_eq!(root.name, "Frame");
        assert_eq!(root.children.len(), 1);
        // No extra wrapper level: the mesh child is directly under the root.
        assert!(output.get(&root.children[0]).unwrap().is_renderable());
        assert_eq!(
            root.spatial().unwrap().transform.position,
            Vector3::zero()
        );

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn same_name_overwrites() -> io::Result<()> {
        let base = temp_test_dir();
        let out = base.to_string_lossy().to_string();

        let first = flatten_child(leaf_child("Duct", Vector3::zero()), &out)?;
        let second = flatten_child(leaf_child("Duct", Vector3::one()), &out)?;
        assert_eq!(first, second);
        assert_eq!(fs::read_dir(&base)?.count(), 1);

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }
}
