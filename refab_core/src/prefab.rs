use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::io;
use uuid::Uuid;

use refab_io::{load_asset, save_asset};

use crate::nodes::{SceneNode, SceneNodeData};

/// File extension for stored prefab documents.
pub const PREFAB_EXT: &str = "pfab";

/// Pure serializable prefab document (no runtime state).
///
/// Node order in `nodes` is the stored order; child vectors follow it after
/// `fix_relationships`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PrefabData {
    pub root_id: Uuid,
    pub nodes: IndexMap<Uuid, SceneNode>,
}

impl PrefabData {
    /// Create a new prefab document with a root node.
    pub fn new(root: SceneNode) -> Self {
        let root_id = root.id;
        let mut nodes = IndexMap::new();
        nodes.insert(root_id, root);
        Self { root_id, nodes }
    }

    pub fn root(&self) -> Option<&SceneNode> {
        self.nodes.get(&self.root_id)
    }

    pub fn root_mut(&mut self) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&self.root_id)
    }

    pub fn get(&self, id: &Uuid) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    /// Insert a node and wire it under `parent`. Returns the node's id.
    pub fn add_node(&mut self, mut node: SceneNode, parent: Option<Uuid>) -> Uuid {
        let id = node.id;
        node.parent = parent;
        self.nodes.insert(id, node);
        if let Some(parent_id) = parent {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.add_child(id);
            }
        }
        id
    }

    /// Direct children of `id` in stored order.
    pub fn children_of(&self, id: &Uuid) -> &[Uuid] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Depth-first search (root first, children in stored order) for the first node
    /// carrying renderable geometry.
    pub fn find_first_renderable(&self) -> Option<Uuid> {
        self.find_renderable_from(self.root_id)
    }

    fn find_renderable_from(&self, id: Uuid) -> Option<Uuid> {
        let node = self.nodes.get(&id)?;
        if node.is_renderable() {
            return Some(id);
        }
        for child in &node.children {
            if let Some(found) = self.find_renderable_from(*child) {
                return Some(found);
            }
        }
        None
    }

    /// Deep-copy the subtree rooted at `source_id` out of `source` and attach it
    /// under `parent` with fresh ids. Returns the copied root's id.
    pub fn instantiate_from(
        &mut self,
        source: &PrefabData,
        source_id: Uuid,
        parent: Uuid,
    ) -> Option<Uuid> {
        let mut copy = source.get(&source_id)?.clone();
        let source_children = std::mem::take(&mut copy.children);

        copy.id = Uuid::new_v4();
        copy.parent = Some(parent);
        let new_id = copy.id;
        self.nodes.insert(new_id, copy);
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.add_child(new_id);
        }

        for child_id in source_children {
            self.instantiate_from(source, child_id, new_id);
        }
        Some(new_id)
    }

    /// Set node ids from their map keys and rebuild child vectors from the serialized
    /// parent pointers. Child order follows stored node order.
    pub fn fix_relationships(&mut self) {
        let mut parent_children: IndexMap<Uuid, Vec<Uuid>> = IndexMap::new();

        for (&node_id, node) in self.nodes.iter_mut() {
            node.id = node_id;
            node.clear_children();

            if let Some(parent_id) = node.parent {
                parent_children.entry(parent_id).or_default().push(node_id);
            }
        }

        for (parent_id, children) in parent_children {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                for child_id in children {
                    parent.add_child(child_id);
                }
            }
        }
    }

    /// Save the document to disk (res:// or absolute path).
    pub fn save(&self, path: &str) -> io::Result<()> {
        let data = serde_json::to_vec_pretty(&self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        save_asset(path, &data)
    }

    /// Load a document from disk and rebuild its relationships.
    pub fn load(path: &str) -> io::Result<Self> {
        let bytes = load_asset(path)?;
        let mut data: PrefabData = serde_json::from_slice(&bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        data.fix_relationships();
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{MeshInstance3D, Node3D};
    use crate::structs3d::{MeshData, Vector3};
    use std::fs;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static TEST_DIR_SEQ: AtomicU64 = AtomicU64::new(0);

    fn temp_test_dir() -> std::path::PathBuf {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("refab_core_test_{pid}_{nonce}_{seq}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_prefab() -> PrefabData {
        let mut prefab = PrefabData::new(SceneNode::new("Base", SceneNodeData::Node3D(Node3D::new())));
        let root_id = prefab.root_id;

        let mut frame = SceneNode::new("Frame", SceneNodeData::Node3D(Node3D::new()));
        frame.instance_of = Some("res://exports/frame.pfab".into());
        let frame_id = prefab.add_node(frame, Some(root_id));

        let mesh = MeshData::new(
            vec![
                Vector3::new(-1.0, 0.0, -1.0),
                Vector3::new(1.0, 0.0, -1.0),
                Vector3::new(1.0, 2.0, 1.0),
                Vector3::new(-1.0, 2.0, 1.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        );
        prefab.add_node(
            SceneNode::new(
                "FrameMesh",
                SceneNodeData::MeshInstance3D(MeshInstance3D::with_mesh(mesh)),
            ),
            Some(frame_id),
        );

        prefab
    }

    #[test]
    fn save_load_roundtrip_rebuilds_relationships() -> io::Result<()> {
        let base = temp_test_dir();
        let path = base.join("base.pfab");
        let path = path.to_string_lossy().to_string();

        let prefab = sample_prefab();
        prefab.save(&path)?;

        let loaded = PrefabData::load(&path)?;
        assert_eq!(loaded.nodes.len(), 3);

        let root = loaded.root().expect("root present");
        assert_eq!(root.name, "Base");
        assert_eq!(root.children.len(), 1);

        let frame = loaded.get(&root.children[0]).expect("frame present");
        assert_eq!(frame.name, "Frame");
        assert_eq!(frame.parent, Some(loaded.root_id));
        assert_eq!(frame.children.len(), 1);
        assert_eq!(
            frame.source_asset_path(),
            Some("res://exports/frame.pfab")
        );

        let _ = fs::remove_dir_all(&base);
        Ok(())
    }

    #[test]
    fn children_keep_stored_order() {
        let mut prefab = PrefabData::new(SceneNode::new("Base", SceneNodeData::Node));
        let root_id = prefab.root_id;
        for name in ["A", "B", "C", "D"] {
            prefab.add_node(
                SceneNode::new(name.to_string(), SceneNodeData::Node3D(Node3D::new())),
                Some(root_id),
            );
        }

        // Serialize parent pointers only, then rebuild.
        let json = serde_json::to_string(&prefab).unwrap();
        let mut reloaded: PrefabData = serde_json::from_str(&json).unwrap();
        reloaded.fix_relationships();

        let names: Vec<&str> = reloaded
            .children_of(&reloaded.root_id)
            .iter()
            .map(|id| reloaded.get(id).unwrap().name.as_ref())
            .collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn find_first_renderable_is_depth_first() {
        let mut prefab = PrefabData::new(SceneNode::new("Base", SceneNodeData::Node));
        let root_id = prefab.root_id;

        let holder = prefab.add_node(
            SceneNode::new("Holder", SceneNodeData::Node3D(Node3D::new())),
            Some(root_id),
        );
        let nested = prefab.add_node(
            SceneNode::new(
                "Nested",
                SceneNodeData::MeshInstance3D(MeshInstance3D::new()),
            ),
            Some(holder),
        );
        prefab.add_node(
            SceneNode::new(
                "Sibling",
                SceneNodeData::MeshInstance3D(MeshInstance3D::new()),
            ),
            Some(root_id),
        );

        // The nested mesh under the first child wins over the later sibling.
        assert_eq!(prefab.find_first_renderable(), Some(nested));
    }

    #[test]
    fn find_first_renderable_none_without_meshes() {
        let prefab = PrefabData::new(SceneNode::new("Base", SceneNodeData::Node3D(Node3D::new())));
        assert_eq!(prefab.find_first_renderable(), None);
    }

    #[test]
    fn instantiate_from_assigns_fresh_ids() {
        let source = sample_prefab();

        let mut target = PrefabData::new(SceneNode::new("Wrapper", SceneNodeData::Node3D(Node3D::new())));
        let wrapper_root = target.root_id;
        let copied = target
            .instantiate_from(&source, source.root_id, wrapper_root)
            .expect("copy succeeds");

        assert_eq!(target.nodes.len(), 1 + source.nodes.len());
        assert_ne!(copied, source.root_id);
        assert_eq!(target.children_of(&wrapper_root), &[copied][..]);

        let copy = target.get(&copied).unwrap();
        assert_eq!(copy.name, "Base");
        assert_eq!(copy.parent, Some(wrapper_root));
        assert_eq!(copy.children.len(), 1);
        // No id from the source leaked into the copy.
        for id in source.nodes.keys() {
            assert!(!target.nodes.contains_key(id));
        }
    }
}
