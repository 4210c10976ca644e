/// SceneGraph: the arena of placed nodes.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Only the
/// placement pipeline inserts; the frame driver mutates transforms and poses
/// through keys it was handed at registration. Renderers drain the
/// new-node and dirty-transform sets once per frame.

use std::sync::Arc;
use bitflags::bitflags;
use glam::Mat4;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use crate::asset::VisualAsset;
use super::transform::{Pose, Transform};

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a node within a SceneGraph.
    ///
    /// Keys remain valid even after other nodes are removed.
    /// A key becomes invalid only when its own node is despawned.
    pub struct NodeKey;
}

bitflags! {
    /// Per-node state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        /// Drawn by the renderer
        const VISIBLE   = 1 << 0;
        /// Driven by an animation binding
        const ANIMATED  = 1 << 1;
        /// One of several clones of a single loaded asset
        const INSTANCED = 1 << 2;
    }
}

/// A placed visual: shared asset + per-node transform and pose.
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    transform: Transform,
    pose: Pose,
    asset: Option<Arc<VisualAsset>>,
    flags: NodeFlags,
}

impl SceneNode {
    /// Create a visible node without a visual (markers, backdrops).
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            pose: Pose::IDENTITY,
            asset: None,
            flags: NodeFlags::VISIBLE,
        }
    }

    /// Create a visible node referencing a loaded asset.
    pub fn with_asset(name: impl Into<String>, transform: Transform, asset: Arc<VisualAsset>) -> Self {
        Self {
            asset: Some(asset),
            ..Self::new(name, transform)
        }
    }

    /// Builder: add flags
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn asset(&self) -> Option<&Arc<VisualAsset>> {
        self.asset.as_ref()
    }

    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(NodeFlags::VISIBLE)
    }

    /// World matrix: placement transform composed with the animation pose.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.matrix() * self.pose.matrix()
    }
}

/// Flat arena of scene nodes.
#[derive(Debug)]
pub struct SceneGraph {
    /// Nodes stored in a slot map for O(1) insert/remove
    nodes: SlotMap<NodeKey, SceneNode>,
    /// Nodes inserted since last take_new_nodes()
    new_nodes: FxHashSet<NodeKey>,
    /// Nodes whose world matrix changed since last take_dirty_transforms()
    dirty_transforms: FxHashSet<NodeKey>,
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            new_nodes: FxHashSet::default(),
            dirty_transforms: FxHashSet::default(),
        }
    }

    /// Insert a node. Returns a stable key valid until the node is despawned.
    pub fn insert(&mut self, node: SceneNode) -> NodeKey {
        let key = self.nodes.insert(node);
        self.new_nodes.insert(key);
        key
    }

    /// Remove a node immediately. Returns the node if the key was valid.
    pub fn despawn(&mut self, key: NodeKey) -> Option<SceneNode> {
        let node = self.nodes.remove(key)?;
        self.new_nodes.remove(&key);
        self.dirty_transforms.remove(&key);
        Some(node)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Replace the placement transform. Returns false if key is invalid.
    pub fn set_transform(&mut self, key: NodeKey, transform: Transform) -> bool {
        self.update_transform(key, |t| *t = transform)
    }

    /// Mutate the placement transform in place. Returns false if key is invalid.
    pub fn update_transform(&mut self, key: NodeKey, f: impl FnOnce(&mut Transform)) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                f(&mut node.transform);
                self.dirty_transforms.insert(key);
                true
            }
            None => false,
        }
    }

    /// Replace the animation pose. Returns false if key is invalid.
    pub fn set_pose(&mut self, key: NodeKey, pose: Pose) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.pose = pose;
                self.dirty_transforms.insert(key);
                true
            }
            None => false,
        }
    }

    /// Show or hide a node. Returns false if key is invalid.
    pub fn set_visible(&mut self, key: NodeKey, visible: bool) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.flags.set(NodeFlags::VISIBLE, visible);
                true
            }
            None => false,
        }
    }

    /// Add flags to a node. Returns false if key is invalid.
    pub fn insert_flags(&mut self, key: NodeKey, flags: NodeFlags) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.flags |= flags;
                true
            }
            None => false,
        }
    }

    /// Iterate over all node keys.
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys()
    }

    /// Iterate over all nodes (key, node)
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// Nodes whose name matches exactly
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = NodeKey> + 'a {
        self.nodes
            .iter()
            .filter(move |(_, node)| node.name == name)
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the set of nodes with pending transform changes.
    pub fn dirty_transforms(&self) -> &FxHashSet<NodeKey> {
        &self.dirty_transforms
    }

    /// Take and clear the dirty transform set.
    pub fn take_dirty_transforms(&mut self) -> FxHashSet<NodeKey> {
        std::mem::take(&mut self.dirty_transforms)
    }

    /// Get the set of nodes inserted since the last drain.
    pub fn new_nodes(&self) -> &FxHashSet<NodeKey> {
        &self.new_nodes
    }

    /// Take and clear the new node set.
    pub fn take_new_nodes(&mut self) -> FxHashSet<NodeKey> {
        std::mem::take(&mut self.new_nodes)
    }

    /// Remove all nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.new_nodes.clear();
        self.dirty_transforms.clear();
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
