/// SceneGraph: the set of nodes and how they are parented.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys, plus an explicit
/// insertion-order list: the frame updater walks nodes in that order, which
/// also guarantees parents are visited before their children.

use std::sync::Arc;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::controls_bail;
use super::node::SceneNode;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a SceneNode within a SceneGraph.
    ///
    /// Keys remain valid even after other nodes are removed.
    /// A key becomes invalid only when its own node is removed.
    pub struct NodeKey;
}

/// What a node's local transform is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeParent {
    /// World space
    Root,
    /// The live camera's space (HUD-style overlays)
    Camera,
    /// Another node of the same graph
    Node(NodeKey),
}

struct NodeEntry {
    node: Arc<SceneNode>,
    parent: NodeParent,
    children: Vec<NodeKey>,
}

/// Scene graph owning the nodes (shared as `Arc<SceneNode>`).
#[derive(Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, NodeEntry>,
    /// Keys in insertion order
    order: Vec<NodeKey>,
}

impl SceneGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node in world space.
    pub fn add_node(&mut self, node: Arc<SceneNode>) -> NodeKey {
        self.insert(node, NodeParent::Root)
    }

    /// Add a node whose transform is expressed in camera space.
    pub fn add_camera_child(&mut self, node: Arc<SceneNode>) -> NodeKey {
        self.insert(node, NodeParent::Camera)
    }

    /// Add a node under an existing node.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNode` if `parent` is not in the graph.
    pub fn add_child(&mut self, parent: NodeKey, node: Arc<SceneNode>) -> Result<NodeKey> {
        if !self.nodes.contains_key(parent) {
            controls_bail!(InvalidNode, "galaxy3d::SceneGraph",
                "Cannot add '{}': parent node is not in the scene", node.name());
        }
        let key = self.insert(node, NodeParent::Node(parent));
        self.nodes[parent].children.push(key);
        Ok(key)
    }

    fn insert(&mut self, node: Arc<SceneNode>, parent: NodeParent) -> NodeKey {
        let key = self.nodes.insert(NodeEntry {
            node,
            parent,
            children: Vec::new(),
        });
        self.order.push(key);
        key
    }

    /// Remove a node and its whole subtree.
    ///
    /// Returns the removed node, or `None` if the key is invalid. Callers
    /// holding the node elsewhere (e.g. as the active selection) keep a
    /// valid `Arc`; see `Selection::deselect`.
    pub fn remove_node(&mut self, key: NodeKey) -> Option<Arc<SceneNode>> {
        let parent = self.nodes.get(key)?.parent;
        if let NodeParent::Node(parent_key) = parent {
            if let Some(parent_entry) = self.nodes.get_mut(parent_key) {
                parent_entry.children.retain(|child| *child != key);
            }
        }

        let mut removed = FxHashSet::default();
        let mut pending = vec![key];
        let mut root = None;
        while let Some(current) = pending.pop() {
            if let Some(entry) = self.nodes.remove(current) {
                pending.extend(entry.children);
                if current == key {
                    root = Some(entry.node);
                }
                removed.insert(current);
            }
        }
        self.order.retain(|k| !removed.contains(k));
        root
    }

    /// Get a node by key
    pub fn node(&self, key: NodeKey) -> Option<&Arc<SceneNode>> {
        self.nodes.get(key).map(|entry| &entry.node)
    }

    /// Whether the key refers to a node of this graph
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Parent of a node
    pub fn parent(&self, key: NodeKey) -> Option<NodeParent> {
        self.nodes.get(key).map(|entry| entry.parent)
    }

    /// Direct children of a node (empty for invalid keys)
    pub fn children(&self, key: NodeKey) -> &[NodeKey] {
        self.nodes.get(key).map(|entry| entry.children.as_slice()).unwrap_or(&[])
    }

    /// First node with the given name, in insertion order
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.order
            .iter()
            .copied()
            .find(|key| self.nodes[*key].node.name() == name)
    }

    /// Iterate over all nodes (key, node) in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &Arc<SceneNode>)> + '_ {
        self.order.iter().map(move |key| (*key, &self.nodes[*key].node))
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Remove all nodes
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
