/// Selection: which node input manipulation currently targets.
///
/// Controllers call `active_node()` on every event instead of caching the
/// result, so a selection change in the middle of a gesture takes effect on
/// the very next event.

use std::sync::{Arc, PoisonError, RwLock};
use crate::error::Result;
use crate::{controls_bail, controls_debug, controls_err};
use super::node::SceneNode;
use super::scene_graph::{NodeKey, SceneGraph};

/// Shared active-node state.
#[derive(Debug, Default)]
pub struct Selection {
    active: RwLock<Option<Arc<SceneNode>>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active node, if any.
    pub fn active_node(&self) -> Option<Arc<SceneNode>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replace the active node (`None` clears it).
    pub fn set_active_node(&self, node: Option<Arc<SceneNode>>) -> Result<()> {
        let mut lock = self.active.write()
            .map_err(|_| controls_err!(LockPoisoned, "galaxy3d::Selection", "Selection lock poisoned"))?;
        if let Some(node) = &node {
            controls_debug!("galaxy3d::Selection", "Active node: '{}'", node.name());
        }
        *lock = node;
        Ok(())
    }

    /// Activate the node stored under `key` in `scene`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNode` if the key is not in the scene.
    pub fn select(&self, scene: &SceneGraph, key: NodeKey) -> Result<()> {
        let Some(node) = scene.node(key) else {
            controls_bail!(InvalidNode, "galaxy3d::Selection", "Cannot select a node that is not in the scene");
        };
        self.set_active_node(Some(node.clone()))
    }

    /// Clear the active node.
    pub fn clear(&self) -> Result<()> {
        self.set_active_node(None)
    }

    /// Clear the selection only if `node` is the active one.
    ///
    /// Returns true if the selection was cleared. Call this when removing a
    /// node from the scene.
    pub fn deselect(&self, node: &Arc<SceneNode>) -> Result<bool> {
        let mut lock = self.active.write()
            .map_err(|_| controls_err!(LockPoisoned, "galaxy3d::Selection", "Selection lock poisoned"))?;
        let is_active = lock.as_ref().is_some_and(|active| Arc::ptr_eq(active, node));
        if is_active {
            *lock = None;
        }
        Ok(is_active)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
