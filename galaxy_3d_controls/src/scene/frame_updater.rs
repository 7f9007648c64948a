/// Frame update strategies.
///
/// A FrameUpdater runs on the render thread, once per frame, before the
/// scene is drawn. Two separate phases: per-node frame callbacks first, then
/// the world-transform pass that consumes the transforms they produced.
///
/// Both phases use the nodes' non-blocking lock. A node whose lock is held
/// by an input handler keeps last frame's state and is retried next frame.

use glam::Mat4;
use rustc_hash::FxHashSet;
use crate::camera::Camera;
use crate::controls_trace;
use super::node::{FrameCallbackRun, NodeFlags};
use super::scene_graph::{NodeKey, NodeParent, SceneGraph};

/// Counters for one frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Nodes whose callbacks ran
    pub callbacks_run: usize,
    /// Nodes whose callbacks were skipped (lock busy)
    pub callbacks_skipped: usize,
    /// Nodes whose world matrix was recomputed
    pub transforms_updated: usize,
    /// Flagged nodes left for next frame (lock busy)
    pub transforms_deferred: usize,
}

/// Strategy for bringing node transforms up to date each frame.
///
/// `&mut self` allows stateful implementations to track state across
/// frames (e.g. the last camera pose).
pub trait FrameUpdater: Send + Sync {
    /// Invoke every node's frame callbacks, nodes in insertion order.
    fn run_callbacks(&mut self, scene: &SceneGraph, report: &mut FrameReport);

    /// Recompute world matrices of nodes flagged `NEEDS_UPDATE`.
    fn update_transforms(&mut self, scene: &SceneGraph, camera: &Camera, report: &mut FrameReport);

    /// Run both phases, callbacks strictly before transforms.
    fn update_frame(&mut self, scene: &SceneGraph, camera: &Camera) -> FrameReport {
        let mut report = FrameReport::default();
        self.run_callbacks(scene, &mut report);
        self.update_transforms(scene, camera, &mut report);
        report
    }
}

/// Default updater. Runs callbacks and refreshes world matrices.
///
/// World matrices compose root, camera or parent-node space with the
/// node's local transform. A refreshed node forces its children to refresh;
/// a camera move forces camera children to refresh.
#[derive(Debug, Default)]
pub struct DefaultFrameUpdater {
    last_camera: Option<Mat4>,
}

impl DefaultFrameUpdater {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameUpdater for DefaultFrameUpdater {
    fn run_callbacks(&mut self, scene: &SceneGraph, report: &mut FrameReport) {
        for (_, node) in scene.nodes() {
            match node.run_frame_callbacks() {
                FrameCallbackRun::NoCallbacks => {}
                FrameCallbackRun::Ran(_) => report.callbacks_run += 1,
                FrameCallbackRun::Skipped => {
                    controls_trace!("galaxy3d::FrameUpdater",
                        "Callbacks of '{}' skipped: node lock busy", node.name());
                    report.callbacks_skipped += 1;
                }
            }
        }
    }

    fn update_transforms(&mut self, scene: &SceneGraph, camera: &Camera, report: &mut FrameReport) {
        let camera_world = camera.world_matrix();
        let camera_moved = self.last_camera != Some(camera_world);
        let mut refreshed: FxHashSet<NodeKey> = FxHashSet::default();

        for (key, node) in scene.nodes() {
            let Some(parent) = scene.parent(key) else { continue };
            let parent_refreshed = match parent {
                NodeParent::Root => false,
                NodeParent::Camera => camera_moved,
                NodeParent::Node(parent_key) => refreshed.contains(&parent_key),
            };
            if !parent_refreshed && !node.flags().contains(NodeFlags::NEEDS_UPDATE) {
                continue;
            }

            // Clear before reading: a mutation landing after the read
            // re-flags the node for next frame.
            node.clear_flags(NodeFlags::NEEDS_UPDATE);
            let Some(transform) = node.try_transform() else {
                node.mark_needs_update();
                controls_trace!("galaxy3d::FrameUpdater",
                    "Transform of '{}' deferred: node lock busy", node.name());
                report.transforms_deferred += 1;
                continue;
            };

            let parent_matrix = match parent {
                NodeParent::Root => Mat4::IDENTITY,
                NodeParent::Camera => camera_world,
                NodeParent::Node(parent_key) => scene
                    .node(parent_key)
                    .map(|parent_node| parent_node.world_matrix())
                    .unwrap_or(Mat4::IDENTITY),
            };
            node.set_world_matrix(parent_matrix * transform.local_matrix());
            refreshed.insert(key);
            report.transforms_updated += 1;
        }

        self.last_camera = Some(camera_world);
    }
}

#[cfg(test)]
#[path = "frame_updater_tests.rs"]
mod tests;
