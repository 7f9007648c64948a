//! Scene module
//!
//! Provides scene nodes with non-blocking transform locks, the scene graph
//! that owns them, the shared selection, and per-frame update strategies.

mod frame_updater;
mod node;
mod scene_graph;
mod selection;

pub use node::{
    SceneNode, NodeTransform, NodeTransformGuard, NodeFlags,
    FrameCallback, FrameCallbackId, FrameCallbackRun,
};
pub use scene_graph::{SceneGraph, NodeKey, NodeParent};
pub use selection::Selection;
pub use frame_updater::{FrameUpdater, DefaultFrameUpdater, FrameReport};
