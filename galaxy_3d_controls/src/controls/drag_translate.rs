/// NodeDragControl: translate the active node in the camera's right/up plane.
///
/// Pointer deltas are measured from the last *processed* sample. A drag
/// dropped because of lock contention leaves the baseline untouched, so the
/// next successful drag carries the full accumulated motion and the node
/// ends up exactly where the pointer says, with no drift.

use std::sync::Arc;
use crate::{controls_debug, controls_trace};
use super::context::ControlContext;
use super::{ControlOutcome, DragBehaviour};

/// Drag gesture state. One instance per input binding; not shared.
pub struct NodeDragControl {
    context: Arc<dyn ControlContext>,
    last_x: i32,
    last_y: i32,
    /// Set between `end` (or construction) and the next baseline capture
    awaiting_first_sample: bool,
}

impl NodeDragControl {
    pub fn new(context: Arc<dyn ControlContext>) -> Self {
        Self {
            context,
            last_x: 0,
            last_y: 0,
            awaiting_first_sample: true,
        }
    }

    /// Whether the next `init`/`drag` will record a fresh baseline.
    pub fn is_awaiting_first_sample(&self) -> bool {
        self.awaiting_first_sample
    }

    /// Last processed pointer position.
    pub fn last_sample(&self) -> (i32, i32) {
        (self.last_x, self.last_y)
    }

    fn capture_baseline(&mut self, x: i32, y: i32) {
        self.last_x = x;
        self.last_y = y;
        self.awaiting_first_sample = false;
    }
}

impl DragBehaviour for NodeDragControl {
    /// Record the gesture baseline.
    ///
    /// A second `init` before `end` keeps the in-progress baseline.
    fn init(&mut self, x: i32, y: i32) -> ControlOutcome {
        if self.context.active_node().is_none() {
            return ControlOutcome::NoActiveNode;
        }
        if !self.awaiting_first_sample {
            return ControlOutcome::Ignored;
        }

        self.capture_baseline(x, y);
        controls_debug!("galaxy3d::NodeDragControl", "Gesture baseline at ({}, {})", x, y);
        ControlOutcome::BaselineCaptured
    }

    fn drag(&mut self, x: i32, y: i32) -> ControlOutcome {
        let Some(node) = self.context.active_node() else {
            controls_trace!("galaxy3d::NodeDragControl", "Drag dropped: no active node");
            return ControlOutcome::NoActiveNode;
        };

        // No baseline yet (init ran with nothing selected): this sample
        // becomes the baseline instead of a jump from stale coordinates.
        if self.awaiting_first_sample {
            self.capture_baseline(x, y);
            return ControlOutcome::BaselineCaptured;
        }

        let camera = self.context.camera();
        let speed = self.context.drag_speed();
        // Widened: the difference of two i32 coordinates may not fit in i32
        let dx = (i64::from(x) - i64::from(self.last_x)) as f32;
        // Screen y grows downwards, world up grows upwards
        let dy = (i64::from(self.last_y) - i64::from(y)) as f32;
        let offset = camera.right() * (dx * speed) + camera.up() * (dy * speed);

        let Some(mut transform) = node.try_lock_transform() else {
            controls_trace!("galaxy3d::NodeDragControl",
                "Drag dropped: '{}' is locked", node.name());
            return ControlOutcome::LockBusy;
        };
        transform.translate(offset);
        node.mark_needs_update();
        drop(transform);

        self.last_x = x;
        self.last_y = y;
        ControlOutcome::Translated(offset)
    }

    fn end(&mut self, x: i32, y: i32) -> ControlOutcome {
        controls_debug!("galaxy3d::NodeDragControl", "Gesture ended at ({}, {})", x, y);
        self.awaiting_first_sample = true;
        ControlOutcome::Ignored
    }
}

#[cfg(test)]
#[path = "drag_translate_tests.rs"]
mod tests;
