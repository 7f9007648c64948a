/// NodeScrollControl: push the active node along the camera's view axis.
///
/// Positive wheel deltas move the node away from the camera, negative ones
/// bring it closer. Each event is independent: there is no gesture state.

use std::sync::Arc;
use crate::controls_trace;
use super::context::ControlContext;
use super::{ControlOutcome, ScrollBehaviour};

pub struct NodeScrollControl {
    context: Arc<dyn ControlContext>,
}

impl NodeScrollControl {
    pub fn new(context: Arc<dyn ControlContext>) -> Self {
        Self { context }
    }
}

impl ScrollBehaviour for NodeScrollControl {
    /// `is_horizontal` and the pointer position are accepted but unused.
    fn scroll(&mut self, wheel_delta: f64, _is_horizontal: bool, _x: i32, _y: i32) -> ControlOutcome {
        let Some(node) = self.context.active_node() else {
            controls_trace!("galaxy3d::NodeScrollControl", "Scroll dropped: no active node");
            return ControlOutcome::NoActiveNode;
        };

        let distance = wheel_delta as f32 * self.context.scroll_speed();
        let offset = self.context.camera().forward() * distance;

        let Some(mut transform) = node.try_lock_transform() else {
            controls_trace!("galaxy3d::NodeScrollControl",
                "Scroll dropped: '{}' is locked", node.name());
            return ControlOutcome::LockBusy;
        };
        transform.translate(offset);
        node.mark_needs_update();

        ControlOutcome::Translated(offset)
    }
}

#[cfg(test)]
#[path = "scroll_translate_tests.rs"]
mod tests;
