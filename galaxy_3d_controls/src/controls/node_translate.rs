/// NodeTranslateControl: one behaviour object serving both the drag and
/// the scroll binding of a viewer.

use std::sync::Arc;
use super::context::ControlContext;
use super::drag_translate::NodeDragControl;
use super::scroll_translate::NodeScrollControl;
use super::{ControlOutcome, DragBehaviour, ScrollBehaviour};

/// Drag moves the active node in the view plane, scroll moves it along the
/// view axis. Both halves share one context.
pub struct NodeTranslateControl {
    drag: NodeDragControl,
    scroll: NodeScrollControl,
}

impl NodeTranslateControl {
    pub fn new(context: Arc<dyn ControlContext>) -> Self {
        Self {
            drag: NodeDragControl::new(Arc::clone(&context)),
            scroll: NodeScrollControl::new(context),
        }
    }

    /// The drag half (gesture state inspection).
    pub fn drag_control(&self) -> &NodeDragControl {
        &self.drag
    }
}

impl DragBehaviour for NodeTranslateControl {
    fn init(&mut self, x: i32, y: i32) -> ControlOutcome {
        self.drag.init(x, y)
    }

    fn drag(&mut self, x: i32, y: i32) -> ControlOutcome {
        self.drag.drag(x, y)
    }

    fn end(&mut self, x: i32, y: i32) -> ControlOutcome {
        self.drag.end(x, y)
    }
}

impl ScrollBehaviour for NodeTranslateControl {
    fn scroll(&mut self, wheel_delta: f64, is_horizontal: bool, x: i32, y: i32) -> ControlOutcome {
        self.scroll.scroll(wheel_delta, is_horizontal, x, y)
    }
}

#[cfg(test)]
#[path = "node_translate_tests.rs"]
mod tests;
