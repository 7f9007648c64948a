//! Pointer input to camera-relative node motion.
//!
//! Controllers implement the `DragBehaviour` / `ScrollBehaviour` input
//! contracts and act on whatever node the `ControlContext` reports as
//! active at the time of each event. They never block: a node whose lock
//! is held elsewhere simply misses that event.
//!
//! Nothing here returns an error. Each call reports a `ControlOutcome`
//! that callers are free to ignore.

mod config;
mod context;
mod drag_translate;
mod node_translate;
mod scroll_translate;

pub use config::{ControlConfig, ControlSettings};
pub use context::{ControlContext, ViewerState};
pub use drag_translate::NodeDragControl;
pub use node_translate::NodeTranslateControl;
pub use scroll_translate::NodeScrollControl;

use glam::Vec3;

/// What a single input event did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlOutcome {
    /// The active node was moved by this world-space offset
    Translated(Vec3),
    /// The gesture baseline was recorded; nothing moved
    BaselineCaptured,
    /// Accepted with no effect (repeated init, gesture end)
    Ignored,
    /// No node is active; event dropped
    NoActiveNode,
    /// The active node's lock was held elsewhere; event dropped
    LockBusy,
}

impl ControlOutcome {
    /// Whether the event moved a node.
    pub fn is_applied(&self) -> bool {
        matches!(self, ControlOutcome::Translated(_))
    }
}

/// Press-drag-release gesture handler (pointer coordinates in pixels).
pub trait DragBehaviour {
    /// Pointer pressed.
    fn init(&mut self, x: i32, y: i32) -> ControlOutcome;

    /// Pointer moved while pressed.
    fn drag(&mut self, x: i32, y: i32) -> ControlOutcome;

    /// Pointer released.
    fn end(&mut self, x: i32, y: i32) -> ControlOutcome;
}

/// Scroll-wheel handler.
pub trait ScrollBehaviour {
    /// One wheel event; `wheel_delta` is in wheel units, positive away from the user.
    fn scroll(&mut self, wheel_delta: f64, is_horizontal: bool, x: i32, y: i32) -> ControlOutcome;
}
