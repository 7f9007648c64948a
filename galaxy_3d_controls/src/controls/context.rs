/// ControlContext: what the controllers need from the surrounding viewer.
///
/// Every accessor is read at event time; implementations must return the
/// current state rather than a value captured at construction.

use std::sync::Arc;
use crate::camera::{Camera, SharedCamera};
use crate::scene::{SceneNode, Selection};
use super::config::ControlSettings;

/// Viewer state consumed by the manipulation controllers.
pub trait ControlContext: Send + Sync {
    /// Node targeted by manipulation input, if any.
    fn active_node(&self) -> Option<Arc<SceneNode>>;

    /// Snapshot of the current camera.
    fn camera(&self) -> Camera;

    /// World units per pixel of drag motion.
    fn drag_speed(&self) -> f32;

    /// World units per scroll-wheel unit.
    fn scroll_speed(&self) -> f32;
}

/// Default context: selection, live camera and speed settings.
#[derive(Debug, Default)]
pub struct ViewerState {
    selection: Selection,
    camera: Arc<SharedCamera>,
    settings: ControlSettings,
}

impl ViewerState {
    pub fn new(camera: Arc<SharedCamera>, settings: ControlSettings) -> Self {
        Self {
            selection: Selection::new(),
            camera,
            settings,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The live camera, shareable with frame callbacks.
    pub fn shared_camera(&self) -> &Arc<SharedCamera> {
        &self.camera
    }

    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }
}

impl ControlContext for ViewerState {
    fn active_node(&self) -> Option<Arc<SceneNode>> {
        self.selection.active_node()
    }

    fn camera(&self) -> Camera {
        self.camera.snapshot()
    }

    fn drag_speed(&self) -> f32 {
        self.settings.drag_speed()
    }

    fn scroll_speed(&self) -> f32 {
        self.settings.scroll_speed()
    }
}
