/// ScreenAnchor: keeps a camera-attached node at a fixed viewport position.

use std::sync::Arc;
use glam::Vec2;
use crate::camera::SharedCamera;
use crate::scene::NodeTransform;

/// Viewport anchor bound to the live camera.
///
/// The anchor is in normalized device coordinates: `(-1, -1)` is the
/// bottom-left corner of the viewport, `(1, 1)` the top-right one.
#[derive(Debug, Clone)]
pub struct ScreenAnchor {
    anchor: Vec2,
    camera: Arc<SharedCamera>,
}

impl ScreenAnchor {
    pub fn new(anchor: Vec2, camera: Arc<SharedCamera>) -> Self {
        Self { anchor, camera }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Pin `transform` to the anchor using the current camera.
    ///
    /// The position is the anchor unprojected onto the near plane, in
    /// camera space. The rotation undoes the camera's own, so the node keeps
    /// world orientation on screen. Applying twice with the same camera gives
    /// the same transform.
    pub fn apply(&self, transform: &mut NodeTransform) {
        let camera = self.camera.snapshot();
        transform.position = camera.viewport_to_view(self.anchor);
        transform.rotation = camera.rotation().conjugate().normalize();
    }

    /// Wrap into a per-frame callback for `SceneNode::add_frame_callback`.
    pub fn into_frame_callback(self) -> impl FnMut(&mut NodeTransform) + Send + 'static {
        move |transform| self.apply(transform)
    }
}

#[cfg(test)]
#[path = "billboard_tests.rs"]
mod tests;
