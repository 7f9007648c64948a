/// OrientationCompass: three axis markers pinned to a corner of the viewport,
/// always showing the world X, Y and Z directions.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;
use glam::{Quat, Vec2, Vec3};
use crate::camera::SharedCamera;
use crate::controls_debug;
use crate::error::Result;
use crate::scene::{NodeKey, NodeTransform, SceneGraph, SceneNode};
use super::billboard::ScreenAnchor;

/// Name of the compass root node.
pub const COMPASS_ROOT_NAME: &str = "Scene orientation compass";

/// Compass builder.
///
/// Each axis node points along its local +Y and carries a cap node at
/// `axis_length` along it; rotations turn that +Y onto world X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationCompass {
    axis_length: f32,
    anchor: Vec2,
}

impl OrientationCompass {
    pub fn new() -> Self {
        Self {
            axis_length: 0.1,
            anchor: Vec2::new(-0.9, 0.7),
        }
    }

    pub fn with_axis_length(mut self, axis_length: f32) -> Self {
        self.axis_length = axis_length;
        self
    }

    /// Viewport position in normalized device coordinates.
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn axis_length(&self) -> f32 {
        self.axis_length
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Build the compass nodes and pin the root to the viewport.
    ///
    /// The root is parented to the camera; its frame callback reads the
    /// given live camera. Returns the root key.
    pub fn add_to(&self, scene: &mut SceneGraph, camera: Arc<SharedCamera>) -> Result<NodeKey> {
        let root = Arc::new(SceneNode::new(COMPASS_ROOT_NAME));
        root.add_frame_callback(ScreenAnchor::new(self.anchor, camera).into_frame_callback());
        let root_key = scene.add_camera_child(root);

        let axes = [
            ("X", Quat::from_rotation_z(-FRAC_PI_2)),
            ("Y", Quat::IDENTITY),
            ("Z", Quat::from_rotation_x(FRAC_PI_2)),
        ];
        for (label, rotation) in axes {
            let axis = SceneNode::with_transform(
                format!("compass axis: {}", label),
                NodeTransform::new(Vec3::ZERO, rotation),
            );
            let axis_key = scene.add_child(root_key, Arc::new(axis))?;

            let cap = SceneNode::with_transform(
                format!("compass axis cap: {}", label),
                NodeTransform::new(Vec3::new(0.0, self.axis_length, 0.0), Quat::IDENTITY),
            );
            scene.add_child(axis_key, Arc::new(cap))?;
        }

        controls_debug!("galaxy3d::OrientationCompass",
            "Compass added at ({}, {}), axis length {}", self.anchor.x, self.anchor.y, self.axis_length);
        Ok(root_key)
    }
}

impl Default for OrientationCompass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "compass_tests.rs"]
mod tests;
