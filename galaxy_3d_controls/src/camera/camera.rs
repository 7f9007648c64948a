/// Camera: position, orientation and projection of the viewer.
///
/// The basis vectors are never stored: `right`, `up` and `forward` are
/// recomputed from `rotation` on every read, so they always agree with the
/// current orientation.
///
/// Precondition: `rotation` is a unit quaternion. The camera does not
/// re-normalize it, and a degenerate rotation yields a non-orthonormal basis.

use glam::{Mat4, Quat, Vec2, Vec3};
use super::projection::Projection;

/// Viewer camera. Cheap to copy; controllers work on snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    rotation: Quat,
    projection: Projection,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, rotation: Quat, projection: Projection) -> Self {
        Self {
            position,
            rotation,
            projection,
        }
    }

    // ===== GETTERS =====

    /// World-space position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space orientation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Projection parameters.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    // ===== BASIS =====

    /// Camera right axis in world space (`rotation * +X`).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Camera up axis in world space (`rotation * +Y`).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Viewing direction in world space (`rotation * +Z`).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    // ===== MATRICES =====

    /// Camera-to-world transform.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    // ===== SPACE CONVERSIONS =====

    /// Map a normalized viewport coordinate to a view-space point.
    ///
    /// `ndc` spans (-1, -1) bottom-left to (1, 1) top-right. The returned
    /// point lies on the near clipping plane, expressed in the camera's own
    /// space, so it stays at the same screen location however the camera
    /// moves.
    pub fn viewport_to_view(&self, ndc: Vec2) -> Vec3 {
        self.projection_matrix()
            .inverse()
            .project_point3(ndc.extend(0.0))
    }

    /// Transform a camera-space point into world space.
    pub fn view_to_world(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }

    // ===== SETTERS =====

    /// Set the world-space position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the world-space orientation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Set the projection.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY, Projection::default())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
