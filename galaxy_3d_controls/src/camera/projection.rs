/// Projection: maps view space to normalized device coordinates.
///
/// Conventions are left-handed: the camera looks along +Z in view space,
/// +X is right, +Y is up, and NDC depth runs from 0 (near) to 1 (far).

use glam::Mat4;

/// Camera projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in radians.
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection with a half-height of the view volume.
    Orthographic {
        half_height: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    /// Perspective projection.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Perspective { fov_y, aspect, near, far }
    }

    /// Orthographic projection.
    pub fn orthographic(half_height: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Orthographic { half_height, aspect, near, far }
    }

    /// Projection matrix (view space → clip space).
    pub fn matrix(&self) -> Mat4 {
        match *self {
            Projection::Perspective { fov_y, aspect, near, far } => {
                Mat4::perspective_lh(fov_y, aspect, near, far)
            }
            Projection::Orthographic { half_height, aspect, near, far } => {
                let half_width = half_height * aspect;
                Mat4::orthographic_lh(-half_width, half_width, -half_height, half_height, near, far)
            }
        }
    }

    /// Distance to the near clipping plane.
    pub fn near(&self) -> f32 {
        match *self {
            Projection::Perspective { near, .. } | Projection::Orthographic { near, .. } => near,
        }
    }

    /// Distance to the far clipping plane.
    pub fn far(&self) -> f32 {
        match *self {
            Projection::Perspective { far, .. } | Projection::Orthographic { far, .. } => far,
        }
    }

    /// Width / height ratio.
    pub fn aspect(&self) -> f32 {
        match *self {
            Projection::Perspective { aspect, .. } | Projection::Orthographic { aspect, .. } => aspect,
        }
    }

    /// Return a copy with a new aspect ratio (window resize).
    pub fn with_aspect(self, aspect: f32) -> Self {
        match self {
            Projection::Perspective { fov_y, near, far, .. } => {
                Projection::Perspective { fov_y, aspect, near, far }
            }
            Projection::Orthographic { half_height, near, far, .. } => {
                Projection::Orthographic { half_height, aspect, near, far }
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::perspective(50.0_f32.to_radians(), 16.0 / 9.0, 0.05, 1000.0)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
