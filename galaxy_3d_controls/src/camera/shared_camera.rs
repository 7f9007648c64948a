/// SharedCamera: the live camera, shared between input and render threads.
///
/// Readers always take a copy (`snapshot`). Nothing in the controls keeps a
/// camera past a single event or frame, so `replace` may swap in a
/// completely different camera (e.g. a screenshot camera) at any time.

use std::sync::{PoisonError, RwLock};
use crate::error::Result;
use crate::controls_err;
use super::camera::Camera;

/// Thread-safe holder of the current camera.
#[derive(Debug, Default)]
pub struct SharedCamera {
    current: RwLock<Camera>,
}

impl SharedCamera {
    /// Create a holder for `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            current: RwLock::new(camera),
        }
    }

    /// Copy of the current camera.
    ///
    /// Recovers from a poisoned lock: the camera is plain data and stays
    /// usable after a writer panicked.
    pub fn snapshot(&self) -> Camera {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap in a different camera.
    pub fn replace(&self, camera: Camera) -> Result<Camera> {
        let mut lock = self.current.write()
            .map_err(|_| controls_err!(LockPoisoned, "galaxy3d::SharedCamera", "Camera lock poisoned"))?;
        Ok(std::mem::replace(&mut *lock, camera))
    }

    /// Modify the current camera in place.
    pub fn update<F: FnOnce(&mut Camera)>(&self, f: F) -> Result<()> {
        let mut lock = self.current.write()
            .map_err(|_| controls_err!(LockPoisoned, "galaxy3d::SharedCamera", "Camera lock poisoned"))?;
        f(&mut lock);
        Ok(())
    }
}

#[cfg(test)]
#[path = "shared_camera_tests.rs"]
mod tests;
