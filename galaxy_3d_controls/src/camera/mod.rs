//! Camera module: camera model, projection, and the live camera accessor.
//!
//! The controls never own the camera. Input handlers and frame callbacks
//! read a snapshot from a `SharedCamera` at event time, so the application
//! may swap or move the live camera whenever it likes.

mod camera;
mod projection;
mod shared_camera;

pub use camera::Camera;
pub use projection::Projection;
pub use shared_camera::SharedCamera;
