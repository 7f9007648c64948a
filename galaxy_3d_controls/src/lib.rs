/*!
# Galaxy 3D Controls

Interactive manipulation of Galaxy3D scene nodes and camera-pinned overlays.

Pointer input arrives on an input thread and moves the selected node relative
to the current camera; a render thread runs per-frame callbacks and refreshes
world matrices. The two sides meet only through each node's non-blocking
lock: whichever side finds it busy skips that event or frame.

## Architecture

- **SceneNode / SceneGraph**: nodes with try-lock transforms, flags and frame callbacks
- **Camera / SharedCamera**: camera basis, viewport unprojection, live camera accessor
- **NodeDragControl**: drag gesture translating in the camera's right/up plane
- **NodeScrollControl**: wheel translation along the camera's view axis
- **FrameUpdater**: per-frame callbacks then world-matrix refresh
- **OrientationCompass**: world-axis markers pinned to a viewport corner
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod scene;
pub mod controls;
pub mod overlay;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and configuration, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger, set_min_severity, min_severity};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Controls sub-module
    pub mod controls {
        pub use crate::controls::*;
    }

    // Overlay sub-module
    pub mod overlay {
        pub use crate::overlay::*;
    }
}

// Re-export math library at crate root
pub use glam;
