//! Camera-pinned overlay geometry.
//!
//! Overlays are ordinary scene nodes whose transform is rewritten every
//! frame by a callback, so they stay at a fixed place on screen whatever the
//! camera does.

mod billboard;
mod compass;

pub use billboard::ScreenAnchor;
pub use compass::{OrientationCompass, COMPASS_ROOT_NAME};
