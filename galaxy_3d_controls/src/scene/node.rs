/// SceneNode: a manipulable entity of the scene graph.
///
/// A node's transform (position + rotation) is guarded by its own lock and
/// can only be reached through `try_lock_transform`, which never waits.
/// Input controllers and the frame updater both go through it: whichever
/// side loses the race simply skips its mutation for that event or frame.
///
/// Flags are stored atomically so the render side can read and clear them
/// without taking the transform lock.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, TryLockError};
use bitflags::bitflags;
use glam::{Mat4, Quat, Vec3};

// ===== FLAGS =====

bitflags! {
    /// Change markers consumed by the render side.
    ///
    /// Manipulation code only ever sets them; the frame updater (or an
    /// external renderer) clears them once it has refreshed derived data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        /// Geometry or bounds changed; bounding volumes must be rebuilt
        const DIRTY = 1 << 0;
        /// Transform changed; world matrix must be recomputed
        const NEEDS_UPDATE = 1 << 1;
    }
}

// ===== TRANSFORM =====

/// Local transform of a node, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl NodeTransform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Move by `offset` (parent space).
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Local matrix (rotation then translation).
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

/// Exclusive access to a node's transform. Dropping it releases the lock.
pub type NodeTransformGuard<'a> = MutexGuard<'a, NodeTransform>;

// ===== FRAME CALLBACKS =====

/// Per-frame callback: receives the node's locked transform.
pub type FrameCallback = Box<dyn FnMut(&mut NodeTransform) + Send + 'static>;

/// Handle returned by `SceneNode::add_frame_callback`, used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(u64);

/// Outcome of `SceneNode::run_frame_callbacks` for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCallbackRun {
    /// The node has no callbacks; nothing was locked
    NoCallbacks,
    /// The transform lock was busy; callbacks skipped this frame
    Skipped,
    /// This many callbacks ran, in insertion order
    Ran(usize),
}

// ===== NODE =====

/// A scene node shared between the scene graph, the selection and any
/// in-flight input event (`Arc<SceneNode>`).
pub struct SceneNode {
    name: String,
    transform: Mutex<NodeTransform>,
    flags: AtomicU32,
    frame_callbacks: Mutex<Vec<(FrameCallbackId, FrameCallback)>>,
    next_callback_id: AtomicU64,
    /// Last world matrix computed by the frame updater
    world_matrix: RwLock<Mat4>,
}

impl SceneNode {
    /// Create a node at the origin with identity rotation.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_transform(name, NodeTransform::default())
    }

    /// Create a node with an initial transform.
    ///
    /// New nodes start flagged `NEEDS_UPDATE` so their first frame computes
    /// a world matrix.
    pub fn with_transform(name: impl Into<String>, transform: NodeTransform) -> Self {
        Self {
            name: name.into(),
            transform: Mutex::new(transform),
            flags: AtomicU32::new(NodeFlags::NEEDS_UPDATE.bits()),
            frame_callbacks: Mutex::new(Vec::new()),
            next_callback_id: AtomicU64::new(0),
            world_matrix: RwLock::new(transform.local_matrix()),
        }
    }

    /// Node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ===== TRANSFORM ACCESS =====

    /// Try to take the transform lock without waiting.
    ///
    /// Returns `None` when another context holds it. A lock poisoned by a
    /// panicking holder is recovered: the transform is plain data.
    pub fn try_lock_transform(&self) -> Option<NodeTransformGuard<'_>> {
        match self.transform.try_lock() {
            Ok(guard) => Some(guard),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Copy of the transform, or `None` if the lock is busy.
    pub fn try_transform(&self) -> Option<NodeTransform> {
        self.try_lock_transform().map(|guard| *guard)
    }

    /// Whether another context currently holds the transform lock.
    pub fn is_locked(&self) -> bool {
        self.try_lock_transform().is_none()
    }

    // ===== FLAGS =====

    /// Current flags.
    pub fn flags(&self) -> NodeFlags {
        NodeFlags::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    /// Set `NEEDS_UPDATE`.
    pub fn mark_needs_update(&self) {
        self.flags.fetch_or(NodeFlags::NEEDS_UPDATE.bits(), Ordering::AcqRel);
    }

    /// Set `DIRTY`.
    pub fn mark_dirty(&self) {
        self.flags.fetch_or(NodeFlags::DIRTY.bits(), Ordering::AcqRel);
    }

    /// Clear the given flags (render side only).
    pub fn clear_flags(&self, flags: NodeFlags) {
        self.flags.fetch_and(!flags.bits(), Ordering::AcqRel);
    }

    /// Read and clear all flags (render side only).
    pub fn take_flags(&self) -> NodeFlags {
        NodeFlags::from_bits_truncate(self.flags.swap(0, Ordering::AcqRel))
    }

    // ===== FRAME CALLBACKS =====

    /// Register a per-frame callback. Callbacks run in insertion order.
    ///
    /// A callback must not register or remove callbacks on its own node.
    pub fn add_frame_callback<F>(&self, callback: F) -> FrameCallbackId
    where
        F: FnMut(&mut NodeTransform) + Send + 'static,
    {
        let id = FrameCallbackId(self.next_callback_id.fetch_add(1, Ordering::Relaxed));
        self.callbacks().push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id is unknown.
    pub fn remove_frame_callback(&self, id: FrameCallbackId) -> bool {
        let mut callbacks = self.callbacks();
        match callbacks.iter().position(|(existing, _)| *existing == id) {
            Some(index) => {
                callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registered callbacks.
    pub fn frame_callback_count(&self) -> usize {
        self.callbacks().len()
    }

    /// Run every callback once against the locked transform.
    ///
    /// Called by the frame driver, once per frame. If the transform lock is
    /// busy the whole node is skipped for this frame. Running at least one
    /// callback marks the node `NEEDS_UPDATE`.
    pub fn run_frame_callbacks(&self) -> FrameCallbackRun {
        let mut callbacks = self.callbacks();
        if callbacks.is_empty() {
            return FrameCallbackRun::NoCallbacks;
        }

        let Some(mut transform) = self.try_lock_transform() else {
            return FrameCallbackRun::Skipped;
        };

        for (_, callback) in callbacks.iter_mut() {
            callback(&mut transform);
        }
        self.mark_needs_update();

        FrameCallbackRun::Ran(callbacks.len())
    }

    fn callbacks(&self) -> MutexGuard<'_, Vec<(FrameCallbackId, FrameCallback)>> {
        self.frame_callbacks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== WORLD MATRIX =====

    /// World matrix as of the last frame update.
    pub fn world_matrix(&self) -> Mat4 {
        *self.world_matrix.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a freshly computed world matrix (frame updater only).
    pub(crate) fn set_world_matrix(&self, matrix: Mat4) {
        *self.world_matrix.write().unwrap_or_else(PoisonError::into_inner) = matrix;
    }
}

impl std::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneNode")
            .field("name", &self.name)
            .field("transform", &self.try_transform())
            .field("flags", &self.flags())
            .field("frame_callbacks", &self.frame_callback_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
