use std::f32::consts::FRAC_PI_2;
use std::sync::atomic::{AtomicBool, Ordering};
use glam::{Quat, Vec3};
use super::*;
use crate::camera::{Camera, Projection, SharedCamera};
use crate::controls::{ControlConfig, ControlSettings, ViewerState};
use crate::scene::SceneNode;

fn assert_vec3_eq(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, 1e-5),
        "expected {:?}, got {:?}", expected, actual
    );
}

fn viewer_with(camera: Camera, drag_speed: f32) -> Arc<ViewerState> {
    let settings = ControlSettings::new(ControlConfig::new(drag_speed)).unwrap();
    Arc::new(ViewerState::new(Arc::new(SharedCamera::new(camera)), settings))
}

fn viewer() -> Arc<ViewerState> {
    viewer_with(Camera::default(), 0.01)
}

fn select_new_node(viewer: &ViewerState, name: &str) -> Arc<SceneNode> {
    let node = Arc::new(SceneNode::new(name));
    viewer.selection().set_active_node(Some(node.clone())).unwrap();
    node
}

fn position_of(node: &SceneNode) -> Vec3 {
    node.try_transform().unwrap().position
}

/// Context that records whether the camera or speed were read while the
/// node's transform lock was held.
struct LockCheckingContext {
    node: Arc<SceneNode>,
    read_under_lock: AtomicBool,
}

impl LockCheckingContext {
    fn check(&self) {
        if self.node.is_locked() {
            self.read_under_lock.store(true, Ordering::SeqCst);
        }
    }
}

impl ControlContext for LockCheckingContext {
    fn active_node(&self) -> Option<Arc<SceneNode>> {
        Some(self.node.clone())
    }

    fn camera(&self) -> Camera {
        self.check();
        Camera::default()
    }

    fn drag_speed(&self) -> f32 {
        self.check();
        0.01
    }

    fn scroll_speed(&self) -> f32 {
        self.check();
        0.1
    }
}

// ============================================================================
// Basic gesture
// ============================================================================

#[test]
fn test_drag_right_moves_along_camera_right() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    assert_eq!(control.init(100, 100), ControlOutcome::BaselineCaptured);
    let outcome = control.drag(110, 100);

    assert!(outcome.is_applied());
    assert_vec3_eq(position_of(&node), Vec3::new(0.1, 0.0, 0.0));
}

#[test]
fn test_drag_up_on_screen_moves_along_camera_up() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(50, 50);
    control.drag(50, 30);

    assert_vec3_eq(position_of(&node), Vec3::new(0.0, 0.2, 0.0));
}

#[test]
fn test_drags_telescope_to_total_pointer_motion() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    for step in 1..=10 {
        control.drag(step * 3, -step);
    }

    assert_vec3_eq(position_of(&node), Vec3::new(0.3, 0.1, 0.0));
    assert_eq!(control.last_sample(), (30, -10));
}

#[test]
fn test_drag_marks_node_for_update() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    node.take_flags();
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    control.drag(1, 0);

    assert!(node.flags().contains(crate::scene::NodeFlags::NEEDS_UPDATE));
}

#[test]
fn test_drag_follows_rotated_camera() {
    // Yaw 90 degrees: camera right becomes world -Z
    let camera = Camera::new(
        Vec3::new(0.0, 0.0, -5.0),
        Quat::from_rotation_y(FRAC_PI_2),
        Projection::default(),
    );
    let viewer = viewer_with(camera, 0.5);
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    control.drag(2, 0);

    assert_vec3_eq(position_of(&node), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_end_then_new_gesture_uses_new_baseline() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    control.drag(10, 0);
    assert_eq!(control.end(10, 0), ControlOutcome::Ignored);
    assert!(control.is_awaiting_first_sample());

    control.init(500, 500);
    control.drag(510, 500);

    assert_vec3_eq(position_of(&node), Vec3::new(0.2, 0.0, 0.0));
}

// ============================================================================
// Baseline handling
// ============================================================================

#[test]
fn test_repeated_init_keeps_gesture_baseline() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(100, 100);
    assert_eq!(control.init(200, 200), ControlOutcome::Ignored);
    control.drag(110, 100);

    assert_vec3_eq(position_of(&node), Vec3::new(0.1, 0.0, 0.0));
}

#[test]
fn test_drag_without_init_captures_baseline_first() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    assert_eq!(control.drag(400, 300), ControlOutcome::BaselineCaptured);
    assert_eq!(position_of(&node), Vec3::ZERO);

    control.drag(410, 300);
    assert_vec3_eq(position_of(&node), Vec3::new(0.1, 0.0, 0.0));
}

#[test]
fn test_selection_made_mid_gesture_does_not_jump() {
    let viewer = viewer();
    let mut control = NodeDragControl::new(viewer.clone());

    // Pressed over empty space
    assert_eq!(control.init(0, 0), ControlOutcome::NoActiveNode);
    assert_eq!(control.drag(100, 0), ControlOutcome::NoActiveNode);

    let node = select_new_node(&viewer, "late");
    assert_eq!(control.drag(200, 0), ControlOutcome::BaselineCaptured);
    control.drag(205, 0);

    assert_vec3_eq(position_of(&node), Vec3::new(0.05, 0.0, 0.0));
}

// ============================================================================
// Dropped events
// ============================================================================

#[test]
fn test_no_active_node_is_a_no_op() {
    let viewer = viewer();
    let mut control = NodeDragControl::new(viewer.clone());

    assert_eq!(control.init(0, 0), ControlOutcome::NoActiveNode);
    assert_eq!(control.drag(10, 10), ControlOutcome::NoActiveNode);
    assert_eq!(control.end(10, 10), ControlOutcome::Ignored);
}

#[test]
fn test_busy_lock_drops_drag_without_moving_baseline() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());
    control.init(0, 0);

    {
        let _held = node.try_lock_transform().unwrap();
        assert_eq!(control.drag(10, 0), ControlOutcome::LockBusy);
        assert_eq!(control.drag(20, 0), ControlOutcome::LockBusy);
    }
    assert_eq!(control.last_sample(), (0, 0));
    assert_eq!(position_of(&node), Vec3::ZERO);

    // The next accepted drag covers the whole motion
    control.drag(30, 0);
    assert_vec3_eq(position_of(&node), Vec3::new(0.3, 0.0, 0.0));
}

#[test]
fn test_switching_selection_moves_the_new_node() {
    let viewer = viewer();
    let first = select_new_node(&viewer, "first");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    control.drag(10, 0);
    let second = select_new_node(&viewer, "second");
    control.drag(20, 0);

    assert_vec3_eq(position_of(&first), Vec3::new(0.1, 0.0, 0.0));
    assert_vec3_eq(position_of(&second), Vec3::new(0.1, 0.0, 0.0));
}

#[test]
fn test_extreme_pointer_coordinates_do_not_panic() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(-10, i32::MIN);
    let outcome = control.drag(i32::MAX, 0);

    let ControlOutcome::Translated(offset) = outcome else {
        panic!("expected a translation, got {:?}", outcome);
    };
    assert!(offset.is_finite());
    let expected_x = (i32::MAX as f32 + 10.0) * 0.01;
    let expected_y = i32::MIN as f32 * 0.01;
    assert!((offset.x - expected_x).abs() <= expected_x.abs() * 1e-6);
    assert!((offset.y - expected_y).abs() <= expected_y.abs() * 1e-6);

    // Lock released and gesture still usable
    assert!(!node.is_locked());
    assert!(control.drag(i32::MIN, i32::MAX).is_applied());
    assert!(position_of(&node).is_finite());
}

#[test]
fn test_camera_and_speed_read_outside_node_lock() {
    let context = Arc::new(LockCheckingContext {
        node: Arc::new(SceneNode::new("box")),
        read_under_lock: AtomicBool::new(false),
    });
    let mut control = NodeDragControl::new(context.clone());

    control.init(0, 0);
    assert!(control.drag(10, 0).is_applied());

    assert!(!context.read_under_lock.load(Ordering::SeqCst));
    assert_vec3_eq(position_of(&context.node), Vec3::new(0.1, 0.0, 0.0));
}

// ============================================================================
// Live settings
// ============================================================================

#[test]
fn test_speed_change_applies_to_next_drag() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    control.drag(10, 0);
    viewer.settings().set_drag_speed(0.1).unwrap();
    control.drag(20, 0);

    assert_vec3_eq(position_of(&node), Vec3::new(1.1, 0.0, 0.0));
}

#[test]
fn test_camera_change_applies_to_next_drag() {
    let viewer = viewer();
    let node = select_new_node(&viewer, "box");
    let mut control = NodeDragControl::new(viewer.clone());

    control.init(0, 0);
    viewer.shared_camera()
        .update(|camera| camera.set_rotation(Quat::from_rotation_z(FRAC_PI_2)))
        .unwrap();
    control.drag(10, 0);

    // Rolled 90 degrees: camera right is world +Y
    assert_vec3_eq(position_of(&node), Vec3::new(0.0, 0.1, 0.0));
}
