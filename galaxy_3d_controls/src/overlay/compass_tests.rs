use glam::{Mat4, Vec3};
use super::*;
use crate::camera::{Camera, Projection};
use crate::scene::{DefaultFrameUpdater, FrameUpdater, NodeParent};

fn live_camera(position: Vec3, rotation: Quat) -> Arc<SharedCamera> {
    Arc::new(SharedCamera::new(Camera::new(
        position,
        rotation,
        Projection::perspective(FRAC_PI_2, 1.0, 0.5, 100.0),
    )))
}

fn world_direction(matrix: Mat4) -> Vec3 {
    matrix.transform_vector3(Vec3::Y).normalize()
}

#[test]
fn test_defaults() {
    let compass = OrientationCompass::default();
    assert_eq!(compass.axis_length(), 0.1);
    assert_eq!(compass.anchor(), Vec2::new(-0.9, 0.7));
}

#[test]
fn test_builds_named_hierarchy() {
    let mut scene = SceneGraph::new();
    let camera = live_camera(Vec3::ZERO, Quat::IDENTITY);

    let root = OrientationCompass::new().add_to(&mut scene, camera).unwrap();

    assert_eq!(scene.node(root).unwrap().name(), COMPASS_ROOT_NAME);
    assert_eq!(scene.parent(root), Some(NodeParent::Camera));
    assert_eq!(scene.node(root).unwrap().frame_callback_count(), 1);
    assert_eq!(scene.node_count(), 7);

    let names: Vec<&str> = scene
        .children(root)
        .iter()
        .map(|key| scene.node(*key).unwrap().name())
        .collect();
    assert_eq!(names, ["compass axis: X", "compass axis: Y", "compass axis: Z"]);
}

#[test]
fn test_axis_caps_sit_at_axis_length() {
    let mut scene = SceneGraph::new();
    let camera = live_camera(Vec3::ZERO, Quat::IDENTITY);
    OrientationCompass::new()
        .with_axis_length(0.25)
        .add_to(&mut scene, camera)
        .unwrap();

    let cap = scene.find_by_name("compass axis cap: Z").unwrap();
    let position = scene.node(cap).unwrap().try_transform().unwrap().position;
    assert_eq!(position, Vec3::new(0.0, 0.25, 0.0));
}

#[test]
fn test_axes_point_along_world_axes_after_a_frame() {
    let rotation = Quat::from_rotation_y(0.8) * Quat::from_rotation_x(-0.4);
    let camera = live_camera(Vec3::new(1.0, 2.0, -6.0), rotation);
    let mut scene = SceneGraph::new();
    let root = OrientationCompass::new().add_to(&mut scene, camera.clone()).unwrap();

    let mut updater = DefaultFrameUpdater::new();
    updater.update_frame(&scene, &camera.snapshot());

    let (_, root_rotation, _) = scene.node(root).unwrap().world_matrix().to_scale_rotation_translation();
    assert!(root_rotation.abs_diff_eq(Quat::IDENTITY, 1e-4)
        || root_rotation.abs_diff_eq(-Quat::IDENTITY, 1e-4));

    for (label, expected) in [("X", Vec3::X), ("Y", Vec3::Y), ("Z", Vec3::Z)] {
        let key = scene.find_by_name(&format!("compass axis: {}", label)).unwrap();
        let direction = world_direction(scene.node(key).unwrap().world_matrix());
        assert!(direction.abs_diff_eq(expected, 1e-4), "axis {} points {:?}", label, direction);
    }
}

#[test]
fn test_compass_stays_in_front_of_moving_camera() {
    let camera = live_camera(Vec3::ZERO, Quat::IDENTITY);
    let mut scene = SceneGraph::new();
    let root = OrientationCompass::new().add_to(&mut scene, camera.clone()).unwrap();
    let mut updater = DefaultFrameUpdater::new();

    for step in 0..5 {
        let offset = Vec3::new(step as f32, 0.0, step as f32 * 2.0);
        camera.update(|cam| cam.set_position(offset)).unwrap();
        let snapshot = camera.snapshot();
        updater.update_frame(&scene, &snapshot);

        let world = scene.node(root).unwrap().world_matrix().transform_point3(Vec3::ZERO);
        let expected = snapshot.view_to_world(snapshot.viewport_to_view(Vec2::new(-0.9, 0.7)));
        assert!(world.abs_diff_eq(expected, 1e-4));
    }
}
