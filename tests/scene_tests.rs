use glam::Vec3;
use trajectory_editor::scene::{Geometry, Scene, SceneObject};
use trajectory_editor::trajectory::shapes::{circle, square, triangle};
use trajectory_editor::types::RotationAxis;

fn object(name: &str) -> SceneObject {
    SceneObject::new(name, Geometry::unit_cube())
}

// ============================================================================
// Scene update loop
// ============================================================================

#[test]
fn test_update_moves_only_playing_objects() {
    let mut moving = object("Moving");
    moving.trajectory = square(2.0, 2.0);
    moving.trajectory.start();

    let mut parked = object("Parked");
    parked.trajectory = square(2.0, 2.0);
    parked.position = Vec3::new(9.0, 9.0, 9.0);

    let mut scene = Scene::new().with_object(moving).with_object(parked);
    scene.update(1.0);

    assert_eq!(scene.objects()[0].position, Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(scene.objects()[1].position, Vec3::new(9.0, 9.0, 9.0));
}

#[test]
fn test_stopped_object_keeps_last_position() {
    let mut cube = object("Cube");
    cube.trajectory = square(2.0, 2.0);
    cube.trajectory.start();

    let mut scene = Scene::new().with_object(cube);
    scene.update(1.0);
    scene.objects_mut()[0].trajectory.stop();
    scene.update(1.0);

    assert_eq!(scene.objects()[0].position, Vec3::new(0.0, 0.0, -2.0));
}

#[test]
fn test_manual_position_after_stop_is_kept() {
    let mut cube = object("Cube");
    cube.trajectory = triangle(2.0, 1.5);
    cube.trajectory.start();

    let mut scene = Scene::new().with_object(cube);
    scene.update(0.5);
    scene.objects_mut()[0].trajectory.stop();
    scene.objects_mut()[0].position = Vec3::new(-1.0, 0.0, 0.0);
    scene.update(0.5);

    assert_eq!(scene.objects()[0].position, Vec3::new(-1.0, 0.0, 0.0));
}

// ============================================================================
// Selection and render data
// ============================================================================

#[test]
fn test_select_next_wraps() {
    let mut scene = Scene::new()
        .with_object(object("A"))
        .with_object(object("B"))
        .with_object(object("C"));

    assert_eq!(scene.selected().unwrap().name, "A");
    assert_eq!(scene.select_next().unwrap().name, "B");
    assert_eq!(scene.select_next().unwrap().name, "C");
    assert_eq!(scene.select_next().unwrap().name, "A");
    assert_eq!(scene.selected_index(), 0);
}

#[test]
fn test_object_uniforms_follow_positions() {
    let mut cube = object("Cube");
    cube.trajectory = circle(3.0, 8, 1.0);
    cube.trajectory.start();

    let mut scene = Scene::new().with_object(cube).with_object(object("Still"));
    scene.update(1.0);

    let uniforms = scene.object_uniforms(0.3, RotationAxis::Z);
    assert_eq!(uniforms.len(), 2);
    assert!((uniforms[0].translation() - scene.objects()[0].position).length() < 1e-5);
    assert_eq!(uniforms[1].translation(), Vec3::ZERO);
    assert_eq!(uniforms[0].textured, 1.0);
}

#[test]
fn test_markers_only_for_selected_object() {
    let mut first = object("First");
    first.trajectory = square(1.0, 1.0);
    let mut second = object("Second");
    second.trajectory = triangle(1.0, 1.0);

    let mut scene = Scene::new().with_object(first).with_object(second);
    scene.toggle_control_points();
    assert_eq!(scene.control_point_markers().len(), 4);

    scene.select_next();
    let markers = scene.control_point_markers();
    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].translation(), Vec3::new(0.0, 0.0, 1.0));

    assert!(!scene.toggle_control_points());
    assert!(scene.control_point_markers().is_empty());
}

#[test]
fn test_find_by_name() {
    let scene = Scene::new().with_object(object("Suzanne"));
    assert!(scene.find("Suzanne").is_some());
    assert!(scene.find("Teapot").is_none());
}
