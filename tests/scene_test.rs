use cgmath::{Deg, EuclideanSpace, Point3, Transform, Vector3};
use jumping_lamp::{
    camera::{Camera, follow_lamp},
    data_structures::mesh::MeshKind,
    render::{DrawCall, TextureSlot},
    scene::{Scene, lamp_position},
};

use crate::common::{assert_direction_near, assert_point_near};

mod common;

const ROOM_PIECES: usize = 7;
const FIREPLACE: usize = ROOM_PIECES;
const OBSTACLE_CUBES: usize = 5;
const LAMP_PARTS: usize = 12;

fn centre(call: &DrawCall) -> Point3<f32> {
    call.model.transform_point(Point3::origin())
}

fn up_normal(call: &DrawCall) -> Vector3<f32> {
    call.to_instance().normal_matrix() * Vector3::unit_y()
}

#[test]
fn full_scene_draw_order() {
    let frame = Scene::new().render(&Camera::default());
    assert_eq!(
        frame.draws.len(),
        ROOM_PIECES + 1 + 2 * OBSTACLE_CUBES + LAMP_PARTS
    );
    let slots: Vec<_> = frame.draws[..ROOM_PIECES].iter().map(|d| d.texture).collect();
    assert_eq!(
        slots,
        vec![
            Some(TextureSlot::Ceiling),
            Some(TextureSlot::Floor),
            Some(TextureSlot::Wall),
            Some(TextureSlot::Wall),
            Some(TextureSlot::Door),
            Some(TextureSlot::Wall),
            Some(TextureSlot::Wall),
        ]
    );
    assert_eq!(frame.draws[FIREPLACE].texture, Some(TextureSlot::Fire(0)));
    let obstacles = &frame.draws[FIREPLACE + 1..FIREPLACE + 1 + 2 * OBSTACLE_CUBES];
    assert!(obstacles.iter().all(|d| d.mesh == MeshKind::Cube));
    assert!(obstacles.iter().all(|d| d.texture == Some(TextureSlot::Obstacle)));
    let lamp = &frame.draws[frame.draws.len() - LAMP_PARTS..];
    assert!(lamp.iter().all(|d| d.texture.is_none()));
    assert_eq!(lamp.iter().filter(|d| d.double_sided).count(), 1);
}

#[test]
fn floor_faces_up_and_ceiling_faces_down() {
    let frame = Scene::new().render(&Camera::default());
    let ceiling = &frame.draws[0];
    let floor = &frame.draws[1];

    assert_point_near(centre(floor), Point3::new(0.0, 0.0, 0.0));
    assert_direction_near(up_normal(floor), Vector3::unit_y());

    assert_point_near(centre(ceiling), Point3::new(0.0, 15.0, 0.0));
    assert_direction_near(up_normal(ceiling), -Vector3::unit_y());
}

#[test]
fn walls_face_the_room() {
    let frame = Scene::new().render(&Camera::default());
    for wall in &frame.draws[2..ROOM_PIECES] {
        let c = centre(wall);
        let inward = Vector3::new(-c.x, 0.0, -c.z);
        let normal = up_normal(wall);
        assert!(
            cgmath::InnerSpace::dot(normal, inward) > 0.0,
            "wall at {c:?} faces {normal:?}"
        );
    }
}

#[test]
fn obstacles_sit_on_the_lamp_path() {
    let frame = Scene::new().render(&Camera::default());
    let first = FIREPLACE + 1;
    let (sin, cos) = Deg(9.0_f32).0.to_radians().sin_cos();
    for (side, range) in [
        (1.0, first..first + OBSTACLE_CUBES),
        (-1.0, first + OBSTACLE_CUBES..first + 2 * OBSTACLE_CUBES),
    ] {
        let cubes = &frame.draws[range];
        let (x, z) = cubes.iter().map(centre).fold((0.0, 0.0), |(x, z), c| (x + c.x, z + c.z));
        let n = cubes.len() as f32;
        let mean = Point3::new(x / n, 0.0, z / n);
        assert_point_near(mean, Point3::new(side * 20.0 * cos, 0.0, -side * 20.0 * sin));
    }
}

#[test]
fn hidden_objects_draw_nothing_and_darken_the_lamp() {
    let mut scene = Scene::new();
    scene.set_objects_display(false);
    let frame = scene.render(&Camera::default());
    assert!(frame.draws.is_empty());
    assert!(frame.lights[0].switched_on);
    assert!(!frame.lights[1].switched_on);
}

#[test]
fn textures_off_draws_plain_materials() {
    let mut scene = Scene::new();
    scene.set_texture_mode();
    assert!(!scene.textures_on());
    let frame = scene.render(&Camera::default());
    assert!(frame.draws.iter().all(|d| d.texture.is_none()));

    scene.set_texture_mode();
    assert!(scene.textures_on());
}

#[test]
fn lamp_light_sits_in_the_bulb() {
    let frame = Scene::new().render(&Camera::default());
    let bulb = frame.draws.last().unwrap();
    assert_eq!(bulb.mesh, MeshKind::Sphere);
    let light = frame.lights[1];
    assert!(light.switched_on);
    assert_point_near(Point3::from_homogeneous(light.position), centre(bulb));
    assert!(light.position.y > 0.0);
    assert!(light.spot.is_some());
}

#[test]
fn switched_off_lamp_has_no_bulb() {
    let mut scene = Scene::new();
    scene.lamp_light_mut().set_switched_on(false);
    let frame = scene.render(&Camera::default());
    assert_eq!(frame.draws.len(), ROOM_PIECES + 1 + 2 * OBSTACLE_CUBES + LAMP_PARTS - 1);
    assert!(!frame.lights[1].switched_on);
}

#[test]
fn room_light_follows_global_size() {
    let mut scene = Scene::new();
    assert!((scene.render(&Camera::default()).lights[0].position.y - 10.0).abs() < 1e-5);
    scene.inc_size();
    assert!((scene.render(&Camera::default()).lights[0].position.y - 11.0).abs() < 1e-5);
}

#[test]
fn fireplace_shows_the_current_frame() {
    let mut scene = Scene::new();
    scene.update();
    scene.update();
    assert_eq!(scene.fire_frame(), 2);
    let frame = scene.render(&Camera::default());
    assert_eq!(frame.draws[FIREPLACE].texture, Some(TextureSlot::Fire(2)));
}

#[test]
fn lamp_walks_a_circle() {
    assert_point_near(lamp_position(0.0, 0.0, 1.0), Point3::new(-20.0, 0.0, 0.0));
    assert_point_near(lamp_position(90.0, 0.0, 1.0), Point3::new(0.0, 0.0, 20.0));
    assert_point_near(lamp_position(180.0, 2.0, 0.5), Point3::new(10.0, 1.0, 0.0));
}

#[test]
fn room_grows_only_up_to_its_limit() {
    let mut scene = Scene::new();
    for _ in 0..100 {
        scene.inc_room_size(false);
    }
    let (length, width, height) = scene.room_size();
    assert!(width >= 20.0 && width < 20.0 * 1.02);
    assert!(length > 15.0 && height > 3.0);

    for _ in 0..200 {
        scene.dec_room_size(false);
    }
    let (_, width, _) = scene.room_size();
    assert!(width <= 10.0 && width > 10.0 * 0.98);
}

#[test]
fn height_only_resize_keeps_the_floor_plan() {
    let mut scene = Scene::new();
    scene.inc_room_size(true);
    let (length, width, height) = scene.room_size();
    assert_eq!((length, width), (15.0, 12.0));
    assert!((height - 3.06).abs() < 1e-9);
    scene.dec_room_size(true);
    scene.dec_room_size(true);
    assert!(scene.room_size().2 < 3.0);
}

#[test]
fn global_size_has_a_floor() {
    let mut scene = Scene::new();
    for _ in 0..20 {
        scene.dec_size();
    }
    assert!((scene.global_size() - 0.1).abs() < 1e-9);
    scene.inc_size();
    assert!((scene.global_size() - 0.2).abs() < 1e-9);
}

#[test]
fn reset_keeps_lights_textures_and_camera_mode() {
    let mut scene = Scene::new();
    scene.room_light_mut().set_switched_on(false);
    scene.set_texture_mode();
    scene.set_camera_mode();
    scene.inc_size();
    scene.inc_room_size(false);
    for _ in 0..50 {
        scene.update();
    }

    scene.reset();

    assert_eq!(scene.global_size(), 1.0);
    assert_eq!(scene.room_size(), (15.0, 12.0, 3.0));
    assert_eq!(scene.jump().rotate(), 0.0);
    assert_eq!(scene.fire_frame(), 0);
    assert!(scene.objects_on());
    assert!(!scene.room_light().switched_on);
    assert!(!scene.textures_on());
    assert!(scene.lamp_camera());
}

#[test]
fn lamp_camera_rides_behind_the_lamp() {
    let mut scene = Scene::new();
    let camera = Camera::default();
    assert_point_near(scene.render(&camera).eye, camera.eye());

    scene.set_camera_mode();
    for _ in 0..40 {
        scene.update();
    }
    let jump = scene.jump();
    let (eye, _) = follow_lamp(jump.rotate(), jump.delta_y(), scene.global_size());
    assert_point_near(scene.render(&camera).eye, eye);
}
