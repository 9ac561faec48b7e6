use jumping_lamp::{
    camera::Camera,
    controls::{Command, Controls, Flow, MouseButtonState, MouseDrag},
    scene::Scene,
};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::MouseButton,
    keyboard::KeyCode,
};

fn window() -> PhysicalSize<u32> {
    PhysicalSize::new(800, 800)
}

#[test]
fn keys_map_to_commands() {
    assert_eq!(Command::from_key(KeyCode::KeyO), Some(Command::ToggleObjects));
    assert_eq!(Command::from_key(KeyCode::Digit1), Some(Command::ToggleRoomLight));
    assert_eq!(Command::from_key(KeyCode::Digit2), Some(Command::ToggleLampLight));
    assert_eq!(Command::from_key(KeyCode::Equal), Some(Command::IncreaseRoomSize));
    assert_eq!(Command::from_key(KeyCode::PageDown), Some(Command::DecreaseRoomHeight));
    assert_eq!(Command::from_key(KeyCode::KeyC), Some(Command::CameraMode));
    assert_eq!(Command::from_key(KeyCode::Escape), Some(Command::Quit));
    assert_eq!(Command::from_key(KeyCode::KeyZ), None);
}

#[test]
fn toggles_flip_scene_state() {
    let mut controls = Controls::new(false);
    let mut scene = Scene::new();

    assert_eq!(controls.apply(Command::ToggleObjects, &mut scene), Flow::Continue);
    assert!(!scene.objects_on());
    controls.apply(Command::ToggleRoomLight, &mut scene);
    assert!(!scene.room_light().switched_on);
    controls.apply(Command::ToggleLampLight, &mut scene);
    assert!(!scene.lamp_light().switched_on);
    controls.apply(Command::ToggleTextures, &mut scene);
    assert!(!scene.textures_on());
    controls.apply(Command::CameraMode, &mut scene);
    assert!(scene.lamp_camera());

    controls.apply(Command::ToggleRoomLight, &mut scene);
    assert!(scene.room_light().switched_on);
}

#[test]
fn start_pause_and_single_frame() {
    let mut controls = Controls::new(false);
    let mut scene = Scene::new();
    assert!(!controls.animating());

    controls.apply(Command::AnimateFrame, &mut scene);
    assert_eq!(scene.fire_frame(), 1);
    assert!(!controls.animating());

    controls.apply(Command::StartAnimation, &mut scene);
    assert!(controls.animating());
    controls.apply(Command::PauseAnimation, &mut scene);
    assert!(!controls.animating());
}

#[test]
fn reset_restores_lights_and_textures() {
    let mut controls = Controls::new(true);
    let mut scene = Scene::new();
    controls.apply(Command::ToggleObjects, &mut scene);
    controls.apply(Command::ToggleRoomLight, &mut scene);
    controls.apply(Command::ToggleLampLight, &mut scene);
    controls.apply(Command::ToggleTextures, &mut scene);
    controls.apply(Command::PauseAnimation, &mut scene);
    controls.apply(Command::IncreaseSize, &mut scene);

    controls.apply(Command::ResetScene, &mut scene);

    assert!(scene.objects_on());
    assert!(scene.room_light().switched_on);
    assert!(scene.lamp_light().switched_on);
    assert!(scene.textures_on());
    assert_eq!(scene.global_size(), 1.0);
    assert!(controls.animating());
}

#[test]
fn quit_exits() {
    let mut controls = Controls::new(false);
    let mut scene = Scene::new();
    assert_eq!(controls.apply(Command::Quit, &mut scene), Flow::Exit);
}

#[test]
fn title_reports_toggles() {
    let mut controls = Controls::new(false);
    let mut scene = Scene::new();
    assert!(controls.title(&scene).contains("room light on"));
    controls.apply(Command::ToggleRoomLight, &mut scene);
    let title = controls.title(&scene);
    assert!(title.contains("room light off"));
    assert!(title.contains("paused"));
}

#[test]
fn first_cursor_move_only_records_position() {
    let mut drag = MouseDrag::default();
    let mut camera = Camera::default();
    drag.button(MouseButton::Left, true);
    drag.moved(PhysicalPosition::new(400.0, 400.0), window(), &mut camera);
    assert_eq!(camera, Camera::default());
}

#[test]
fn left_drag_orbits() {
    let mut drag = MouseDrag::default();
    let mut camera = Camera::default();
    drag.moved(PhysicalPosition::new(400.0, 400.0), window(), &mut camera);
    drag.button(MouseButton::Left, true);
    assert_eq!(drag.pressed(), MouseButtonState::Left);
    drag.moved(PhysicalPosition::new(200.0, 400.0), window(), &mut camera);

    let turned = camera.theta().0 - Camera::default().theta().0;
    assert!((turned - 0.5).abs() < 1e-5, "turned by {turned}");
    assert_eq!(camera.radius(), Camera::default().radius());
}

#[test]
fn right_drag_zooms() {
    let mut drag = MouseDrag::default();
    let mut camera = Camera::default();
    drag.moved(PhysicalPosition::new(400.0, 400.0), window(), &mut camera);
    drag.button(MouseButton::Right, true);
    drag.moved(PhysicalPosition::new(400.0, 200.0), window(), &mut camera);
    assert!(camera.radius() > Camera::default().radius());
    assert_eq!(camera.theta(), Camera::default().theta());
}

#[test]
fn release_stops_the_drag() {
    let mut drag = MouseDrag::default();
    let mut camera = Camera::default();
    drag.button(MouseButton::Left, true);
    drag.button(MouseButton::Left, false);
    assert_eq!(drag.pressed(), MouseButtonState::None);
    drag.moved(PhysicalPosition::new(0.0, 0.0), window(), &mut camera);
    drag.moved(PhysicalPosition::new(300.0, 300.0), window(), &mut camera);
    assert_eq!(camera, Camera::default());
}
