//! Keyboard commands and mouse camera control.
//!
//! Every toggle and button of the control panel is a [`Command`] bound to a
//! key. Dragging with the left button orbits the camera, dragging with the
//! right button zooms.

use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::MouseButton,
    keyboard::KeyCode,
};

use crate::{camera::Camera, scene::Scene};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleObjects,
    ToggleRoomLight,
    ToggleLampLight,
    ToggleTextures,
    IncreaseRoomSize,
    DecreaseRoomSize,
    IncreaseRoomHeight,
    DecreaseRoomHeight,
    IncreaseSize,
    DecreaseSize,
    ResetScene,
    AnimateFrame,
    StartAnimation,
    PauseAnimation,
    CameraMode,
    Quit,
}

impl Command {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let command = match key {
            KeyCode::KeyO => Command::ToggleObjects,
            KeyCode::Digit1 => Command::ToggleRoomLight,
            KeyCode::Digit2 => Command::ToggleLampLight,
            KeyCode::KeyT => Command::ToggleTextures,
            KeyCode::Equal | KeyCode::NumpadAdd => Command::IncreaseRoomSize,
            KeyCode::Minus | KeyCode::NumpadSubtract => Command::DecreaseRoomSize,
            KeyCode::PageUp => Command::IncreaseRoomHeight,
            KeyCode::PageDown => Command::DecreaseRoomHeight,
            KeyCode::BracketRight => Command::IncreaseSize,
            KeyCode::BracketLeft => Command::DecreaseSize,
            KeyCode::KeyR => Command::ResetScene,
            KeyCode::KeyF => Command::AnimateFrame,
            KeyCode::KeyS => Command::StartAnimation,
            KeyCode::KeyP => Command::PauseAnimation,
            KeyCode::KeyC => Command::CameraMode,
            KeyCode::Escape | KeyCode::KeyQ => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// What the event loop should do after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Debug)]
pub struct Controls {
    animating: bool,
    start_animated: bool,
}

impl Controls {
    pub fn new(start_animated: bool) -> Self {
        Self {
            animating: start_animated,
            start_animated,
        }
    }

    /// Whether the scene advances on every tick.
    pub fn animating(&self) -> bool {
        self.animating
    }

    pub fn apply(&mut self, command: Command, scene: &mut Scene) -> Flow {
        log::debug!("{command:?}");
        match command {
            Command::ToggleObjects => {
                let on = !scene.objects_on();
                scene.set_objects_display(on);
            }
            Command::ToggleRoomLight => {
                let light = scene.room_light_mut();
                light.set_switched_on(!light.switched_on);
            }
            Command::ToggleLampLight => {
                let light = scene.lamp_light_mut();
                light.set_switched_on(!light.switched_on);
            }
            Command::ToggleTextures => scene.set_texture_mode(),
            Command::IncreaseRoomSize => scene.inc_room_size(false),
            Command::DecreaseRoomSize => scene.dec_room_size(false),
            Command::IncreaseRoomHeight => scene.inc_room_size(true),
            Command::DecreaseRoomHeight => scene.dec_room_size(true),
            Command::IncreaseSize => scene.inc_size(),
            Command::DecreaseSize => scene.dec_size(),
            Command::ResetScene => self.reset(scene),
            Command::AnimateFrame => scene.update(),
            Command::StartAnimation => self.animating = true,
            Command::PauseAnimation => self.animating = false,
            Command::CameraMode => scene.set_camera_mode(),
            Command::Quit => return Flow::Exit,
        }
        Flow::Continue
    }

    /// Restores the scene and switches every light and the textures back on.
    pub fn reset(&mut self, scene: &mut Scene) {
        scene.set_objects_display(true);
        scene.room_light_mut().set_switched_on(true);
        scene.lamp_light_mut().set_switched_on(true);
        scene.set_textures(true);
        self.animating = self.start_animated;
        scene.reset();
    }

    /// Window title summarising the toggles.
    pub fn title(&self, scene: &Scene) -> String {
        let on_off = |b: bool| if b { "on" } else { "off" };
        let objects = on_off(scene.objects_on());
        let textures = on_off(scene.textures_on());
        let room = on_off(scene.room_light().switched_on);
        let lamp = on_off(scene.lamp_light().switched_on);
        let camera = if scene.lamp_camera() { "lamp" } else { "orbit" };
        let animation = if self.animating { "running" } else { "paused" };
        format!(
            "Jumping lamp | objects {objects} | textures {textures} | room light {room} | lamp light {lamp} | camera {camera} | {animation}"
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MouseButtonState {
    Left,
    Right,
    #[default]
    None,
}

/// Turns cursor movement into camera moves while a button is held.
#[derive(Clone, Debug, Default)]
pub struct MouseDrag {
    pressed: MouseButtonState,
    last: Option<PhysicalPosition<f64>>,
}

impl MouseDrag {
    pub fn pressed(&self) -> MouseButtonState {
        self.pressed
    }

    pub fn button(&mut self, button: MouseButton, is_pressed: bool) {
        self.pressed = match (button, is_pressed) {
            (MouseButton::Left, true) => MouseButtonState::Left,
            (MouseButton::Right, true) => MouseButtonState::Right,
            (_, false) => MouseButtonState::None,
            _ => self.pressed,
        };
    }

    /// Applies the movement since the last cursor position to `camera`.
    ///
    /// Offsets are measured in window sizes, so a drag across the whole
    /// window turns the camera by two radians.
    pub fn moved(
        &mut self,
        position: PhysicalPosition<f64>,
        window: PhysicalSize<u32>,
        camera: &mut Camera,
    ) {
        let Some(last) = self.last.replace(position) else {
            return;
        };
        let dx = ((position.x - last.x) / f64::from(window.width.max(1))) as f32;
        let dy = ((position.y - last.y) / f64::from(window.height.max(1))) as f32;
        match self.pressed {
            MouseButtonState::Left => camera.update_theta_phi(-dx * 2.0, dy * 2.0),
            MouseButtonState::Right => camera.update_radius(-dy),
            MouseButtonState::None => (),
        }
    }
}
