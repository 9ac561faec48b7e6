//! The room, its fixtures and the lamp jumping around it.
//!
//! [`Scene`] owns every mutable piece of state the controls touch and turns
//! it into a [`Frame`]: a view, the two world-space lights and the ordered
//! list of draw calls for one redraw.

use cgmath::{Matrix4, Point3, Transform};

use crate::{
    animation::{FireAnimation, JUMP_SEGMENTS, JumpAnimation},
    camera::{Camera, follow_lamp},
    data_structures::{light::Light, material::Material, mesh::MeshKind, transform::MatrixStack},
    lamp::Lamp,
    render::{DrawCall, TextureSlot},
};

pub const ROOM_LENGTH: f64 = 15.0;
pub const ROOM_WIDTH: f64 = 12.0;
pub const ROOM_HEIGHT: f64 = 3.0;
/// Radius of the circle the lamp jumps along, before global scaling.
pub const PATH_RADIUS: f64 = 20.0;

const MIN_GLOBAL_SIZE: f64 = 0.1;
const MAX_ROOM_WIDTH: f64 = 20.0;
const MIN_ROOM_WIDTH: f64 = 10.0;

const FLOOR_REPEAT: f32 = 20.0;
const CEILING_REPEAT: f32 = 10.0;
const WALL_REPEAT: f32 = 10.0;

/// Everything needed to draw one image of the scene.
#[derive(Clone, Debug)]
pub struct Frame {
    pub eye: Point3<f32>,
    pub view: Matrix4<f32>,
    /// Room light first, lamp spotlight second.
    pub lights: [Light; 2],
    pub draws: Vec<DrawCall>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    global_size: f64,
    room_length: f64,
    room_width: f64,
    room_height: f64,
    objects_on: bool,
    textures_on: bool,
    lamp_camera: bool,
    room_light: Light,
    lamp: Lamp,
    jump: JumpAnimation,
    fire: FireAnimation,
}

impl Scene {
    pub fn new() -> Self {
        let room_light = Light::point(
            [0.0, 10.0, 0.0, 1.0],
            [0.6, 0.6, 0.6],
            [0.3, 0.3, 0.3],
            [0.3, 0.3, 0.3],
        );
        let mut scene = Self {
            global_size: 1.0,
            room_length: ROOM_LENGTH,
            room_width: ROOM_WIDTH,
            room_height: ROOM_HEIGHT,
            objects_on: true,
            textures_on: true,
            lamp_camera: false,
            room_light,
            lamp: Lamp::new(),
            jump: JumpAnimation::new(),
            fire: FireAnimation::default(),
        };
        scene.reset();
        scene
    }

    /// Restores the animation, the room and the scale to their initial values.
    ///
    /// Lights, textures and the camera mode are left to the caller.
    pub fn reset(&mut self) {
        self.global_size = 1.0;
        self.room_length = ROOM_LENGTH;
        self.room_width = ROOM_WIDTH;
        self.room_height = ROOM_HEIGHT;
        self.jump.reset();
        self.fire.reset();
        self.set_objects_display(true);
    }

    /// One animation tick.
    pub fn update(&mut self) {
        self.jump.advance(self.global_size);
        self.fire.advance();
    }

    pub fn inc_room_size(&mut self, height_only: bool) {
        if height_only {
            self.room_height *= 1.02;
        } else if self.room_width < MAX_ROOM_WIDTH {
            self.room_width *= 1.02;
            self.room_height *= 1.02;
            self.room_length *= 1.02;
        }
    }

    pub fn dec_room_size(&mut self, height_only: bool) {
        if height_only {
            self.room_height *= 0.98;
        } else if self.room_width > MIN_ROOM_WIDTH {
            self.room_width *= 0.98;
            self.room_height *= 0.98;
            self.room_length *= 0.98;
        }
    }

    pub fn inc_size(&mut self) {
        self.global_size += 0.1;
    }

    /// Shrinks everything, never below a tenth of the initial size.
    pub fn dec_size(&mut self) {
        self.global_size = (self.global_size - 0.1).max(MIN_GLOBAL_SIZE);
    }

    pub fn set_objects_display(&mut self, on: bool) {
        self.objects_on = on;
    }

    pub fn set_texture_mode(&mut self) {
        self.textures_on = !self.textures_on;
    }

    pub fn set_textures(&mut self, on: bool) {
        self.textures_on = on;
    }

    pub fn set_camera_mode(&mut self) {
        self.lamp_camera = !self.lamp_camera;
    }

    pub fn room_light(&self) -> &Light {
        &self.room_light
    }

    pub fn lamp_light(&self) -> &Light {
        self.lamp.light()
    }

    pub fn room_light_mut(&mut self) -> &mut Light {
        &mut self.room_light
    }

    pub fn lamp_light_mut(&mut self) -> &mut Light {
        self.lamp.light_mut()
    }

    pub fn objects_on(&self) -> bool {
        self.objects_on
    }

    pub fn textures_on(&self) -> bool {
        self.textures_on
    }

    pub fn lamp_camera(&self) -> bool {
        self.lamp_camera
    }

    pub fn global_size(&self) -> f64 {
        self.global_size
    }

    /// Room dimensions as (length, width, height).
    pub fn room_size(&self) -> (f64, f64, f64) {
        (self.room_length, self.room_width, self.room_height)
    }

    pub fn jump(&self) -> &JumpAnimation {
        &self.jump
    }

    pub fn fire_frame(&self) -> usize {
        self.fire.frame()
    }

    /// Composes the frame for the current state, viewed through `camera`
    /// unless the lamp-following camera is active.
    pub fn render(&self, camera: &Camera) -> Frame {
        let gs = self.global_size;
        let (eye, target) = if self.lamp_camera {
            follow_lamp(self.jump.rotate(), self.jump.delta_y(), gs)
        } else {
            (camera.eye(), Point3::new(0.0, 0.0, 0.0))
        };
        let view = Matrix4::look_at_rh(eye, target, cgmath::Vector3::unit_y());

        let mut room_light = self.room_light;
        room_light.position.y = (10.0 * gs) as f32;

        let mut draws = Vec::new();
        let mut stack = MatrixStack::new();
        let mut lamp_light = *self.lamp.light();
        // a hidden lamp still needs a switched off entry in the light table
        lamp_light.switched_on = false;

        if self.objects_on {
            self.draw_room(&mut stack, &mut draws);
            self.draw_fireplace(&mut stack, &mut draws);

            stack.scoped(|s| {
                s.rotate(f64::from(180 / JUMP_SEGMENTS), 0.0, 1.0, 0.0);
                for side in [1.0, -1.0] {
                    s.scoped(|s| {
                        s.translate(side * PATH_RADIUS * gs, 0.0, 0.0);
                        self.draw_obstacle(s, gs, &mut draws);
                    });
                }
            });

            stack.translate(0.0, self.jump.delta_y() * gs, 0.0);
            lamp_light = stack.scoped(|s| {
                s.rotate(self.jump.rotate(), 0.0, 1.0, 0.0);
                s.translate(-PATH_RADIUS * gs, 0.0, 0.0);
                self.lamp.draw(s, gs, self.jump.pose(), &mut draws)
            });
        }

        Frame {
            eye,
            view,
            lights: [room_light, lamp_light],
            draws,
        }
    }

    fn textured(&self, call: DrawCall, slot: TextureSlot, repeat: f32) -> DrawCall {
        if self.textures_on {
            call.textured(slot, repeat)
        } else {
            call
        }
    }

    fn room_piece(
        &self,
        stack: &mut MatrixStack,
        slot: TextureSlot,
        repeat: f32,
        out: &mut Vec<DrawCall>,
        place: impl FnOnce(&mut MatrixStack),
    ) {
        stack.scoped(|s| {
            place(s);
            // stand the plane up with its base on the origin
            s.translate(0.0, 2.5, 0.0);
            s.rotate(90.0, 1.0, 0.0, 0.0);
            let call = DrawCall::new(MeshKind::Plane, s.top(), Material::DEFAULT);
            out.push(self.textured(call, slot, repeat));
        });
    }

    fn draw_room(&self, stack: &mut MatrixStack, out: &mut Vec<DrawCall>) {
        let gs = self.global_size;
        // x spans the room width, z spans its length
        let length = self.room_width * gs;
        let width = self.room_length * gs;
        let height = self.room_height * gs;

        self.room_piece(stack, TextureSlot::Ceiling, CEILING_REPEAT, out, |s| {
            s.translate(0.0, 5.0 * height, -width * 2.5);
            s.rotate(90.0, 1.0, 0.0, 0.0);
            s.scale(length, width, length);
        });
        self.room_piece(stack, TextureSlot::Floor, FLOOR_REPEAT, out, |s| {
            s.translate(0.0, 0.0, width * 2.5);
            s.rotate(-90.0, 1.0, 0.0, 0.0);
            s.scale(length, width, length);
        });
        for side in [1.0, -1.0] {
            self.room_piece(stack, TextureSlot::Wall, WALL_REPEAT, out, |s| {
                s.translate(side * length * 2.5, 0.0, 0.0);
                s.rotate(-side * 90.0, 0.0, 1.0, 0.0);
                s.scale(width, height, width);
            });
        }
        self.room_piece(stack, TextureSlot::Door, 1.0, out, |s| {
            s.translate(0.0, 0.0, width * 2.49);
            s.rotate(180.0, 0.0, 1.0, 0.0);
            s.scale(length * 0.2, height * 0.7, length * 0.2);
        });
        self.room_piece(stack, TextureSlot::Wall, WALL_REPEAT, out, |s| {
            s.translate(0.0, 0.0, width * 2.5);
            s.rotate(180.0, 0.0, 1.0, 0.0);
            s.scale(length, height, length);
        });
        self.room_piece(stack, TextureSlot::Wall, WALL_REPEAT, out, |s| {
            s.translate(0.0, 0.0, -width * 2.5);
            s.scale(length, height, length);
        });
    }

    fn draw_fireplace(&self, stack: &mut MatrixStack, out: &mut Vec<DrawCall>) {
        let gs = self.global_size;
        let length = self.room_length * gs;
        let width = self.room_width * gs;
        let height = self.room_height * gs;
        let slot = TextureSlot::Fire(self.fire.frame());
        self.room_piece(stack, slot, 1.0, out, |s| {
            s.translate(0.0, 0.0, -width * 3.0 * gs);
            s.scale(length * 0.15, height * 0.4, length * 0.15);
        });
    }

    fn draw_obstacle(&self, stack: &mut MatrixStack, size: f64, out: &mut Vec<DrawCall>) {
        let mut cube = |model: Matrix4<f32>| {
            let call = DrawCall::new(MeshKind::Cube, model, Material::DEFAULT);
            out.push(self.textured(call, TextureSlot::Obstacle, 1.0));
        };
        for bar_height in [1.9, 1.3, 0.7] {
            stack.scoped(|s| {
                s.translate(2.5 * size, bar_height * size, 0.0);
                s.rotate(90.0, 0.0, 0.0, 1.0);
                s.scale(0.3 * size, 5.0 * size, 0.3 * size);
                s.translate(0.0, 0.5, 0.0);
                cube(s.top());
            });
        }
        for side in [-1.0, 1.0] {
            stack.scoped(|s| {
                s.translate(side * 2.5 * size, 0.0, 0.0);
                s.scale(0.6 * size, 2.5 * size, 0.6 * size);
                s.translate(0.0, 0.5, 0.0);
                cube(s.top());
            });
        }
    }
}

/// Where the lamp base stands for the given travel angle and jump height.
pub fn lamp_position(rotate: f64, delta_y: f64, global_size: f64) -> Point3<f32> {
    let mut stack = MatrixStack::new();
    stack.translate(0.0, delta_y * global_size, 0.0);
    stack.rotate(rotate, 0.0, 1.0, 0.0);
    stack.translate(-PATH_RADIUS * global_size, 0.0, 0.0);
    stack.top().transform_point(Point3::new(0.0, 0.0, 0.0))
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
