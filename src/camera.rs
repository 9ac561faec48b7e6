//! Orbit camera, lamp-following camera and the projection.
//!
//! The orbit camera sits on a sphere around the room centre and is steered by
//! mouse drags. The view matrix itself is produced by the scene, which knows
//! whether the lamp-following view is active.

use cgmath::{InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};
use wgpu::util::DeviceExt;

use crate::scene::lamp_position;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

const SAFE_FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2 - 0.0175;
pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 90.0;
/// World units zoomed per full window height of right-button drag.
pub const ZOOM_SPEED: f32 = 20.0;

/// Camera orbiting the origin.
///
/// `theta` turns around the Y axis, `phi` is the elevation above the floor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    theta: Rad<f32>,
    phi: Rad<f32>,
    radius: f32,
}

impl Camera {
    pub fn new<T: Into<Rad<f32>>, P: Into<Rad<f32>>>(theta: T, phi: P, radius: f32) -> Self {
        let mut camera = Self {
            theta: theta.into(),
            phi: phi.into(),
            radius,
        };
        camera.clamp();
        camera
    }

    pub fn theta(&self) -> Rad<f32> {
        self.theta
    }

    pub fn phi(&self) -> Rad<f32> {
        self.phi
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Turns the camera by the given angles in radians.
    pub fn update_theta_phi(&mut self, d_theta: f32, d_phi: f32) {
        self.theta += Rad(d_theta);
        self.phi += Rad(d_phi);
        self.clamp();
    }

    /// Moves the camera `dr` window heights closer or further away.
    pub fn update_radius(&mut self, dr: f32) {
        self.radius += dr * ZOOM_SPEED;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.phi = Rad(self.phi.0.clamp(-SAFE_FRAC_PI_2, SAFE_FRAC_PI_2));
        self.radius = self.radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn eye(&self) -> Point3<f32> {
        let (sin_theta, cos_theta) = self.theta.0.sin_cos();
        let (sin_phi, cos_phi) = self.phi.0.sin_cos();
        Point3::new(
            self.radius * cos_theta * cos_phi,
            self.radius * sin_phi,
            self.radius * sin_theta * cos_phi,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(cgmath::Deg(-45.0), cgmath::Deg(30.0), 30.0)
    }
}

/// Eye and target for the camera riding behind the jumping lamp.
///
/// The eye trails the lamp on its circle and looks ahead along the direction
/// of travel.
pub fn follow_lamp(rotate: f64, delta_y: f64, global_size: f64) -> (Point3<f32>, Point3<f32>) {
    let lamp = lamp_position(rotate, delta_y, global_size);
    let (sin, cos) = (rotate as f32).to_radians().sin_cos();
    let heading = Vector3::new(sin, 0.0, cos).normalize();
    let gs = global_size as f32;
    let eye = lamp - heading * 6.0 * gs + Vector3::unit_y() * 4.0 * gs;
    let target = lamp + heading * 10.0 * gs + Vector3::unit_y() * gs;
    (eye, target)
}

#[derive(Copy, Clone, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(800, 800, cgmath::Deg(60.0), 0.1, 100.0)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, eye: Point3<f32>, view: Matrix4<f32>, projection: &Projection) {
        self.view_position = eye.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * view).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct CameraResources {
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, uniform: CameraUniform) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
