//! Render composition.
//!
//! The scene describes a frame as an ordered list of [`DrawCall`]s. The
//! [`Renderer`] owns the GPU side: every mesh is uploaded once, each draw call
//! becomes one entry of a per-frame instance buffer, and draws are issued in
//! list order while switching pipelines and textures only when they change.

use std::collections::HashMap;

use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        instance::{Instance, InstanceRaw},
        material::Material,
        mesh::{MeshData, MeshKind},
    },
    pipelines::basic::mk_phong_pipeline,
    resources::TextureSet,
};

/// The images the room is dressed with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Floor,
    Ceiling,
    Wall,
    Door,
    /// One of the four fireplace frames.
    Fire(usize),
    Obstacle,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 9] = [
        TextureSlot::Floor,
        TextureSlot::Ceiling,
        TextureSlot::Wall,
        TextureSlot::Obstacle,
        TextureSlot::Door,
        TextureSlot::Fire(0),
        TextureSlot::Fire(1),
        TextureSlot::Fire(2),
        TextureSlot::Fire(3),
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureSlot::Floor => "floor.jpg",
            TextureSlot::Ceiling => "ceiling.jpg",
            TextureSlot::Wall => "wall.jpg",
            TextureSlot::Obstacle => "obstacle.jpg",
            TextureSlot::Door => "door.jpg",
            TextureSlot::Fire(0) => "fire_1.png",
            TextureSlot::Fire(1) => "fire_2.png",
            TextureSlot::Fire(2) => "fire_3.png",
            TextureSlot::Fire(_) => "fire_4.png",
        }
    }

    /// Position in [`TextureSlot::ALL`].
    pub fn index(self) -> usize {
        match self {
            TextureSlot::Floor => 0,
            TextureSlot::Ceiling => 1,
            TextureSlot::Wall => 2,
            TextureSlot::Obstacle => 3,
            TextureSlot::Door => 4,
            TextureSlot::Fire(frame) => 5 + frame.min(3),
        }
    }
}

/// One primitive posed in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKind,
    pub model: Matrix4<f32>,
    pub material: Material,
    pub texture: Option<TextureSlot>,
    pub uv_repeat: f32,
    pub double_sided: bool,
}

impl DrawCall {
    pub fn new(mesh: MeshKind, model: Matrix4<f32>, material: Material) -> Self {
        Self {
            mesh,
            model,
            material,
            texture: None,
            uv_repeat: 1.0,
            double_sided: false,
        }
    }

    /// Modulates the lit colour by `slot`, tiled `repeat` times across the mesh.
    pub fn textured(mut self, slot: TextureSlot, repeat: f32) -> Self {
        self.texture = Some(slot);
        self.uv_repeat = repeat;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn to_instance(&self) -> Instance {
        Instance {
            model: self.model,
            material: self.material,
            uv_repeat: self.uv_repeat,
            textured: self.texture.is_some(),
        }
    }
}

/// Vertex and index buffers of one uploaded mesh.
#[derive(Debug)]
pub struct MeshBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device, mesh: &MeshData, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            num_elements: mesh.indices.len() as u32,
        }
    }
}

pub struct Renderer {
    meshes: HashMap<MeshKind, MeshBuffers>,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: usize,
    culled_pipeline: wgpu::RenderPipeline,
    double_sided_pipeline: wgpu::RenderPipeline,
    textures: TextureSet,
}

impl Renderer {
    const INITIAL_INSTANCES: usize = 64;

    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        textures: TextureSet,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        light_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let meshes = MeshKind::ALL
            .iter()
            .map(|kind| (*kind, MeshBuffers::new(device, &kind.build(), kind.label())))
            .collect();
        let pipeline = |cull_mode| {
            mk_phong_pipeline(
                device,
                config,
                texture_bind_group_layout,
                camera_bind_group_layout,
                light_bind_group_layout,
                cull_mode,
            )
        };
        Self {
            meshes,
            instance_buffer: mk_instance_buffer(device, Self::INITIAL_INSTANCES),
            instance_capacity: Self::INITIAL_INSTANCES,
            instance_count: 0,
            culled_pipeline: pipeline(Some(wgpu::Face::Back)),
            double_sided_pipeline: pipeline(None),
            textures,
        }
    }

    /// Writes one instance per draw call, growing the buffer when needed.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draws: &[DrawCall]) {
        if draws.len() > self.instance_capacity {
            self.instance_capacity = draws.len().next_power_of_two();
            log::debug!("growing instance buffer to {}", self.instance_capacity);
            self.instance_buffer = mk_instance_buffer(device, self.instance_capacity);
        }
        let raw: Vec<InstanceRaw> = draws.iter().map(|d| d.to_instance().to_raw()).collect();
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&raw));
        self.instance_count = raw.len();
    }

    /// Issues the draws prepared by the last call to [`prepare`](Self::prepare).
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        draws: &[DrawCall],
        camera_bind_group: &wgpu::BindGroup,
        light_bind_group: &wgpu::BindGroup,
    ) {
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.set_bind_group(1, camera_bind_group, &[]);
        pass.set_bind_group(2, light_bind_group, &[]);

        let mut double_sided = None;
        let mut texture = None;
        let mut mesh_kind = None;
        for (i, call) in draws.iter().enumerate().take(self.instance_count) {
            if double_sided != Some(call.double_sided) {
                pass.set_pipeline(if call.double_sided {
                    &self.double_sided_pipeline
                } else {
                    &self.culled_pipeline
                });
                double_sided = Some(call.double_sided);
            }
            if texture != Some(call.texture) {
                pass.set_bind_group(0, self.textures.bind_group(call.texture), &[]);
                texture = Some(call.texture);
            }
            let Some(mesh) = self.meshes.get(&call.mesh) else {
                continue;
            };
            if mesh_kind != Some(call.mesh) {
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                mesh_kind = Some(call.mesh);
            }
            let instance = i as u32;
            pass.draw_indexed(0..mesh.num_elements, 0, instance..instance + 1);
        }
    }
}

fn mk_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
