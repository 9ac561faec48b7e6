//! Per-draw data uploaded to the GPU as an instance buffer.
//!
//! Each draw call of a frame becomes one instance: the model matrix, the
//! matching normal matrix and the material are packed into [`InstanceRaw`] and
//! read by the vertex shader with a step mode of `Instance`.

use cgmath::{Matrix, Matrix3, Matrix4, SquareMatrix};

use crate::data_structures::{material::Material, mesh::Vertex};

/// A posed, shaded primitive ready for packing.
#[derive(Clone, Debug)]
pub struct Instance {
    pub model: Matrix4<f32>,
    pub material: Material,
    pub uv_repeat: f32,
    pub textured: bool,
}

impl Instance {
    pub fn new(model: Matrix4<f32>, material: Material) -> Self {
        Self {
            model,
            material,
            uv_repeat: 1.0,
            textured: false,
        }
    }

    /// Inverse transpose of the upper 3x3 so that normals survive non-uniform scales.
    pub fn normal_matrix(&self) -> Matrix3<f32> {
        let upper = Matrix3::from_cols(
            self.model.x.truncate(),
            self.model.y.truncate(),
            self.model.z.truncate(),
        );
        match upper.invert() {
            Some(inverse) => inverse.transpose(),
            // a zero scale collapses the primitive, any normal will do
            None => Matrix3::identity(),
        }
    }

    pub fn to_raw(&self) -> InstanceRaw {
        let m = &self.material;
        InstanceRaw {
            model: self.model.into(),
            normal: self.normal_matrix().into(),
            ambient: m.ambient,
            diffuse: m.diffuse,
            specular: m.specular,
            emission: m.emission,
            params: [
                m.shininess,
                self.uv_repeat,
                if self.textured { 1.0 } else { 0.0 },
                0.0,
            ],
        }
    }
}

/**
 * The raw instance is the actual data stored on the GPU
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    emission: [f32; 4],
    // shininess, uv repeat, textured flag, unused
    params: [f32; 4],
}

/**
 * Stride layout here: model matrix as four vec4s, normal matrix as three vec3s,
 * then the material colours and the packed scalar parameters.
 */
impl Vertex for InstanceRaw {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            // The shader only moves on to the next instance once it starts a new draw instance
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 4,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 25]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 29]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 33]>() as wgpu::BufferAddress,
                    shader_location: 12,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 37]>() as wgpu::BufferAddress,
                    shader_location: 13,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 41]>() as wgpu::BufferAddress,
                    shader_location: 14,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
