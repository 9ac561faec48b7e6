//! Procedural meshes kept as plain CPU-side vertex/index arrays.
//!
//! Every primitive the scene uses is generated here once and later uploaded to
//! the GPU by [`crate::render::MeshBuffers`]. Cylinders and cones follow the
//! GLU/GLUT convention of extending along +Z, which is why the lamp rig rotates
//! them upright before drawing.

use std::f32::consts::PI;

/// Describes how the bytes of a vertex buffer map onto shader inputs.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// The primitives a draw call can reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Plane,
    Cube,
    Cylinder,
    Sphere,
    Cone,
}

impl MeshKind {
    pub const ALL: [MeshKind; 5] = [
        MeshKind::Plane,
        MeshKind::Cube,
        MeshKind::Cylinder,
        MeshKind::Sphere,
        MeshKind::Cone,
    ];

    /// Builds the mesh with the tessellation used throughout the scene.
    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Plane => MeshData::plane(5.0, 5.0, 10, 10),
            MeshKind::Cube => MeshData::hard_cube(),
            MeshKind::Cylinder => MeshData::cylinder(32),
            MeshKind::Sphere => MeshData::sphere(32, 16),
            MeshKind::Cone => MeshData::cone(48),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MeshKind::Plane => "plane",
            MeshKind::Cube => "cube",
            MeshKind::Cylinder => "cylinder",
            MeshKind::Sphere => "sphere",
            MeshKind::Cone => "cone",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> u32 {
        self.vertices.push(MeshVertex {
            position,
            normal,
            tex_coords,
        });
        (self.vertices.len() - 1) as u32
    }

    /// A `width` x `depth` grid on the XZ plane facing +Y.
    ///
    /// `v` runs from 1 at the -Z edge to 0 at the +Z edge so that a plane
    /// stood up with a +90 degree X rotation shows its texture upright.
    pub fn plane(width: f32, depth: f32, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let mut mesh = MeshData::default();
        for r in 0..=rows {
            let v = r as f32 / rows as f32;
            let z = -depth * 0.5 + depth * v;
            for c in 0..=cols {
                let u = c as f32 / cols as f32;
                let x = -width * 0.5 + width * u;
                mesh.push([x, 0.0, z], [0.0, 1.0, 0.0], [u, 1.0 - v]);
            }
        }
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = r * stride + c;
                let b = a + 1;
                let below = a + stride;
                let below_right = below + 1;
                mesh.indices.extend_from_slice(&[a, below, b, b, below, below_right]);
            }
        }
        mesh
    }

    /// Unit cube centred on the origin with a separate set of vertices per face.
    pub fn hard_cube() -> Self {
        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            ([0.0, 0.0, 1.0], [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
            ([0.0, 0.0, -1.0], [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]]),
            ([0.0, 1.0, 0.0], [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]]),
            ([0.0, -1.0, 0.0], [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
            ([1.0, 0.0, 0.0], [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]]),
            ([-1.0, 0.0, 0.0], [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
        ];
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

        let mut mesh = MeshData::default();
        for (normal, corners) in faces {
            let first = mesh.vertices.len() as u32;
            for (corner, uv) in corners.into_iter().zip(uvs) {
                mesh.push(corner, normal, uv);
            }
            mesh.indices
                .extend_from_slice(&[first, first + 1, first + 2, first + 2, first + 3, first]);
        }
        mesh
    }

    /// Closed cylinder of radius 0.5 spanning `z` in `[0, 1]`.
    pub fn cylinder(slices: u32) -> Self {
        let slices = slices.max(3);
        let radius = 0.5;
        let mut mesh = MeshData::default();

        for i in 0..=slices {
            let u = i as f32 / slices as f32;
            let (sin, cos) = (2.0 * PI * u).sin_cos();
            mesh.push([radius * cos, radius * sin, 0.0], [cos, sin, 0.0], [u, 0.0]);
            mesh.push([radius * cos, radius * sin, 1.0], [cos, sin, 0.0], [u, 1.0]);
        }
        for i in 0..slices {
            let bottom = i * 2;
            let top = bottom + 1;
            let next_bottom = bottom + 2;
            let next_top = bottom + 3;
            mesh.indices
                .extend_from_slice(&[bottom, next_bottom, next_top, bottom, next_top, top]);
        }

        for (z, normal_z) in [(0.0, -1.0), (1.0, 1.0)] {
            let centre = mesh.push([0.0, 0.0, z], [0.0, 0.0, normal_z], [0.5, 0.5]);
            let ring = mesh.vertices.len() as u32;
            for i in 0..=slices {
                let (sin, cos) = (2.0 * PI * i as f32 / slices as f32).sin_cos();
                mesh.push(
                    [radius * cos, radius * sin, z],
                    [0.0, 0.0, normal_z],
                    [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
                );
            }
            for i in 0..slices {
                let (a, b) = (ring + i, ring + i + 1);
                if normal_z > 0.0 {
                    mesh.indices.extend_from_slice(&[centre, a, b]);
                } else {
                    mesh.indices.extend_from_slice(&[centre, b, a]);
                }
            }
        }
        mesh
    }

    /// Unit radius UV sphere with poles on the Y axis.
    pub fn sphere(slices: u32, stacks: u32) -> Self {
        let slices = slices.max(3);
        let stacks = stacks.max(2);
        let mut mesh = MeshData::default();

        for stack in 0..=stacks {
            let v = stack as f32 / stacks as f32;
            let (ring_radius, y) = (PI * v).sin_cos();
            for slice in 0..=slices {
                let u = slice as f32 / slices as f32;
                let (sin, cos) = (2.0 * PI * u).sin_cos();
                let position = [ring_radius * cos, y, ring_radius * sin];
                mesh.push(position, position, [u, v]);
            }
        }
        let stride = slices + 1;
        for stack in 0..stacks {
            for slice in 0..slices {
                let current = stack * stride + slice;
                let next = current + stride;
                mesh.indices
                    .extend_from_slice(&[current, current + 1, next, current + 1, next + 1, next]);
            }
        }
        mesh
    }

    /// Cone with a unit radius base disc at `z = 0` and its apex at `z = 1`.
    pub fn cone(slices: u32) -> Self {
        let slices = slices.max(3);
        let mut mesh = MeshData::default();
        let side = std::f32::consts::FRAC_1_SQRT_2;

        for i in 0..slices {
            let u0 = i as f32 / slices as f32;
            let u1 = (i + 1) as f32 / slices as f32;
            let (s0, c0) = (2.0 * PI * u0).sin_cos();
            let (s1, c1) = (2.0 * PI * u1).sin_cos();
            let (sm, cm) = (PI * (u0 + u1)).sin_cos();
            let a = mesh.push([c0, s0, 0.0], [c0 * side, s0 * side, side], [u0, 0.0]);
            let b = mesh.push([c1, s1, 0.0], [c1 * side, s1 * side, side], [u1, 0.0]);
            let apex = mesh.push(
                [0.0, 0.0, 1.0],
                [cm * side, sm * side, side],
                [(u0 + u1) * 0.5, 1.0],
            );
            mesh.indices.extend_from_slice(&[a, b, apex]);
        }

        let centre = mesh.push([0.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.5, 0.5]);
        let ring = mesh.vertices.len() as u32;
        for i in 0..=slices {
            let (sin, cos) = (2.0 * PI * i as f32 / slices as f32).sin_cos();
            mesh.push([cos, sin, 0.0], [0.0, 0.0, -1.0], [0.5 + 0.5 * cos, 0.5 + 0.5 * sin]);
        }
        for i in 0..slices {
            mesh.indices.extend_from_slice(&[centre, ring + i + 1, ring + i]);
        }
        mesh
    }
}
