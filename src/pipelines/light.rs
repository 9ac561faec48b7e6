use wgpu::util::DeviceExt;

use crate::data_structures::light::Light;

/// Ambient light present even with every light switched off.
pub const GLOBAL_AMBIENT: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
pub const MAX_LIGHTS: usize = 2;

pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightRaw {
    position: [f32; 4],
    // xyz direction, w cosine of the cutoff angle or -1 for no cone
    spot: [f32; 4],
    ambient: [f32; 4],
    diffuse: [f32; 4],
    // rgb specular, w is 1 when the light is on
    specular: [f32; 4],
}

impl From<&Light> for LightRaw {
    fn from(light: &Light) -> Self {
        let spot = match light.spot {
            Some(spot) => {
                let cos = cgmath::Rad::from(spot.cutoff).0.cos();
                [spot.direction.x, spot.direction.y, spot.direction.z, cos]
            }
            None => [0.0, 0.0, -1.0, -1.0],
        };
        let rgba = |c: [f32; 3]| [c[0], c[1], c[2], 1.0];
        let specular = light.specular;
        Self {
            position: light.position.into(),
            spot,
            ambient: rgba(light.ambient),
            diffuse: rgba(light.diffuse),
            specular: [
                specular[0],
                specular[1],
                specular[2],
                if light.switched_on { 1.0 } else { 0.0 },
            ],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    lights: [LightRaw; MAX_LIGHTS],
    global_ambient: [f32; 4],
}

impl LightUniform {
    pub fn new(lights: &[Light; MAX_LIGHTS]) -> Self {
        Self {
            lights: [LightRaw::from(&lights[0]), LightRaw::from(&lights[1])],
            global_ambient: GLOBAL_AMBIENT,
        }
    }

    pub fn is_on(&self, index: usize) -> bool {
        self.lights.get(index).is_some_and(|l| l.specular[3] > 0.5)
    }
}

impl LightResources {
    pub fn new(device: &wgpu::Device, uniform: LightUniform) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn update(&mut self, queue: &wgpu::Queue, lights: &[Light; MAX_LIGHTS]) {
        self.uniform = LightUniform::new(lights);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
        label: Some("light_bind_group_layout"),
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: Some("light_bind_group"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    #[test]
    fn uniform_matches_wgsl_layout() {
        // two lights of five vec4s plus the global ambient
        assert_eq!(std::mem::size_of::<LightUniform>(), (2 * 5 + 1) * 16);
    }

    #[test]
    fn spotlight_packs_cosine_of_cutoff() {
        let light = Light::point([0.0; 4], [0.0; 3], [1.0; 3], [1.0; 3])
            .make_spotlight([0.0, 0.0, -1.0], Deg(60.0));
        let raw = LightRaw::from(&light);
        assert!((raw.spot[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn switched_off_light_is_flagged() {
        let mut off = Light::point([0.0, 1.0, 0.0, 1.0], [0.5; 3], [0.5; 3], [0.5; 3]);
        off.set_switched_on(false);
        let on = Light::point([0.0, 1.0, 0.0, 1.0], [0.5; 3], [0.5; 3], [0.5; 3]);
        let uniform = LightUniform::new(&[on, off]);
        assert!(uniform.is_on(0));
        assert!(!uniform.is_on(1));
    }
}
