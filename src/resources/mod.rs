use std::path::Path;

use futures::future::join_all;

use crate::{
    data_structures::texture::Texture,
    render::TextureSlot,
    resources::texture::{diffuse_bind_group, load_texture},
};

/**
 * This module contains all logic for loading textures from the asset directory.
 */
pub mod texture;

/// Bind groups for every texture the room uses, indexed by [`TextureSlot`].
///
/// Untextured draws and textures that failed to load share a white 1x1
/// texture, which leaves the lit colour unchanged when modulated.
pub struct TextureSet {
    slots: Vec<wgpu::BindGroup>,
    blank: wgpu::BindGroup,
}

impl TextureSet {
    pub async fn load(
        asset_dir: &Path,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
    ) -> anyhow::Result<Self> {
        let white = Texture::solid_colour(device, queue, [255, 255, 255, 255], "white");
        let blank = diffuse_bind_group(device, layout, &white, "blank_bind_group")?;

        let loads = TextureSlot::ALL
            .iter()
            .map(|slot| load_texture(asset_dir, slot.file_name(), device, queue));
        let results = join_all(loads).await;

        let mut slots = Vec::with_capacity(results.len());
        for (slot, result) in TextureSlot::ALL.iter().zip(results) {
            let texture = match result {
                Ok(texture) => texture,
                Err(e) => {
                    log::warn!("Error loading texture {}: {e:#}", slot.file_name());
                    white.clone()
                }
            };
            slots.push(diffuse_bind_group(device, layout, &texture, slot.file_name())?);
        }
        log::info!("loaded {} textures from {}", slots.len(), asset_dir.display());

        Ok(Self { slots, blank })
    }

    pub fn bind_group(&self, slot: Option<TextureSlot>) -> &wgpu::BindGroup {
        slot.and_then(|slot| self.slots.get(slot.index()))
            .unwrap_or(&self.blank)
    }
}
