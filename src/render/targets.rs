use super::helpers;
use wgpu;

pub(crate) const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Offscreen targets for the render pipeline: the full-resolution scene color
/// the glitch pass samples, and the depth buffer for the model pass.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn create(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (scene_tex, scene_view) = helpers::create_color_texture(
            device,
            "scene_color",
            width.max(1),
            height.max(1),
            SCENE_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let (depth_tex, depth_view) = helpers::create_color_texture(
            device,
            "scene_depth",
            width.max(1),
            height.max(1),
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            scene_tex,
            scene_view,
            depth_tex,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::create(device, width, height);
    }
}
