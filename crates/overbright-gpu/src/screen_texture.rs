use overbright_core::texture::Texture;
use wgpu::{Device, Queue};

/// The previously rendered frame, as the GPU resource the brighten pass
/// samples. Rgba32Float so texel values survive upload untouched, including
/// values outside [0, 1].
pub struct ScreenTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl ScreenTexture {
    pub fn new(device: &Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("screen_tex"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba32Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&Default::default());
        Self {
            texture,
            view,
            width,
            height,
        }
    }

    /// Upload a CPU frame into the texture. The caller guarantees the frame
    /// is fully drawn before the pass that samples it is submitted; queue
    /// ordering covers the rest.
    pub fn upload(&self, queue: &Queue, frame: &Texture) {
        assert_eq!(
            (frame.width() as u32, frame.height() as u32),
            (self.width, self.height),
            "frame dimensions must match the screen texture"
        );
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(frame.texels()),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(self.width * 16), // 4 × f32 per texel
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }
}
