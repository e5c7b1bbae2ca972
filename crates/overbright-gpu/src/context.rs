use wgpu::{Device, Instance, Queue};

pub struct GpuContext {
    pub instance: Instance,
    pub device: Device,
    pub queue: Queue,
}

impl GpuContext {
    /// Create a headless GPU context (no surface). Used for exercising the
    /// brighten pass without a window; the surface-aware setup lives in
    /// `overbright-app`.
    pub async fn new_headless() -> Self {
        let instance = Instance::default();

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("No suitable GPU adapter found");

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("overbright-gpu device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .expect("Failed to create GPU device");

        Self {
            instance,
            device,
            queue,
        }
    }
}

/// Per-draw data uploaded as a single uniform buffer before the brighten
/// pass runs. Must match the `Uniforms` struct in `shaders/brighten.wgsl`.
/// `repr(C)` + `bytemuck` ensures safe casting to `&[u8]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    /// Seconds since the host started rendering. Set before every draw,
    /// read by nothing in the shader.
    pub time: f32,
    pub _pad: [f32; 3], // keep the buffer 16 bytes
}

impl Uniforms {
    pub fn new(time: f32) -> Self {
        Self {
            time,
            _pad: [0.0; 3],
        }
    }
}
