use std::sync::Arc;
use std::time::Instant;

use overbright_core::pattern::SourcePattern;
use overbright_gpu::{brighten::BrightenPass, context::Uniforms, screen_texture::ScreenTexture};
use winit::window::Window;

use crate::input::{InputAction, InputState, Key};

// ---------------------------------------------------------------------------
// Simple FPS counter — logs to console once per second
// ---------------------------------------------------------------------------

struct FpsCounter {
    frames: u32,
    last_report: Instant,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// Increment the frame count.  Returns the FPS value if a full second has
    /// elapsed since the last report (so the caller can log it).
    fn tick(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.last_report = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    // The screen texture is a size-dependent resource, rebuilt on resize.
    screen: ScreenTexture,
    pass: BrightenPass,

    // Source frame tracking
    pattern_idx: usize,
    screen_dirty: bool,

    // Input
    input: InputState,

    // Frame timing
    time: f32,
    last_frame: Instant,
    fps: FpsCounter,
}

impl App {
    /// Initialise wgpu for a given window.  The window is wrapped in `Arc` so
    /// that the surface can safely hold a `'static` reference to it.
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        // ---- Instance -------------------------------------------------------
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // ---- Surface --------------------------------------------------------
        let surface = instance
            .create_surface(Arc::clone(&window))
            .expect("failed to create wgpu surface");

        // ---- Adapter --------------------------------------------------------
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("no suitable GPU adapter found");

        log::info!("GPU adapter: {}", adapter.get_info().name);

        // ---- Device & Queue -------------------------------------------------
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("overbright-app device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("failed to create GPU device");

        // ---- Surface configuration ------------------------------------------
        let surface_caps = surface.get_capabilities(&adapter);

        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}×{} {:?} Fifo",
            surface_config.width,
            surface_config.height,
            format
        );

        // ---- GPU resources --------------------------------------------------
        let screen = ScreenTexture::new(&device, width, height);
        let pass = BrightenPass::new(&device, format);

        Self {
            surface,
            device,
            queue,
            surface_config,
            screen,
            pass,
            pattern_idx: 0,
            screen_dirty: true,
            input: InputState::new(),
            time: 0.0,
            last_frame: Instant::now(),
            fps: FpsCounter::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Reconfigure the surface and rebuild size-dependent GPU resources.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        self.surface_config.width = new_width;
        self.surface_config.height = new_height;
        self.surface.configure(&self.device, &self.surface_config);

        // The screen texture is tied to the resolution; the source frame
        // must be re-synthesized at the new size.
        self.screen = ScreenTexture::new(&self.device, new_width, new_height);
        self.screen_dirty = true;

        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Input — called by main.rs window_event handler
    // -------------------------------------------------------------------------

    /// Translate a key press and return the resulting action, if any.
    pub fn on_key_pressed(&self, key: Key) -> Option<InputAction> {
        self.input.on_key(key)
    }

    /// Apply an action to the app state.
    ///
    /// Returns `true` if the app should exit (i.e. action was `Quit`).
    pub fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::LoadPattern(pattern) => {
                log::info!("Loading pattern: {}", pattern.name());
                if let Some(idx) = SourcePattern::ALL.iter().position(|&p| p == pattern) {
                    self.pattern_idx = idx;
                }
                self.screen_dirty = true;
            }

            InputAction::CycleNextPattern => {
                self.pattern_idx = (self.pattern_idx + 1) % SourcePattern::ALL.len();
                log::info!("Cycling to pattern: {}", self.pattern().name());
                self.screen_dirty = true;
            }

            InputAction::ResetClock => {
                log::info!("Draw clock reset");
                self.time = 0.0;
            }

            InputAction::Quit => return true,
        }
        false
    }

    fn pattern(&self) -> SourcePattern {
        SourcePattern::ALL[self.pattern_idx]
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one full frame: advance the clock, upload the source frame if it
    /// changed, record the brighten pass, present.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // --- Timing ----------------------------------------------------------
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.time += dt;

        if let Some(fps) = self.fps.tick() {
            log::debug!(
                "FPS: {:.1}  pattern: {}  t: {:.1}s",
                fps,
                self.pattern().name(),
                self.time,
            );
        }

        // --- Source frame ----------------------------------------------------
        // Re-synthesize and upload only when the pattern or the surface size
        // changed; the upload is ordered before the pass on the same queue.
        if self.screen_dirty {
            let frame = self
                .pattern()
                .fill(self.screen.width as usize, self.screen.height as usize);
            self.screen.upload(&self.queue, &frame);
            self.screen_dirty = false;
        }

        // The time uniform is set before every draw; the shader leaves it
        // unread.
        let uniforms = Uniforms::new(self.time);

        // --- Acquire surface texture -----------------------------------------
        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        // --- Brighten pass ---------------------------------------------------
        self.pass.encode(
            &self.device,
            &self.queue,
            &mut encoder,
            &uniforms,
            &self.screen.view,
            &surface_view,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
