pub mod brighten;
pub mod pattern;
pub mod raster;
pub mod texture;

use glam::{Vec2, Vec4};

use texture::{Sampler, Texture};

// ---------------------------------------------------------------------------
// DrawUniforms — values the host sets once per draw
// ---------------------------------------------------------------------------

/// Uniform values set by the host before a draw call. Constant across every
/// pixel invocation of that draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawUniforms {
    /// Seconds since the host started rendering. Bound for every draw so the
    /// host-facing interface stays stable; the brighten pass never reads it.
    pub time: f32,
}

// ---------------------------------------------------------------------------
// DrawContext — everything one pixel invocation is allowed to see
// ---------------------------------------------------------------------------

/// Read-only per-draw state handed by reference to the per-pixel function:
/// the bound screen texture, the host-configured sampler, and the uniforms.
/// Shared by all invocations of a draw; none of them mutate it.
pub struct DrawContext<'a> {
    pub screen: &'a Texture,
    pub sampler: Sampler,
    pub uniforms: DrawUniforms,
}

impl<'a> DrawContext<'a> {
    pub fn new(screen: &'a Texture, sampler: Sampler, uniforms: DrawUniforms) -> Self {
        Self {
            screen,
            sampler,
            uniforms,
        }
    }

    /// One 2D lookup against the bound screen texture.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        self.screen.sample(uv, &self.sampler)
    }
}
