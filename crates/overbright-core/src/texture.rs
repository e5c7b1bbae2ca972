use glam::{Vec2, Vec4};

// ---------------------------------------------------------------------------
// Sampler configuration — owned by the host, not by the pass
// ---------------------------------------------------------------------------

/// How normalized coordinates outside [0, 1] resolve to texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    ClampToEdge,
    Repeat,
}

/// Texel filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Host-side sampling configuration. The pass itself imposes no bounds on
/// its coordinates; whatever lands outside [0, 1] is resolved here.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    pub address_mode: AddressMode,
    pub filter: FilterMode,
}

impl Default for Sampler {
    /// Matches the GPU pass: nearest, clamp to edge.
    fn default() -> Self {
        Self {
            address_mode: AddressMode::ClampToEdge,
            filter: FilterMode::Nearest,
        }
    }
}

// ---------------------------------------------------------------------------
// Texture
// ---------------------------------------------------------------------------

/// A CPU-side RGBA float image. Texels are stored row-major as `[f32; 4]`
/// so the whole buffer casts directly to bytes for GPU upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<[f32; 4]>,
}

impl Texture {
    pub fn from_texels(width: usize, height: usize, texels: Vec<[f32; 4]>) -> Self {
        assert_eq!(
            texels.len(),
            width * height,
            "texel count must match dimensions"
        );
        Self {
            width,
            height,
            texels,
        }
    }

    pub fn solid(width: usize, height: usize, rgba: [f32; 4]) -> Self {
        Self::from_texels(width, height, vec![rgba; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw texels, row-major.
    pub fn texels(&self) -> &[[f32; 4]] {
        &self.texels
    }

    pub fn texel(&self, x: usize, y: usize) -> Vec4 {
        Vec4::from_array(self.texels[y * self.width + x])
    }

    /// One filtered lookup at a normalized coordinate, the same contract the
    /// texture hardware applies: address mode first, then nearest or
    /// bilinear filtering over texel centres at `(i + 0.5) / extent`.
    pub fn sample(&self, uv: Vec2, sampler: &Sampler) -> Vec4 {
        match sampler.filter {
            FilterMode::Nearest => {
                let x = resolve(
                    (uv.x * self.width as f32).floor() as i64,
                    self.width,
                    sampler.address_mode,
                );
                let y = resolve(
                    (uv.y * self.height as f32).floor() as i64,
                    self.height,
                    sampler.address_mode,
                );
                self.texel(x, y)
            }
            FilterMode::Linear => {
                let px = uv.x * self.width as f32 - 0.5;
                let py = uv.y * self.height as f32 - 0.5;
                let (x0, y0) = (px.floor(), py.floor());
                let (fx, fy) = (px - x0, py - y0);
                let fetch = |dx: i64, dy: i64| {
                    let x = resolve(x0 as i64 + dx, self.width, sampler.address_mode);
                    let y = resolve(y0 as i64 + dy, self.height, sampler.address_mode);
                    self.texel(x, y)
                };
                let top = fetch(0, 0).lerp(fetch(1, 0), fx);
                let bottom = fetch(0, 1).lerp(fetch(1, 1), fx);
                top.lerp(bottom, fy)
            }
        }
    }
}

fn resolve(i: i64, extent: usize, mode: AddressMode) -> usize {
    match mode {
        AddressMode::ClampToEdge => i.clamp(0, extent as i64 - 1) as usize,
        AddressMode::Repeat => i.rem_euclid(extent as i64) as usize,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
