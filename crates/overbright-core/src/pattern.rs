use fastnoise_lite::{FastNoiseLite, NoiseType};

use crate::texture::Texture;

/// Built-in source frames standing in for the upstream render pass whose
/// output the brighten pass consumes. Texel values stay at or below
/// `HEADROOM` so a ×5 pass lands at or below 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePattern {
    HorizontalGradient,
    Checkerboard,
    Scanlines,
    NoiseField,
}

/// Upper bound on source channel values.
pub const HEADROOM: f32 = 0.2;

impl SourcePattern {
    pub const ALL: [SourcePattern; 4] = [
        SourcePattern::HorizontalGradient,
        SourcePattern::Checkerboard,
        SourcePattern::Scanlines,
        SourcePattern::NoiseField,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SourcePattern::HorizontalGradient => "Horizontal Gradient",
            SourcePattern::Checkerboard => "Checkerboard",
            SourcePattern::Scanlines => "Scanlines",
            SourcePattern::NoiseField => "Noise Field",
        }
    }

    /// Synthesize the pattern at the given resolution. Deterministic: the
    /// same pattern and size always produce the same texels.
    pub fn fill(self, width: usize, height: usize) -> Texture {
        let mut texels = Vec::with_capacity(width * height);
        match self {
            SourcePattern::HorizontalGradient => {
                for _y in 0..height {
                    for x in 0..width {
                        let t = (x as f32 + 0.5) / width as f32;
                        texels.push([0.18 * t, 0.06 * t, 0.18 * (1.0 - t), HEADROOM]);
                    }
                }
            }
            SourcePattern::Checkerboard => {
                for y in 0..height {
                    for x in 0..width {
                        let lit = (x / 8 + y / 8) % 2 == 0;
                        let v = if lit { 0.16 } else { 0.02 };
                        texels.push([v, v, v, HEADROOM]);
                    }
                }
            }
            SourcePattern::Scanlines => {
                for y in 0..height {
                    let v = if y % 2 == 0 { 0.14 } else { 0.04 };
                    for _x in 0..width {
                        texels.push([v * 0.4, v, v * 0.6, HEADROOM]);
                    }
                }
            }
            SourcePattern::NoiseField => {
                let mut noise = FastNoiseLite::with_seed(7);
                noise.set_noise_type(Some(NoiseType::OpenSimplex2));
                for y in 0..height {
                    for x in 0..width {
                        // get_noise_2d returns [-1, 1]; remap into the headroom.
                        let n = noise.get_noise_2d(x as f32 * 3.0, y as f32 * 3.0);
                        let v = (n * 0.5 + 0.5).clamp(0.0, 1.0) * 0.18;
                        texels.push([v, v * 0.5, 0.18 - v, HEADROOM]);
                    }
                }
            }
        }
        Texture::from_texels(width, height, texels)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_four_patterns() {
        assert_eq!(SourcePattern::ALL.len(), 4);
    }

    #[test]
    fn all_names_are_nonempty() {
        for p in SourcePattern::ALL {
            assert!(!p.name().is_empty(), "{p:?} has empty name");
        }
    }

    #[test]
    fn all_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in SourcePattern::ALL {
            assert!(seen.insert(p.name()), "duplicate pattern name: {}", p.name());
        }
    }

    #[test]
    fn fill_produces_the_requested_dimensions() {
        for p in SourcePattern::ALL {
            let t = p.fill(31, 17);
            assert_eq!((t.width(), t.height()), (31, 17), "{p:?}");
        }
    }

    #[test]
    fn every_pattern_leaves_headroom_for_the_brighten_pass() {
        for p in SourcePattern::ALL {
            let t = p.fill(32, 32);
            for texel in t.texels() {
                for (i, c) in texel.iter().enumerate() {
                    assert!(
                        (0.0..=HEADROOM + 1e-6).contains(c),
                        "{p:?} channel {i} out of headroom: {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn checkerboard_alternates_between_cells() {
        let t = SourcePattern::Checkerboard.fill(32, 32);
        // Neighbouring 8-px cells differ; cells on the same diagonal match.
        assert_ne!(t.texel(4, 4), t.texel(12, 4));
        assert_eq!(t.texel(4, 4), t.texel(12, 12));
    }

    #[test]
    fn scanlines_alternate_between_rows() {
        let t = SourcePattern::Scanlines.fill(8, 8);
        assert_ne!(t.texel(0, 0), t.texel(0, 1));
        assert_eq!(t.texel(0, 0), t.texel(0, 2));
    }

    #[test]
    fn noise_field_is_deterministic() {
        let a = SourcePattern::NoiseField.fill(16, 16);
        let b = SourcePattern::NoiseField.fill(16, 16);
        assert_eq!(a, b);
    }
}
