use glam::{Vec2, Vec4};

use crate::DrawContext;

/// Scale applied to every channel of the sampled texel, alpha included.
pub const BRIGHTNESS: f32 = 5.0;

/// The brighten fragment function: one texture lookup, one multiply.
///
/// No branching and no clamping. Values above 1.0 pass through untouched
/// and are left to whatever the output target does downstream; NaNs in the
/// source texel propagate per IEEE-754. Reads nothing but the context,
/// writes nothing.
pub fn shade(ctx: &DrawContext, uv: Vec2) -> Vec4 {
    ctx.sample(uv) * BRIGHTNESS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{Sampler, Texture};
    use crate::DrawUniforms;

    fn ctx(screen: &Texture, time: f32) -> DrawContext<'_> {
        DrawContext::new(screen, Sampler::default(), DrawUniforms { time })
    }

    // --- Scaling property ------------------------------------------------------

    #[test]
    fn output_is_sample_times_five_per_channel() {
        let t = Texture::from_texels(
            2,
            2,
            vec![
                [0.1, 0.2, 0.3, 0.4],
                [0.05, 0.0, 0.15, 1.0],
                [0.9, 0.8, 0.7, 0.6],
                [0.01, 0.02, 0.03, 0.04],
            ],
        );
        let c = ctx(&t, 0.0);
        for uv in [
            Vec2::new(0.25, 0.25),
            Vec2::new(0.75, 0.25),
            Vec2::new(0.25, 0.75),
            Vec2::new(0.75, 0.75),
        ] {
            let sampled = c.sample(uv);
            let out = shade(&c, uv);
            for i in 0..4 {
                assert!(
                    (out[i] - sampled[i] * 5.0).abs() < 1e-6,
                    "channel {i} at {uv:?}: {} vs {}",
                    out[i],
                    sampled[i] * 5.0
                );
            }
        }
    }

    #[test]
    fn boundary_sample_scales_to_expected_values() {
        // Texel (0.1, 0.2, 0.3, 1.0) at the centre must come out as
        // (0.5, 1.0, 1.5, 5.0).
        let t = Texture::solid(1, 1, [0.1, 0.2, 0.3, 1.0]);
        let out = shade(&ctx(&t, 0.0), Vec2::new(0.5, 0.5));
        let expected = Vec4::new(0.5, 1.0, 1.5, 5.0);
        for i in 0..4 {
            assert!(
                (out[i] - expected[i]).abs() < 1e-6,
                "channel {i}: got {}, expected {}",
                out[i],
                expected[i]
            );
        }
    }

    #[test]
    fn zero_texel_stays_zero() {
        let t = Texture::solid(4, 4, [0.0; 4]);
        assert_eq!(shade(&ctx(&t, 0.0), Vec2::new(0.5, 0.5)), Vec4::ZERO);
    }

    #[test]
    fn saturated_texel_is_not_clamped() {
        let t = Texture::solid(2, 2, [1.0; 4]);
        let out = shade(&ctx(&t, 0.0), Vec2::new(0.5, 0.5));
        for i in 0..4 {
            assert!((out[i] - 5.0).abs() < 1e-6, "channel {i}: {}", out[i]);
        }
    }

    #[test]
    fn alpha_scales_like_the_color_channels() {
        let t = Texture::solid(1, 1, [0.0, 0.0, 0.0, 0.2]);
        let out = shade(&ctx(&t, 0.0), Vec2::new(0.5, 0.5));
        assert!((out.w - 1.0).abs() < 1e-6, "alpha: {}", out.w);
    }

    // --- Determinism and time-invariance ---------------------------------------

    #[test]
    fn repeated_invocations_are_identical() {
        let t = Texture::solid(3, 3, [0.123, 0.456, 0.789, 0.5]);
        let c = ctx(&t, 1.0);
        let uv = Vec2::new(0.6, 0.4);
        assert_eq!(shade(&c, uv), shade(&c, uv));
    }

    #[test]
    fn time_has_no_effect_on_the_output() {
        let t = Texture::solid(2, 2, [0.1, 0.2, 0.3, 0.4]);
        let uv = Vec2::new(0.3, 0.7);
        let at_zero = shade(&ctx(&t, 0.0), uv);
        let at_large = shade(&ctx(&t, 86_400.0), uv);
        assert_eq!(at_zero, at_large);
    }

    // --- Abnormal inputs -------------------------------------------------------

    #[test]
    fn nan_source_texels_propagate() {
        let t = Texture::solid(1, 1, [f32::NAN, 0.1, 0.2, 1.0]);
        let out = shade(&ctx(&t, 0.0), Vec2::new(0.5, 0.5));
        assert!(out.x.is_nan());
        assert!((out.y - 0.5).abs() < 1e-6);
    }
}
