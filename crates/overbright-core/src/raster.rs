use glam::Vec2;
use rayon::prelude::*;

use crate::brighten;
use crate::texture::Texture;
use crate::DrawContext;

/// Software stand-in for the rasterizer's fragment dispatch: every pixel of
/// the target is one independent invocation of the brighten function, run
/// across a worker pool. Invocations share the read-only context and
/// nothing else, so the dispatch order is unobservable.
pub fn render(ctx: &DrawContext, width: usize, height: usize) -> Texture {
    let texels: Vec<[f32; 4]> = (0..width * height)
        .into_par_iter()
        .map(|i| {
            let (x, y) = (i % width, i / width);
            brighten::shade(ctx, texel_center(x, y, width, height)).to_array()
        })
        .collect();
    Texture::from_texels(width, height, texels)
}

/// Normalized coordinate of a pixel centre, the value the hardware
/// interpolator would hand the fragment stage for a full-screen quad.
pub fn texel_center(x: usize, y: usize, width: usize, height: usize) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32,
        (y as f32 + 0.5) / height as f32,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{Sampler, Texture};
    use crate::DrawUniforms;

    fn gradient(width: usize, height: usize) -> Texture {
        let mut texels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let t = (x + y * width) as f32 / (width * height) as f32;
                texels.push([t, t * 0.5, 1.0 - t, 0.2]);
            }
        }
        Texture::from_texels(width, height, texels)
    }

    fn ctx(screen: &Texture) -> DrawContext<'_> {
        DrawContext::new(screen, Sampler::default(), DrawUniforms { time: 0.0 })
    }

    #[test]
    fn output_has_the_requested_dimensions() {
        let src = gradient(5, 3);
        let out = render(&ctx(&src), 7, 4);
        assert_eq!(out.width(), 7);
        assert_eq!(out.height(), 4);
    }

    #[test]
    fn every_pixel_matches_the_fragment_function() {
        let src = gradient(4, 3);
        let c = ctx(&src);
        let out = render(&c, 4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let expected = brighten::shade(&c, texel_center(x, y, 4, 3));
                assert_eq!(out.texel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn one_to_one_render_is_the_source_times_five() {
        let src = gradient(2, 2);
        let out = render(&ctx(&src), 2, 2);
        for y in 0..2 {
            for x in 0..2 {
                let s = src.texel(x, y);
                let o = out.texel(x, y);
                for i in 0..4 {
                    assert!(
                        (o[i] - s[i] * 5.0).abs() < 1e-6,
                        "pixel ({x}, {y}) channel {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn parallel_dispatch_is_deterministic() {
        let src = gradient(64, 48);
        let c = ctx(&src);
        assert_eq!(render(&c, 64, 48), render(&c, 64, 48));
    }

    #[test]
    fn frame_output_ignores_the_time_uniform() {
        let src = gradient(8, 8);
        let early = render(
            &DrawContext::new(&src, Sampler::default(), DrawUniforms { time: 0.0 }),
            8,
            8,
        );
        let late = render(
            &DrawContext::new(&src, Sampler::default(), DrawUniforms { time: 3600.0 }),
            8,
            8,
        );
        assert_eq!(early, late);
    }

    #[test]
    fn texel_centers_stay_inside_unit_square() {
        for (x, y) in [(0, 0), (7, 0), (0, 5), (7, 5)] {
            let uv = texel_center(x, y, 8, 6);
            assert!(uv.x > 0.0 && uv.x < 1.0, "{uv:?}");
            assert!(uv.y > 0.0 && uv.y < 1.0, "{uv:?}");
        }
    }
}
