use rayon::prelude::*;

use crate::coords::{DrawConstants, Vec2};
use crate::kernel::{from_clip, Interpolate, Program};
use crate::paint::Color;

use super::config::RasterConfig;
use super::framebuffer::{blend_over, Framebuffer};
use super::triangle::TriangleSetup;
use super::RasterError;

/// Drives a [`Program`] over indexed triangle lists into a [`Framebuffer`].
///
/// Plays the role of the fixed-function GPU stages: vertex invocation,
/// viewport transform, triangle setup, barycentric interpolation, and
/// alpha-over blending. Triangles are blended in submission order.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    constants: DrawConstants,
    config: RasterConfig,
}

impl Rasterizer {
    /// Fails on zero screen dimensions.
    pub fn new(constants: DrawConstants, config: RasterConfig) -> Result<Self, RasterError> {
        constants.validate()?;
        Ok(Self { constants, config })
    }

    #[inline]
    pub fn constants(&self) -> DrawConstants {
        self.constants
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Rasterizes `indices` (three per triangle) into `target`.
    ///
    /// Every index is checked against `vertices` before anything is drawn, so a
    /// failed call leaves `target` untouched. A trailing partial triangle is
    /// ignored.
    pub fn draw<P: Program>(
        &self,
        target: &mut Framebuffer,
        program: &P,
        vertices: &[P::Vertex],
        indices: &[u32],
    ) -> Result<(), RasterError> {
        self.check_target(target)?;
        check_indices(indices, vertices.len())?;

        warn_trailing("draw", indices);
        if indices.len() < 3 {
            return Ok(());
        }

        let outputs: Vec<(Vec2, P::Varying)> = vertices
            .iter()
            .map(|v| {
                let out = program.vertex(v, &self.constants);
                (from_clip(out.clip, &self.constants), out.varying)
            })
            .collect();

        let mut skipped = 0usize;
        for tri in indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if !self.draw_triangle(target, program, [&outputs[a], &outputs[b], &outputs[c]]) {
                skipped += 1;
            }
        }
        log::debug!(
            "draw: {} triangle(s) from {} vertices, {skipped} culled as degenerate or off-screen",
            indices.len() / 3,
            vertices.len()
        );
        Ok(())
    }

    /// Shades `indices` without touching a framebuffer.
    ///
    /// Returns one `(x, y, color)` per covered sample, in triangle order. Used
    /// for inspection and tests; `draw` is the blending path.
    pub fn shade<P: Program>(
        &self,
        program: &P,
        vertices: &[P::Vertex],
        indices: &[u32],
    ) -> Result<Vec<(u32, u32, Color)>, RasterError> {
        self.constants.validate()?;
        check_indices(indices, vertices.len())?;
        warn_trailing("shade", indices);

        let offset = self.config.pixel_center.offset();
        let (w, h) = (self.constants.screen_width, self.constants.screen_height);
        let mut fragments = Vec::new();

        for tri in indices.chunks_exact(3) {
            let out: [_; 3] = core::array::from_fn(|i| {
                let o = program.vertex(&vertices[tri[i] as usize], &self.constants);
                (from_clip(o.clip, &self.constants), o.varying)
            });
            let Some(setup) = TriangleSetup::new(out[0].0, out[1].0, out[2].0) else {
                continue;
            };
            let Some(bounds) = setup.bounds(offset, w, h) else {
                continue;
            };
            for y in bounds.y0..=bounds.y1 {
                for x in bounds.x0..=bounds.x1 {
                    let frag = Vec2::new(x as f32 + offset, y as f32 + offset);
                    if let Some(weights) = setup.weights(frag) {
                        let varying = P::Varying::interpolate(&out[0].1, &out[1].1, &out[2].1, weights);
                        fragments.push((x, y, program.fragment(frag, &varying)));
                    }
                }
            }
        }
        Ok(fragments)
    }

    fn check_target(&self, target: &Framebuffer) -> Result<(), RasterError> {
        self.constants.validate()?;
        if target.width() != self.constants.screen_width || target.height() != self.constants.screen_height {
            return Err(RasterError::FramebufferSizeMismatch {
                width: self.constants.screen_width,
                height: self.constants.screen_height,
                actual_width: target.width(),
                actual_height: target.height(),
            });
        }
        Ok(())
    }

    /// Returns `false` when the triangle produced no samples.
    fn draw_triangle<P: Program>(
        &self,
        target: &mut Framebuffer,
        program: &P,
        v: [&(Vec2, P::Varying); 3],
    ) -> bool {
        let Some(setup) = TriangleSetup::new(v[0].0, v[1].0, v[2].0) else {
            return false;
        };
        let offset = self.config.pixel_center.offset();
        let Some(bounds) = setup.bounds(offset, target.width(), target.height()) else {
            return false;
        };

        let width = target.width() as usize;
        let (x0, x1) = (bounds.x0 as usize, bounds.x1 as usize);
        let varyings = [&v[0].1, &v[1].1, &v[2].1];

        let shade_row = |(i, row): (usize, &mut [Color])| {
            let y = bounds.y0 as f32 + i as f32 + offset;
            for (x, px) in row.iter_mut().enumerate().take(x1 + 1).skip(x0) {
                let frag = Vec2::new(x as f32 + offset, y);
                if let Some(weights) = setup.weights(frag) {
                    let varying = P::Varying::interpolate(varyings[0], varyings[1], varyings[2], weights);
                    *px = blend_over(*px, program.fragment(frag, &varying));
                }
            }
        };

        let rows = target.rows_mut(bounds.y0, bounds.y1 + 1);
        if self.config.parallel {
            rows.par_chunks_mut(width).enumerate().for_each(shade_row);
        } else {
            rows.chunks_mut(width).enumerate().for_each(shade_row);
        }
        true
    }
}

fn check_indices(indices: &[u32], vertex_count: usize) -> Result<(), RasterError> {
    match indices.iter().find(|&&i| i as usize >= vertex_count) {
        Some(&index) => Err(RasterError::IndexOutOfRange { index, vertex_count }),
        None => Ok(()),
    }
}

fn warn_trailing(op: &str, indices: &[u32]) {
    let rem = indices.len() % 3;
    if rem != 0 {
        log::warn!("{op}: ignoring {rem} trailing index(es) of {}", indices.len());
    }
}
