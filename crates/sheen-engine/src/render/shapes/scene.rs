use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::{LineRenderer, PolygonRenderer, RoundedRectRenderer, TextureBinding, TexturedPolygonRenderer};

/// Replays a [`DrawList`] in order inside a single render pass.
///
/// Owns one renderer per primitive kind and switches pipelines as the
/// command kind changes. Textured commands resolve `TextureId(i)` against the
/// `i`-th binding passed to [`render`](Self::render); unknown ids are skipped
/// with a one-time warning.
#[derive(Default)]
pub struct SceneRenderer {
    pub rects: RoundedRectRenderer,
    pub polygons: PolygonRenderer,
    pub textured: TexturedPolygonRenderer,
    pub lines: LineRenderer,

    /// `Some` clears the target before drawing; `None` loads it.
    pub clear: Option<Color>,

    warned_missing_texture: bool,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clear(mut self, color: Color) -> Self {
        self.clear = Some(color);
        self
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
        textures: &[TextureBinding],
    ) {
        if draw_list.is_empty() && self.clear.is_none() {
            return;
        }

        self.prepare(ctx, draw_list);

        let load = match self.clear {
            Some(c) => wgpu::LoadOp::Clear(wgpu::Color {
                r: c.r as f64,
                g: c.g as f64,
                b: c.b as f64,
                a: c.a as f64,
            }),
            None => wgpu::LoadOp::Load,
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sheen scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        for cmd in draw_list {
            match *cmd {
                DrawCmd::RoundedRects(range) => self.rects.draw(&mut rpass, range),
                DrawCmd::Polygons(range) => self.polygons.draw(&mut rpass, range),
                DrawCmd::TexturedPolygons { texture, range } => {
                    match textures.get(texture.0 as usize) {
                        Some(binding) => self.textured.draw(&mut rpass, binding, range),
                        None => {
                            if !self.warned_missing_texture {
                                log::warn!("SceneRenderer: no binding for {texture:?}; skipping its draws");
                                self.warned_missing_texture = true;
                            }
                        }
                    }
                }
                DrawCmd::Lines(range) => self.lines.draw(&mut rpass, range),
            }
        }
    }

    /// Uploads only the meshes some command actually reads.
    fn prepare(&mut self, ctx: &RenderCtx<'_>, draw_list: &DrawList) {
        let (mut rects, mut flat, mut textured, mut lines) = (false, false, false, false);
        for cmd in draw_list {
            match cmd {
                DrawCmd::RoundedRects(_) => rects = true,
                DrawCmd::Polygons(_) => flat = true,
                DrawCmd::TexturedPolygons { .. } => textured = true,
                DrawCmd::Lines(_) => lines = true,
            }
        }

        if rects {
            self.rects.prepare(ctx, draw_list.rect_mesh());
        }
        if flat {
            self.polygons.prepare(ctx, draw_list.polygon_mesh());
        }
        if textured {
            self.textured.prepare(ctx, draw_list.polygon_mesh());
        }
        if lines {
            self.lines.prepare(ctx, draw_list.line_mesh());
        }
    }
}
