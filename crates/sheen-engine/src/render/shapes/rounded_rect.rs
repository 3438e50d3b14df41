use crate::kernel::RoundedRectVertex;
use crate::render::RenderCtx;
use crate::scene::{IndexRange, Mesh};

use super::common::{
    constants_bind_group_layout, shape_pipeline, shape_shader, ConstantsBinding, MeshBuffers,
};

/// Renderer for `DrawCmd::RoundedRects`.
///
/// The fragment shader evaluates the rounded-rect distance field per pixel and
/// derives the anti-aliasing band from `fwidth`. `inner_radius` is uploaded but
/// not evaluated.
pub struct RoundedRectRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    constants: Option<ConstantsBinding>,

    mesh: MeshBuffers,
}

impl Default for RoundedRectRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            constants: None,
            mesh: MeshBuffers::new("sheen rounded_rect vbo", "sheen rounded_rect ibo"),
        }
    }
}

impl RoundedRectRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates GPU resources on first use and uploads this frame's geometry
    /// and constants. Call before [`draw`](Self::draw).
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh<RoundedRectVertex>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        if let Some(constants) = self.constants.as_ref() {
            constants.write(ctx);
        }
        self.mesh.upload(ctx, mesh);
    }

    /// Records one indexed draw of `range` from the prepared mesh.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: IndexRange) {
        let Some(pipeline)  = self.pipeline.as_ref()  else { return; };
        let Some(constants) = self.constants.as_ref() else { return; };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, constants.bind_group(), &[]);
        self.mesh.draw(rpass, range);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sheen rounded_rect shader"),
            source: wgpu::ShaderSource::Wgsl(shape_shader!("shaders/rounded_rect.wgsl").into()),
        });

        let bind_group_layout = constants_bind_group_layout(ctx.device, "sheen rounded_rect bgl");
        let pipeline = shape_pipeline(
            ctx,
            "sheen rounded_rect pipeline",
            &shader,
            "fs_main",
            RoundedRectVertex::layout(),
            &[&bind_group_layout],
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.constants = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.constants.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        self.constants = Some(ConstantsBinding::new(ctx.device, bgl, "sheen rounded_rect constants"));
    }
}
