use crate::kernel::LineVertex;
use crate::render::RenderCtx;
use crate::scene::{IndexRange, Mesh};

use super::common::{
    constants_bind_group_layout, shape_pipeline, shape_shader, ConstantsBinding, MeshBuffers,
};

/// Renderer for `DrawCmd::Lines`. Lines arrive already expanded to triangles.
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    constants: Option<ConstantsBinding>,

    mesh: MeshBuffers,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            constants: None,
            mesh: MeshBuffers::new("sheen line vbo", "sheen line ibo"),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh<LineVertex>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        if let Some(constants) = self.constants.as_ref() {
            constants.write(ctx);
        }
        self.mesh.upload(ctx, mesh);
    }

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
            label: Some("sheen line shader"),
            source: wgpu::ShaderSource::Wgsl(shape_shader!("shaders/line.wgsl").into()),
        });

        let bind_group_layout = constants_bind_group_layout(ctx.device, "sheen line bgl");
        let pipeline = shape_pipeline(
            ctx,
            "sheen line pipeline",
            &shader,
            "fs_main",
            LineVertex::layout(),
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
        self.constants = Some(ConstantsBinding::new(ctx.device, bgl, "sheen line constants"));
    }
}
