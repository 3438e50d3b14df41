use crate::kernel::PolygonVertex;
use crate::render::RenderCtx;
use crate::scene::{IndexRange, Mesh};

use super::common::{
    constants_bind_group_layout, shape_pipeline, shape_shader, ConstantsBinding, MeshBuffers,
};

/// Host texture bound for the textured polygon path (group 1: view + sampler).
///
/// Create with [`TexturedPolygonRenderer::bind_texture`]; the scene refers to
/// it by position (`TextureId(i)` is the `i`-th binding handed to the renderer).
pub struct TextureBinding {
    bind_group: wgpu::BindGroup,
}

/// Renderer for `DrawCmd::TexturedPolygons`: vertex color × sampled texel.
///
/// Shares the polygon mesh with [`PolygonRenderer`](super::PolygonRenderer);
/// upload cost is paid once per renderer.
pub struct TexturedPolygonRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    texture_layout: Option<wgpu::BindGroupLayout>,
    constants: Option<ConstantsBinding>,

    mesh: MeshBuffers,
}

impl Default for TexturedPolygonRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            texture_layout: None,
            constants: None,
            mesh: MeshBuffers::new("sheen textured_polygon vbo", "sheen textured_polygon ibo"),
        }
    }
}

impl TexturedPolygonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the group 1 bind group for a host texture.
    ///
    /// The view must be a filterable float 2D texture; the sampler decides
    /// addressing and filtering.
    pub fn bind_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> TextureBinding {
        let layout = self.texture_layout(ctx.device);
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sheen textured_polygon texture bind group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        TextureBinding { bind_group }
    }

    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh<PolygonVertex>) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);

        if let Some(constants) = self.constants.as_ref() {
            constants.write(ctx);
        }
        self.mesh.upload(ctx, mesh);
    }

    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, texture: &TextureBinding, range: IndexRange) {
        let Some(pipeline)  = self.pipeline.as_ref()  else { return; };
        let Some(constants) = self.constants.as_ref() else { return; };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, constants.bind_group(), &[]);
        rpass.set_bind_group(1, &texture.bind_group, &[]);
        self.mesh.draw(rpass, range);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn texture_layout(&mut self, device: &wgpu::Device) -> &wgpu::BindGroupLayout {
        self.texture_layout.get_or_insert_with(|| {
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sheen textured_polygon texture bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            })
        })
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sheen textured_polygon shader"),
            source: wgpu::ShaderSource::Wgsl(shape_shader!("shaders/polygon.wgsl").into()),
        });

        let bind_group_layout = constants_bind_group_layout(ctx.device, "sheen textured_polygon bgl");
        self.texture_layout(ctx.device);
        let Some(texture_layout) = self.texture_layout.as_ref() else { return; };
        let pipeline = shape_pipeline(
            ctx,
            "sheen textured_polygon pipeline",
            &shader,
            "fs_textured",
            PolygonVertex::layout(),
            &[&bind_group_layout, texture_layout],
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
        self.constants = Some(ConstantsBinding::new(ctx.device, bgl, "sheen textured_polygon constants"));
    }
}
