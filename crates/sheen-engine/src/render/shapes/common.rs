//! Shared GPU types and utilities used by all shape renderers.

use std::num::NonZeroU64;

use bytemuck::Pod;

use crate::coords::DrawConstants;
use crate::kernel::{LineVertex, PolygonVertex, RoundedRectVertex};
use crate::render::RenderCtx;
use crate::scene::{IndexRange, Mesh};

/// WGSL prepended to every shape shader (constants uniform, `to_clip`, `coverage`).
macro_rules! shape_shader {
    ($file:literal) => {
        concat!(include_str!("shaders/common.wgsl"), "\n", include_str!($file))
    };
}
pub(super) use shape_shader;

// ── blend ─────────────────────────────────────────────────────────────────

/// Straight-alpha "over": color `SrcAlpha, OneMinusSrcAlpha`, alpha
/// `One, OneMinusSrcAlpha`. Matches `raster::blend_over`.
pub(super) fn alpha_over_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── constants uniform ─────────────────────────────────────────────────────

/// `DrawConstants` is 16 bytes by construction.
pub(super) fn constants_min_binding_size() -> NonZeroU64 {
    NonZeroU64::new(std::mem::size_of::<DrawConstants>() as u64).unwrap_or(NonZeroU64::MIN)
}

/// Group 0 layout: the constants uniform, visible to the vertex stage.
pub(super) fn constants_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(constants_min_binding_size()),
            },
            count: None,
        }],
    })
}

/// Constants uniform buffer plus its bind group.
pub(super) struct ConstantsBinding {
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ConstantsBinding {
    pub(super) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<DrawConstants>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });
        Self { ubo, bind_group }
    }

    pub(super) fn write(&self, ctx: &RenderCtx<'_>) {
        if !ctx.constants.is_valid() {
            log::warn!(
                "draw constants have a zero dimension ({}x{}); output is undefined",
                ctx.constants.screen_width,
                ctx.constants.screen_height
            );
        }
        ctx.queue.write_buffer(&self.ubo, 0, bytemuck::bytes_of(&ctx.constants));
    }

    #[inline]
    pub(super) fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

// ── pipeline ──────────────────────────────────────────────────────────────

/// Triangle-list pipeline with alpha-over blending, no culling, no depth.
pub(super) fn shape_pipeline(
    ctx: &RenderCtx<'_>,
    label: &str,
    shader: &wgpu::ShaderModule,
    fs_entry: &str,
    vertex_layout: wgpu::VertexBufferLayout<'_>,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        immediate_size: 0,
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[vertex_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(alpha_over_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

// ── dynamic buffers ───────────────────────────────────────────────────────

/// GPU buffer that grows (power of two) to fit each upload.
pub(super) struct DynamicBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: u64,
}

impl DynamicBuffer {
    const MIN_CAPACITY: u64 = 1024;

    pub(super) fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self {
            label,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            buffer: None,
            capacity: 0,
        }
    }

    /// Writes `bytes` at offset 0, reallocating first if they do not fit.
    pub(super) fn upload(&mut self, ctx: &RenderCtx<'_>, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let required = bytes.len() as u64;
        if self.buffer.is_none() || required > self.capacity {
            let capacity = required.next_power_of_two().max(Self::MIN_CAPACITY);
            log::debug!("{}: growing {} -> {} bytes", self.label, self.capacity, capacity);
            self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: capacity,
                usage: self.usage,
                mapped_at_creation: false,
            }));
            self.capacity = capacity;
        }
        if let Some(buffer) = self.buffer.as_ref() {
            ctx.queue.write_buffer(buffer, 0, bytes);
        }
    }

    #[inline]
    pub(super) fn get(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }
}

/// Vertex + index buffers mirroring one scene [`Mesh`].
pub(super) struct MeshBuffers {
    vbo: DynamicBuffer,
    ibo: DynamicBuffer,
    index_count: u32,
}

impl MeshBuffers {
    pub(super) fn new(vbo_label: &'static str, ibo_label: &'static str) -> Self {
        Self {
            vbo: DynamicBuffer::new(vbo_label, wgpu::BufferUsages::VERTEX),
            ibo: DynamicBuffer::new(ibo_label, wgpu::BufferUsages::INDEX),
            index_count: 0,
        }
    }

    pub(super) fn upload<V: Pod>(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh<V>) {
        self.vbo.upload(ctx, bytemuck::cast_slice(mesh.vertices()));
        self.ibo.upload(ctx, bytemuck::cast_slice(mesh.indices()));
        self.index_count = mesh.indices().len() as u32;
    }

    /// Binds both buffers and draws `range`. Ranges past the last upload are
    /// skipped.
    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: IndexRange) {
        if range.is_empty() || range.end() > self.index_count {
            return;
        }
        let Some(vbo) = self.vbo.get() else { return; };
        let Some(ibo) = self.ibo.get() else { return; };

        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(range.start..range.end(), 0, 0..1);
    }
}

// ── vertex layouts ────────────────────────────────────────────────────────

impl RoundedRectVertex {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // rect_size
        2 => Float32x2, // rect_center
        3 => Float32x4, // outer_radius
        4 => Float32x4, // inner_radius
        5 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RoundedRectVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl PolygonVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PolygonVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(layout: &wgpu::VertexBufferLayout<'_>) -> Vec<u64> {
        layout.attributes.iter().map(|a| a.offset).collect()
    }

    #[test]
    fn blend_matches_wgpu_alpha_blending() {
        assert_eq!(alpha_over_blend(), wgpu::BlendState::ALPHA_BLENDING);
    }

    #[test]
    fn constants_binding_size_is_one_vec4() {
        assert_eq!(constants_min_binding_size().get(), 16);
    }

    #[test]
    fn rounded_rect_layout_matches_struct() {
        let layout = RoundedRectVertex::layout();
        assert_eq!(layout.array_stride, 72);
        assert_eq!(offsets(&layout), vec![0, 8, 16, 24, 40, 56]);
    }

    #[test]
    fn polygon_and_line_layouts_match_structs() {
        let poly = PolygonVertex::layout();
        assert_eq!(poly.array_stride, 32);
        assert_eq!(offsets(&poly), vec![0, 8, 16]);

        let line = LineVertex::layout();
        assert_eq!(line.array_stride, 24);
        assert_eq!(offsets(&line), vec![0, 8]);
    }

    #[test]
    fn shader_sources_share_the_common_prelude() {
        for src in [
            shape_shader!("shaders/rounded_rect.wgsl"),
            shape_shader!("shaders/polygon.wgsl"),
            shape_shader!("shaders/line.wgsl"),
        ] {
            assert!(src.starts_with("// Shared by every shape shader."));
            assert!(src.contains("fn vs_main"));
        }
    }
}
