use crate::coords::DrawConstants;
use crate::kernel::{FlatPolygonProgram, LineProgram, RoundedRectProgram, Texture, TexturedPolygonProgram};
use crate::scene::{DrawCmd, DrawList, TextureId};

use super::{Framebuffer, RasterConfig, RasterError, Rasterizer};

/// Replays a [`DrawList`] through the software [`Rasterizer`].
///
/// Textures are looked up by [`TextureId`] as an index into the slice passed
/// to [`SoftwareRenderer::render`].
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    rasterizer: Rasterizer,
}

impl SoftwareRenderer {
    pub fn new(constants: DrawConstants, config: RasterConfig) -> Result<Self, RasterError> {
        Ok(Self { rasterizer: Rasterizer::new(constants, config)? })
    }

    #[inline]
    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Allocates a target matching the draw constants and renders into it.
    pub fn render_new(&self, list: &DrawList, textures: &[&dyn Texture]) -> Result<Framebuffer, RasterError> {
        let c = self.rasterizer.constants();
        let mut target = Framebuffer::new(c.screen_width, c.screen_height);
        self.render(list, textures, &mut target)?;
        Ok(target)
    }

    /// Clears `target` to the configured color and draws every command in order.
    ///
    /// Texture references are resolved before the target is touched.
    pub fn render(
        &self,
        list: &DrawList,
        textures: &[&dyn Texture],
        target: &mut Framebuffer,
    ) -> Result<(), RasterError> {
        for cmd in list {
            if let DrawCmd::TexturedPolygons { texture, .. } = cmd {
                resolve(textures, *texture)?;
            }
        }

        let config = self.rasterizer.config();
        target.clear(config.clear);

        let rects = RoundedRectProgram::new(config.derivative);
        let r = &self.rasterizer;

        for cmd in list {
            match *cmd {
                DrawCmd::RoundedRects(range) => {
                    let mesh = list.rect_mesh();
                    r.draw(target, &rects, mesh.vertices(), mesh.slice(range))?;
                }
                DrawCmd::Polygons(range) => {
                    let mesh = list.polygon_mesh();
                    r.draw(target, &FlatPolygonProgram, mesh.vertices(), mesh.slice(range))?;
                }
                DrawCmd::TexturedPolygons { texture, range } => {
                    let program = TexturedPolygonProgram::new(resolve(textures, texture)?);
                    let mesh = list.polygon_mesh();
                    r.draw(target, &program, mesh.vertices(), mesh.slice(range))?;
                }
                DrawCmd::Lines(range) => {
                    let mesh = list.line_mesh();
                    r.draw(target, &LineProgram, mesh.vertices(), mesh.slice(range))?;
                }
            }
        }

        log::debug!("software render: {} command(s)", list.commands().len());
        Ok(())
    }
}

fn resolve<'t>(textures: &[&'t dyn Texture], id: TextureId) -> Result<&'t dyn Texture, RasterError> {
    textures.get(id.0 as usize).copied().ok_or(RasterError::UnknownTexture(id))
}
