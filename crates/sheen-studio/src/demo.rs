//! The demo scene: one of each primitive, laid out relative to the output size.

use sheen_engine::coords::{Rect, Vec2};
use sheen_engine::kernel::PolygonVertex;
use sheen_engine::paint::Color;
use sheen_engine::raster::{AddressMode, ImageTexture, RasterError};
use sheen_engine::scene::{DrawList, DrawRect, RectPart, TextureId};

pub const BACKGROUND: Color = Color::new(0.08, 0.09, 0.11, 1.0);

const PANEL: Color = Color::new(0.16, 0.17, 0.21, 1.0);
const ACCENT: Color = Color::new(0.33, 0.56, 0.96, 1.0);
const VIOLET: Color = Color::new(0.62, 0.38, 0.92, 1.0);
const AMBER: Color = Color::new(0.98, 0.72, 0.26, 0.85);

/// Index of [`checkerboard`] in the texture table handed to the renderer.
pub const CHECKER: TextureId = TextureId(0);

pub fn build(width: f32, height: f32) -> Result<DrawList, RasterError> {
    let mut list = DrawList::new();
    let margin = (width.min(height) * 0.05).max(4.0);

    let panel = Rect::new(margin, margin, width - 2.0 * margin, height - 2.0 * margin);
    list.push_rect(&DrawRect::new(panel).with_radius(margin).with_color(PANEL));

    // Card row: one radius pattern per card.
    let gap = margin * 0.5;
    let card_w = (panel.size.x - 5.0 * gap) / 4.0;
    let card_h = panel.size.y * 0.4;
    let card = |i: usize| {
        Rect::new(panel.origin.x + gap + i as f32 * (card_w + gap), panel.origin.y + gap, card_w, card_h)
    };

    list.push_rect(&DrawRect::new(card(0)).with_radius(card_w * 0.12).with_color(ACCENT));
    list.push_rect(
        &DrawRect::new(card(1))
            .with_radii([RectPart::Top(card_w * 0.3), RectPart::Bottom(0.0)])
            .with_colors([RectPart::Top(ACCENT), RectPart::Bottom(VIOLET)]),
    );
    list.push_rect(
        &DrawRect::new(card(2))
            .with_radii([RectPart::TopLeft(card_h * 0.5), RectPart::BottomRight(card_h * 0.5)])
            .with_colors([RectPart::Left(VIOLET), RectPart::Right(ACCENT)]),
    );
    // Oversized radius: clamped to a pill.
    list.push_rect(&DrawRect::new(card(3)).with_radius(f32::MAX).with_color(AMBER));

    // Lower half: vertex-colored triangle, textured quad, strokes.
    let top = panel.origin.y + card_h + 2.0 * gap;
    let bottom = panel.origin.y + panel.size.y - gap;
    let third = (panel.size.x - 2.0 * gap) / 3.0;
    let left = panel.origin.x + gap;

    list.push_polygon(
        &[
            PolygonVertex::flat(Vec2::new(left + third * 0.5, top), Color::RED),
            PolygonVertex::flat(Vec2::new(left + third - gap, bottom), Color::GREEN),
            PolygonVertex::flat(Vec2::new(left + gap, bottom), Color::BLUE),
        ],
        &[0, 1, 2],
    )?;

    let x0 = left + third + gap;
    let x1 = left + 2.0 * third - gap;
    list.push_textured_polygon(
        CHECKER,
        &[
            PolygonVertex::new(Vec2::new(x0, top), Vec2::new(0.0, 0.0), Color::WHITE),
            PolygonVertex::new(Vec2::new(x1, top), Vec2::new(2.0, 0.0), ACCENT),
            PolygonVertex::new(Vec2::new(x1, bottom), Vec2::new(2.0, 2.0), Color::WHITE),
            PolygonVertex::new(Vec2::new(x0, bottom), Vec2::new(0.0, 2.0), VIOLET),
        ],
        &[0, 1, 2, 0, 2, 3],
    )?;

    let sx = left + 2.0 * third + gap;
    let ex = left + 3.0 * third - gap;
    for (i, w) in [1.0, 2.0, 4.0, 8.0].into_iter().enumerate() {
        let y = top + (bottom - top) * (i as f32 + 0.5) / 4.0;
        list.push_line(Vec2::new(sx, y + gap), Vec2::new(ex, y - gap), w, AMBER);
    }

    Ok(list)
}

/// 8×8 two-tone checkerboard, repeated.
pub fn checkerboard() -> ImageTexture {
    let image = image::RgbaImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            image::Rgba([235, 235, 235, 255])
        } else {
            image::Rgba([60, 60, 70, 255])
        }
    });
    ImageTexture::new(image).with_address_mode(AddressMode::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheen_engine::scene::DrawCmd;

    #[test]
    fn scene_records_every_primitive_kind() {
        let list = build(640.0, 400.0).unwrap();
        let kinds = |f: fn(&DrawCmd) -> bool| list.iter().filter(|c| f(c)).count();
        assert_eq!(kinds(|c| matches!(c, DrawCmd::RoundedRects(_))), 1);
        assert_eq!(kinds(|c| matches!(c, DrawCmd::Polygons(_))), 1);
        assert_eq!(kinds(|c| matches!(c, DrawCmd::TexturedPolygons { texture: CHECKER, .. })), 1);
        assert_eq!(kinds(|c| matches!(c, DrawCmd::Lines(_))), 1);
        assert_eq!(list.line_mesh().vertices().len(), 16);
    }
}
