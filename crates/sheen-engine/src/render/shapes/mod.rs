//! Shape renderers.

mod common;

pub mod line;
pub mod polygon;
pub mod rounded_rect;
pub mod scene;
pub mod textured_polygon;

pub use line::LineRenderer;
pub use polygon::PolygonRenderer;
pub use rounded_rect::RoundedRectRenderer;
pub use scene::SceneRenderer;
pub use textured_polygon::{TextureBinding, TexturedPolygonRenderer};
