pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rounded_rect;

pub use line::line_quad;
pub use rounded_rect::{DrawRect, RectPart};
