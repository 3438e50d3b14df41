//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic geometry, one mesh per vertex type
//! - keep paint order (insertion order) as a list of index runs
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod mesh;

pub mod shapes;

pub use cmd::{DrawCmd, IndexRange, TextureId};
pub use list::DrawList;
pub use mesh::Mesh;
pub use shapes::{DrawRect, RectPart};
