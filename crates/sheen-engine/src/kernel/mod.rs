//! Per-vertex and per-pixel functions.
//!
//! Everything in here is pure: no state survives an invocation and the only
//! shared input is the read-only [`DrawConstants`](crate::coords::DrawConstants)
//! passed to each vertex function.
//!
//! Rounded rectangles go through four stages per pixel:
//! radius selection (`radius`), distance (`sdf`), AA band from the screen-space
//! derivative (`derivative`, `aa`), and compositing over transparent (`aa`).
//! Polygons and lines skip straight to their color (`polygon`).

pub mod aa;
pub mod derivative;
pub mod normalize;
pub mod polygon;
pub mod program;
pub mod radius;
pub mod sdf;
pub mod texture;
pub mod vertex;

pub use derivative::{CentralDifference, Constant, Derivative, DerivativeMode, ForwardDifference};
pub use normalize::{from_clip, to_clip, ClipPosition};
pub use program::{
    FlatPolygonProgram, Interpolate, LineProgram, PolygonVarying, Program, RoundedRectProgram,
    RoundedRectVarying, TexturedPolygonProgram, VertexOutput,
};
pub use texture::Texture;
pub use vertex::{LineVertex, PolygonVertex, RoundedRectVertex};
