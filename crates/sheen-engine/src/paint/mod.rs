//! Color model shared by vertex records, fragments and render targets.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
