use bytemuck::{Pod, Zeroable};

use crate::raster::RasterError;

/// Per-draw-call screen size in pixels.
///
/// This is the only value shared by every vertex and pixel invocation of a draw
/// call. It is passed explicitly to each stage and never mutated while a draw is
/// in flight. The layout doubles as the GPU uniform (padded to 16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawConstants {
    pub screen_width: u32,
    pub screen_height: u32,
    _pad: [u32; 2],
}

impl DrawConstants {
    /// Builds constants without validation.
    ///
    /// Zero dimensions are accepted here; the kernel divides by them unguarded.
    #[inline]
    pub const fn new(screen_width: u32, screen_height: u32) -> Self {
        Self { screen_width, screen_height, _pad: [0; 2] }
    }

    /// Builds constants, rejecting zero dimensions.
    #[inline]
    pub fn checked(screen_width: u32, screen_height: u32) -> Result<Self, RasterError> {
        let c = Self::new(screen_width, screen_height);
        c.validate()?;
        Ok(c)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.screen_width > 0 && self.screen_height > 0
    }

    pub fn validate(self) -> Result<(), RasterError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RasterError::InvalidDrawConstants {
                width: self.screen_width,
                height: self.screen_height,
            })
        }
    }

    #[inline]
    pub fn width_f32(self) -> f32 {
        self.screen_width as f32
    }

    #[inline]
    pub fn height_f32(self) -> f32 {
        self.screen_height as f32
    }
}
