use crate::coords::Vec2;
use crate::kernel::Texture;
use crate::paint::Color;

/// How texel coordinates outside `[0, size)` are folded back in.
/// Mirrors `wgpu::AddressMode`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AddressMode {
    #[default]
    ClampToEdge,
    Repeat,
    MirrorRepeat,
}

impl AddressMode {
    /// Resolves an integer texel coordinate against an axis of `size` texels.
    #[inline]
    fn resolve(self, i: i64, size: u32) -> u32 {
        let n = size as i64;
        let r = match self {
            AddressMode::ClampToEdge => i.clamp(0, n - 1),
            AddressMode::Repeat => i.rem_euclid(n),
            AddressMode::MirrorRepeat => {
                let period = i.rem_euclid(2 * n);
                if period < n { period } else { 2 * n - 1 - period }
            }
        };
        r as u32
    }
}

/// Texel reconstruction filter. Mirrors `wgpu::FilterMode`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FilterMode {
    #[default]
    Nearest,
    Linear,
}

/// Software texture over an RGBA8 image (straight alpha, values used as-is).
pub struct ImageTexture {
    image: image::RgbaImage,
    pub address_mode: AddressMode,
    pub filter: FilterMode,
}

impl ImageTexture {
    pub fn new(image: image::RgbaImage) -> Self {
        Self { image, address_mode: AddressMode::default(), filter: FilterMode::default() }
    }

    pub fn with_address_mode(mut self, mode: AddressMode) -> Self {
        self.address_mode = mode;
        self
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    #[inline]
    fn texel(&self, x: i64, y: i64) -> Color {
        let (w, h) = self.image.dimensions();
        let px = self.image.get_pixel(self.address_mode.resolve(x, w), self.address_mode.resolve(y, h));
        let [r, g, b, a] = px.0;
        Color::from_u8(r, g, b, a)
    }
}

impl Texture for ImageTexture {
    fn sample(&self, uv: Vec2) -> Color {
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return Color::TRANSPARENT;
        }

        // Texel centers sit at half-integer positions.
        let x = uv.x * w as f32 - 0.5;
        let y = uv.y * h as f32 - 0.5;

        match self.filter {
            FilterMode::Nearest => self.texel(x.round() as i64, y.round() as i64),
            FilterMode::Linear => {
                let x0 = x.floor();
                let y0 = y.floor();
                // Non-finite coordinates have no fractional part to blend.
                let tx = finite_or_zero(x - x0);
                let ty = finite_or_zero(y - y0);
                // Casts saturate; the neighbours must not step past i64::MAX.
                let (x0, y0) = (x0 as i64, y0 as i64);
                let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));

                let top = self.texel(x0, y0).lerp(self.texel(x1, y0), tx);
                let bottom = self.texel(x0, y1).lerp(self.texel(x1, y1), tx);
                top.lerp(bottom, ty)
            }
        }
    }
}

#[inline]
fn finite_or_zero(t: f32) -> f32 {
    if t.is_finite() { t } else { 0.0 }
}
