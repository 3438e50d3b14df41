use crate::coords::Vec2;

/// Estimates the screen-space derivative magnitude of a scalar field.
///
/// A hardware rasterizer gets this from neighboring lanes of a pixel quad. In
/// software the field is sampled at neighboring pixel centers instead. The
/// result is `|∂f/∂x| + |∂f/∂y|` over one pixel (the `fwidth` convention).
pub trait Derivative: Sync {
    fn fwidth<F>(&self, f: F, p: Vec2) -> f32
    where
        F: Fn(Vec2) -> f32;
}

/// Symmetric difference over `p ± 1` pixel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CentralDifference;

impl Derivative for CentralDifference {
    #[inline]
    fn fwidth<F>(&self, f: F, p: Vec2) -> f32
    where
        F: Fn(Vec2) -> f32,
    {
        let dx = f(p + Vec2::new(1.0, 0.0)) - f(p - Vec2::new(1.0, 0.0));
        let dy = f(p + Vec2::new(0.0, 1.0)) - f(p - Vec2::new(0.0, 1.0));
        0.5 * (dx.abs() + dy.abs())
    }
}

/// One-sided difference towards `p + 1`, the way coarse GPU derivatives behave.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ForwardDifference;

impl Derivative for ForwardDifference {
    #[inline]
    fn fwidth<F>(&self, f: F, p: Vec2) -> f32
    where
        F: Fn(Vec2) -> f32,
    {
        let here = f(p);
        let dx = f(p + Vec2::new(1.0, 0.0)) - here;
        let dy = f(p + Vec2::new(0.0, 1.0)) - here;
        dx.abs() + dy.abs()
    }
}

/// Ignores the field and reports a fixed magnitude.
///
/// Useful when the caller already knows the derivative (an axis-aligned
/// distance field in pixel units changes by exactly 1 per pixel).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constant(pub f32);

impl Derivative for Constant {
    #[inline]
    fn fwidth<F>(&self, _f: F, _p: Vec2) -> f32
    where
        F: Fn(Vec2) -> f32,
    {
        self.0
    }
}

/// Runtime-selectable derivative strategy, as carried by `RasterConfig`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DerivativeMode {
    #[default]
    Central,
    Forward,
    Constant(f32),
}

impl Derivative for DerivativeMode {
    #[inline]
    fn fwidth<F>(&self, f: F, p: Vec2) -> f32
    where
        F: Fn(Vec2) -> f32,
    {
        match *self {
            DerivativeMode::Central => CentralDifference.fwidth(f, p),
            DerivativeMode::Forward => ForwardDifference.fwidth(f, p),
            DerivativeMode::Constant(v) => Constant(v).fwidth(f, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(p: Vec2) -> f32 {
        3.0 * p.x - 2.0 * p.y + 7.0
    }

    #[test]
    fn central_difference_is_exact_on_linear_fields() {
        assert_eq!(CentralDifference.fwidth(plane, Vec2::new(4.0, 9.0)), 5.0);
    }

    #[test]
    fn forward_difference_is_exact_on_linear_fields() {
        assert_eq!(ForwardDifference.fwidth(plane, Vec2::new(4.0, 9.0)), 5.0);
    }

    #[test]
    fn constant_ignores_the_field() {
        assert_eq!(Constant(1.0).fwidth(plane, Vec2::zero()), 1.0);
    }

    #[test]
    fn mode_dispatches_to_the_named_strategy() {
        let radial = |p: Vec2| p.length();
        let p = Vec2::new(10.0, 0.0);
        assert_eq!(DerivativeMode::Central.fwidth(radial, p), CentralDifference.fwidth(radial, p));
        assert_eq!(DerivativeMode::Forward.fwidth(radial, p), ForwardDifference.fwidth(radial, p));
        assert_eq!(DerivativeMode::Constant(0.25).fwidth(radial, p), 0.25);
        assert_eq!(DerivativeMode::default(), DerivativeMode::Central);
    }
}
