//! Fixed-dimension numeric tuples (pure Rust, no FFI).
//!
//! A [`Combination`] is anything a path generator can interpolate: a scalar
//! opacity, a 2D point or size, a 4D rectangle. Every combination exposes its
//! components by index and can be rebuilt from them, so generators never
//! need to know the concrete type they are animating.

use std::fmt;

/// A numeric component of a [`Combination`].
pub trait Component: Copy + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static {
    fn to_f64(self) -> f64;

    /// Convert back from `f64`. Integer types truncate toward zero and
    /// saturate at their bounds.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value.trunc() as $t
                }
            }
        )*
    };
}

impl_integer_component!(i32, i64, u8, u32);

impl Component for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Component for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

/// A value made of a fixed number of numeric components.
pub trait Combination: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    type Value: Component;

    /// Number of components.
    const DIMENSION: usize;

    /// Component `index`, with `index < DIMENSION`.
    fn component(&self, index: usize) -> Self::Value;

    /// Build a combination by asking `f` for each component in order.
    fn from_fn<F: FnMut(usize) -> Self::Value>(f: F) -> Self;

    /// Component-wise collection, mostly useful in tests and logs.
    fn components(&self) -> Vec<Self::Value> {
        (0..Self::DIMENSION).map(|i| self.component(i)).collect()
    }
}

macro_rules! impl_scalar_combination {
    ($($t:ty),*) => {
        $(
            impl Combination for $t {
                type Value = $t;
                const DIMENSION: usize = 1;

                fn component(&self, _index: usize) -> $t {
                    *self
                }

                fn from_fn<F: FnMut(usize) -> $t>(mut f: F) -> Self {
                    f(0)
                }
            }
        )*
    };
}

impl_scalar_combination!(i32, i64, u8, u32, f32, f64);

impl<T: Component, const N: usize> Combination for [T; N] {
    type Value = T;
    const DIMENSION: usize = N;

    fn component(&self, index: usize) -> T {
        self[index]
    }

    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        std::array::from_fn(f)
    }
}

/// A position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`, saturating at the `i32` bounds.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl Combination for Point {
    type Value = i32;
    const DIMENSION: usize = 2;

    fn component(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            _ => self.y,
        }
    }

    fn from_fn<F: FnMut(usize) -> i32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// This size grown by `(dw, dh)`, saturating at the `i32` bounds.
    pub const fn grown(self, dw: i32, dh: i32) -> Self {
        Self::new(self.width.saturating_add(dw), self.height.saturating_add(dh))
    }

    /// This size scaled per axis, truncated toward zero. Results beyond the
    /// `i32` range saturate.
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self::new(
            (self.width as f64 * sx) as i32,
            (self.height as f64 * sy) as i32,
        )
    }
}

impl Combination for Size {
    type Value = i32;
    const DIMENSION: usize = 2;

    fn component(&self, index: usize) -> i32 {
        match index {
            0 => self.width,
            _ => self.height,
        }
    }

    fn from_fn<F: FnMut(usize) -> i32>(mut f: F) -> Self {
        let width = f(0);
        let height = f(1);
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A window rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_parts(point: Point, size: Size) -> Self {
        Self::new(point.x, point.y, size.width, size.height)
    }

    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Combination for Rect {
    type Value = i32;
    const DIMENSION: usize = 4;

    fn component(&self, index: usize) -> i32 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.width,
            _ => self.height,
        }
    }

    fn from_fn<F: FnMut(usize) -> i32>(mut f: F) -> Self {
        let x = f(0);
        let y = f(1);
        let width = f(2);
        let height = f(3);
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_saturate_at_bounds() {
        let p = Point::new(i32::MAX - 5, i32::MIN + 1);
        assert_eq!(p.offset(10, -10), Point::new(i32::MAX, i32::MIN));
        assert_eq!(p.offset(-5, 0), Point::new(i32::MAX - 10, i32::MIN + 1));

        let s = Size::new(i32::MAX - 5, 20);
        assert_eq!(s.grown(10, -5), Size::new(i32::MAX, 15));
        assert_eq!(Size::new(i32::MAX, 1).scaled(4.0, 1.0), Size::new(i32::MAX, 1));
    }

    #[test]
    fn dimensions_match_named_types() {
        assert_eq!(<i32 as Combination>::DIMENSION, 1);
        assert_eq!(Point::DIMENSION, 2);
        assert_eq!(Size::DIMENSION, 2);
        assert_eq!(Rect::DIMENSION, 4);
        assert_eq!(<[f64; 3] as Combination>::DIMENSION, 3);
    }

    #[test]
    fn from_fn_rebuilds_components_in_order() {
        let rect = Rect::from_fn(|i| (i as i32 + 1) * 10);
        assert_eq!(rect, Rect::new(10, 20, 30, 40));
        assert_eq!(rect.components(), vec![10, 20, 30, 40]);
    }

    #[test]
    fn integer_components_truncate_toward_zero() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u8::from_f64(-4.0), 0);
    }

    #[test]
    fn rect_splits_into_point_and_size() {
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(rect.point(), Point::new(1, 2));
        assert_eq!(rect.size(), Size::new(3, 4));
        assert_eq!(Rect::from_parts(rect.point(), rect.size()), rect);
    }

    #[test]
    fn size_scaling_truncates() {
        assert_eq!(Size::new(100, 50).scaled(1.5, 0.33), Size::new(150, 16));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Size::new(640, 480).to_string(), "640x480");
        assert_eq!(Rect::new(0, 0, 1, 2).to_string(), "(0, 0) 1x2");
    }
}
