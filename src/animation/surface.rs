//! The window control surface animations are applied to.

use crate::error::Result;
use crate::model::{Point, Rect, Size};

/// Blocking, single-call accessors for one window.
///
/// Every method is one platform call. Implementations report failures as
/// [`Error::Platform`](crate::Error::Platform).
pub trait WindowSurface {
    fn position(&self) -> Result<Point>;

    fn set_position(&self, point: Point) -> Result<()>;

    fn size(&self) -> Result<Size>;

    fn set_size(&self, size: Size) -> Result<()>;

    /// Window opacity in `0..=255`.
    fn opacity(&self) -> Result<i32>;

    /// Set the window opacity. Values are already clamped to `0..=255`.
    fn set_opacity(&self, value: i32) -> Result<()>;

    /// Size of the screen the window lives on.
    fn screen_size(&self) -> Result<Size>;

    fn rect(&self) -> Result<Rect> {
        Ok(Rect::from_parts(self.position()?, self.size()?))
    }

    /// Move and resize. The default issues two calls; platforms that can do
    /// both at once should override it.
    fn set_rect(&self, rect: Rect) -> Result<()> {
        self.set_position(rect.point())?;
        self.set_size(rect.size())
    }
}

impl<W: WindowSurface + ?Sized> WindowSurface for &W {
    fn position(&self) -> Result<Point> {
        (**self).position()
    }

    fn set_position(&self, point: Point) -> Result<()> {
        (**self).set_position(point)
    }

    fn size(&self) -> Result<Size> {
        (**self).size()
    }

    fn set_size(&self, size: Size) -> Result<()> {
        (**self).set_size(size)
    }

    fn opacity(&self) -> Result<i32> {
        (**self).opacity()
    }

    fn set_opacity(&self, value: i32) -> Result<()> {
        (**self).set_opacity(value)
    }

    fn screen_size(&self) -> Result<Size> {
        (**self).screen_size()
    }

    fn rect(&self) -> Result<Rect> {
        (**self).rect()
    }

    fn set_rect(&self, rect: Rect) -> Result<()> {
        (**self).set_rect(rect)
    }
}

/// Named screen positions a window can be sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Top-left corner a window of `window` size must take to sit on this
    /// anchor, keeping `margin` pixels from the screen edges. The margin is
    /// ignored for [`Anchor::Center`].
    pub fn resolve(self, screen: Size, window: Size, margin: i32) -> Point {
        let right = screen.width - window.width - margin;
        let bottom = screen.height - window.height - margin;
        match self {
            Anchor::TopLeft => Point::new(margin, margin),
            Anchor::TopRight => Point::new(right, margin),
            Anchor::Center => Point::new(
                (screen.width - window.width) / 2,
                (screen.height - window.height) / 2,
            ),
            Anchor::BottomLeft => Point::new(margin, bottom),
            Anchor::BottomRight => Point::new(right, bottom),
        }
    }
}
