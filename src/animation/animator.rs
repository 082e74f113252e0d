//! Drives a path generator against a [`WindowSurface`].

use crate::diagnostics::ErrorStream;
use crate::error::{Error, Result};
use crate::model::{Combination, Point, Rect, Size, OPACITY_MAX, OPACITY_MIN};
use crate::pathgen::PathGenerator;

use super::surface::{Anchor, WindowSurface};

/// Outcome of a completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Frames applied to the window, first and last included.
    pub frames: usize,
}

/// Animated setters for one window.
///
/// Each setter reads the current value once, then applies every generated
/// frame with a single platform call, sleeping between frames as the
/// generator dictates. The first rejected frame stops the transition; the
/// window keeps the last value that was applied.
pub struct Animator<'a, W: WindowSurface + ?Sized> {
    window: &'a W,
    diagnostics: Option<&'a ErrorStream>,
}

impl<'a, W: WindowSurface + ?Sized> Animator<'a, W> {
    pub fn new(window: &'a W) -> Self {
        Self {
            window,
            diagnostics: None,
        }
    }

    /// Report failures into `stream` in addition to returning them.
    pub fn with_diagnostics(mut self, stream: &'a ErrorStream) -> Self {
        self.diagnostics = Some(stream);
        self
    }

    pub fn window(&self) -> &'a W {
        self.window
    }

    pub fn move_to(&self, target: Point, pg: &dyn PathGenerator<Point>) -> Result<Transition> {
        let from = self.read("Animator::move_to", || self.window.position())?;
        self.drive("Animator::move_to", from, target, pg, |p| {
            self.window.set_position(p)
        })
    }

    pub fn move_by(&self, dx: i32, dy: i32, pg: &dyn PathGenerator<Point>) -> Result<Transition> {
        let from = self.read("Animator::move_by", || self.window.position())?;
        self.drive("Animator::move_by", from, from.offset(dx, dy), pg, |p| {
            self.window.set_position(p)
        })
    }

    /// Send the window to a screen anchor, `margin` pixels from the edges.
    pub fn move_to_anchor(
        &self,
        anchor: Anchor,
        margin: i32,
        pg: &dyn PathGenerator<Point>,
    ) -> Result<Transition> {
        const WORK: &str = "Animator::move_to_anchor";
        let screen = self.read(WORK, || self.window.screen_size())?;
        let rect = self.read(WORK, || self.window.rect())?;
        let target = anchor.resolve(screen, rect.size(), margin);
        self.drive(WORK, rect.point(), target, pg, |p| self.window.set_position(p))
    }

    pub fn resize_to(&self, target: Size, pg: &dyn PathGenerator<Size>) -> Result<Transition> {
        let from = self.read("Animator::resize_to", || self.window.size())?;
        self.drive("Animator::resize_to", from, target, pg, |s| {
            self.window.set_size(s)
        })
    }

    /// Animate the width only; the height stays at its current value.
    pub fn set_width(&self, width: i32, pg: &dyn PathGenerator<i32>) -> Result<Transition> {
        let size = self.read("Animator::set_width", || self.window.size())?;
        self.drive("Animator::set_width", size.width, width, pg, |w| {
            self.window.set_size(Size::new(w, size.height))
        })
    }

    /// Animate the height only; the width stays at its current value.
    pub fn set_height(&self, height: i32, pg: &dyn PathGenerator<i32>) -> Result<Transition> {
        let size = self.read("Animator::set_height", || self.window.size())?;
        self.drive("Animator::set_height", size.height, height, pg, |h| {
            self.window.set_size(Size::new(size.width, h))
        })
    }

    /// Grow (or shrink, with negative deltas) by a fixed number of pixels.
    pub fn grow_by(&self, dw: i32, dh: i32, pg: &dyn PathGenerator<Size>) -> Result<Transition> {
        let from = self.read("Animator::grow_by", || self.window.size())?;
        let target = from.grown(dw, dh);
        self.drive("Animator::grow_by", from, target, pg, |s| {
            self.window.set_size(s)
        })
    }

    /// Scale the current size per axis.
    pub fn scale_by(&self, sx: f64, sy: f64, pg: &dyn PathGenerator<Size>) -> Result<Transition> {
        let from = self.read("Animator::scale_by", || self.window.size())?;
        self.drive("Animator::scale_by", from, from.scaled(sx, sy), pg, |s| {
            self.window.set_size(s)
        })
    }

    /// Move and resize in one transition.
    pub fn reshape_to(&self, target: Rect, pg: &dyn PathGenerator<Rect>) -> Result<Transition> {
        let from = self.read("Animator::reshape_to", || self.window.rect())?;
        self.drive("Animator::reshape_to", from, target, pg, |r| {
            self.window.set_rect(r)
        })
    }

    /// Fade to `opacity`, clamped to `0..=255`.
    pub fn fade_to(&self, opacity: i32, pg: &dyn PathGenerator<i32>) -> Result<Transition> {
        let from = self.read("Animator::fade_to", || self.window.opacity())?;
        let target = opacity.clamp(OPACITY_MIN, OPACITY_MAX);
        self.drive("Animator::fade_to", from, target, pg, |v| {
            self.window.set_opacity(v.clamp(OPACITY_MIN, OPACITY_MAX))
        })
    }

    fn read<T>(&self, work: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let _guard = self.diagnostics.map(|d| d.begin(work));
        f().inspect_err(|err| {
            if let Some(d) = self.diagnostics {
                d.record(err);
            }
        })
    }

    fn drive<C: Combination>(
        &self,
        work: &'static str,
        from: C,
        to: C,
        pg: &dyn PathGenerator<C>,
        mut apply: impl FnMut(C) -> Result<()>,
    ) -> Result<Transition> {
        let _guard = self.diagnostics.map(|d| d.begin(work));
        let mut session = pg.build(from, to);
        let mut frames = 0;

        while session.remains() {
            let value = session.current();
            if let Err(source) = apply(value) {
                log::debug!("{}: frame {} ({:?}) rejected: {}", work, frames, value, source);
                let err = Error::FrameRejected {
                    frame: frames,
                    source: Box::new(source),
                };
                if let Some(d) = self.diagnostics {
                    d.record(&err);
                }
                return Err(err);
            }
            frames += 1;
            session.advance();
        }

        Ok(Transition { frames })
    }
}
