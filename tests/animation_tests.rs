//! Tests for the animated setters against an in-memory window.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use windrive::animation::{Anchor, Animator, Transition, WindowSurface};
use windrive::diagnostics::ErrorStream;
use windrive::error::{Error, Result};
use windrive::model::{Point, Rect, Size};
use windrive::pathgen::{Direct, Linear};

/// Window double recording every setter call.
struct FakeWindow {
    position: Cell<Point>,
    size: Cell<Size>,
    opacity: Cell<i32>,
    screen: Size,
    calls: RefCell<Vec<String>>,
    /// Reject the n-th setter call (0-based) with a platform error.
    fail_at: Option<usize>,
}

impl FakeWindow {
    fn new(position: Point, size: Size) -> Self {
        Self {
            position: Cell::new(position),
            size: Cell::new(size),
            opacity: Cell::new(255),
            screen: Size::new(1920, 1080),
            calls: RefCell::new(Vec::new()),
            fail_at: None,
        }
    }

    fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    fn setter(&self, call: String) -> Result<()> {
        let index = self.calls.borrow().len();
        if self.fail_at == Some(index) {
            return Err(Error::Platform {
                operation: "SetWindowPos",
                code: 1400,
            });
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl WindowSurface for FakeWindow {
    fn position(&self) -> Result<Point> {
        Ok(self.position.get())
    }

    fn set_position(&self, point: Point) -> Result<()> {
        self.setter(format!("pos {}", point))?;
        self.position.set(point);
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.size.get())
    }

    fn set_size(&self, size: Size) -> Result<()> {
        self.setter(format!("size {}", size))?;
        self.size.set(size);
        Ok(())
    }

    fn opacity(&self) -> Result<i32> {
        Ok(self.opacity.get())
    }

    fn set_opacity(&self, value: i32) -> Result<()> {
        self.setter(format!("alpha {}", value))?;
        self.opacity.set(value);
        Ok(())
    }

    fn screen_size(&self) -> Result<Size> {
        Ok(self.screen)
    }
}

fn linear(speed: f64) -> Linear {
    Linear::new(speed, Duration::ZERO).expect("valid speed")
}

// === Moves ===

#[test]
fn move_to_applies_every_frame_and_lands_on_target() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100));
    let done = Animator::new(&window)
        .move_to(Point::new(40, 10), &linear(10.0))
        .expect("transition completes");

    assert_eq!(done, Transition { frames: 5 });
    assert_eq!(window.call_count(), 5);
    assert_eq!(window.position.get(), Point::new(40, 10));
    assert_eq!(window.calls.borrow()[0], format!("pos {}", Point::new(0, 0)));
}

#[test]
fn direct_move_is_two_calls() {
    let window = FakeWindow::new(Point::new(5, 5), Size::new(100, 100));
    let done = Animator::new(&window)
        .move_to(Point::new(700, 300), &Direct::default())
        .expect("transition completes");
    assert_eq!(done.frames, 2);
    assert_eq!(window.position.get(), Point::new(700, 300));
}

#[test]
fn move_by_is_relative() {
    let window = FakeWindow::new(Point::new(100, 100), Size::new(10, 10));
    Animator::new(&window)
        .move_by(-30, 12, &linear(4.0))
        .expect("transition completes");
    assert_eq!(window.position.get(), Point::new(70, 112));
}

#[test]
fn move_to_anchor_uses_screen_and_window_size() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(400, 300));
    Animator::new(&window)
        .move_to_anchor(Anchor::BottomRight, 20, &Direct::default())
        .expect("transition completes");
    assert_eq!(window.position.get(), Point::new(1500, 760));
}

// === Sizes ===

#[test]
fn set_width_keeps_height() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(200, 150));
    Animator::new(&window)
        .set_width(260, &linear(20.0))
        .expect("transition completes");
    assert_eq!(window.size.get(), Size::new(260, 150));
    assert!(window.calls.borrow().iter().all(|c| c.ends_with("x150")));
}

#[test]
fn set_height_keeps_width() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(200, 150));
    Animator::new(&window)
        .set_height(90, &linear(20.0))
        .expect("transition completes");
    assert_eq!(window.size.get(), Size::new(200, 90));
}

#[test]
fn grow_and_scale() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(200, 100));
    let animator = Animator::new(&window);
    animator
        .grow_by(50, -20, &Direct::default())
        .expect("grow completes");
    assert_eq!(window.size.get(), Size::new(250, 80));
    animator
        .scale_by(2.0, 0.5, &linear(25.0))
        .expect("scale completes");
    assert_eq!(window.size.get(), Size::new(500, 40));
}

#[test]
fn reshape_moves_and_resizes() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100));
    Animator::new(&window)
        .reshape_to(Rect::new(10, 20, 300, 400), &linear(50.0))
        .expect("transition completes");
    assert_eq!(window.position.get(), Point::new(10, 20));
    assert_eq!(window.size.get(), Size::new(300, 400));
}

// === Extremes ===

#[test]
fn move_by_saturates_at_coordinate_limit() {
    let window = FakeWindow::new(Point::new(i32::MAX - 5, 0), Size::new(10, 10));
    Animator::new(&window)
        .move_by(10, 0, &linear(2.0))
        .expect("transition completes");
    assert_eq!(window.position.get(), Point::new(i32::MAX, 0));
}

#[test]
fn grow_by_saturates_at_size_limit() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(i32::MAX - 5, 50));
    Animator::new(&window)
        .grow_by(10, 0, &Direct::default())
        .expect("transition completes");
    assert_eq!(window.size.get(), Size::new(i32::MAX, 50));
}

// === Opacity ===

#[test]
fn fade_clamps_target_to_byte_range() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100));
    let animator = Animator::new(&window);
    animator.fade_to(-40, &linear(64.0)).expect("fade out");
    assert_eq!(window.opacity.get(), 0);
    animator.fade_to(999, &Direct::default()).expect("fade in");
    assert_eq!(window.opacity.get(), 255);
}

// === Failures ===

#[test]
fn rejected_frame_stops_transition_and_keeps_last_value() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100)).failing_at(2);
    let err = Animator::new(&window)
        .move_to(Point::new(40, 0), &linear(10.0))
        .expect_err("third frame is rejected");

    match &err {
        Error::FrameRejected { frame, .. } => assert_eq!(*frame, 2),
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.code(), Some(1400));
    assert_eq!(window.call_count(), 2);
    assert_eq!(window.position.get(), Point::new(10, 0));
}

#[test]
fn rejected_frame_is_recorded_with_work_path() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100)).failing_at(0);
    let stream = ErrorStream::new();
    let result = Animator::new(&window)
        .with_diagnostics(&stream)
        .resize_to(Size::new(300, 300), &Direct::default());

    assert!(result.is_err());
    assert!(stream.failed());
    let items = stream.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].code, 1400);
    assert_eq!(items[0].work, "Animator::resize_to");
    assert_eq!(stream.work_path(), "");
    assert_eq!(window.size.get(), Size::new(100, 100));
}

#[test]
fn successful_transition_reports_nothing() {
    let window = FakeWindow::new(Point::new(0, 0), Size::new(100, 100));
    let stream = ErrorStream::new();
    Animator::new(&window)
        .with_diagnostics(&stream)
        .move_to(Point::new(3, 3), &linear(1.0))
        .expect("transition completes");
    assert!(stream.check());
}
