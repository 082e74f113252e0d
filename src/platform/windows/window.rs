//! Win32 window handle implementing [`WindowSurface`].

use windows::core::PCWSTR;
use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetForegroundWindow, GetLayeredWindowAttributes, GetSystemMetrics, GetWindowLongW,
    GetWindowRect, IsWindow, SetLayeredWindowAttributes, SetWindowLongW, SetWindowPos,
    WindowFromPoint, GWL_EXSTYLE, LWA_ALPHA, SM_CXSCREEN, SM_CYSCREEN, SWP_NOACTIVATE,
    SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, WS_EX_LAYERED,
};

use super::platform_error;
use crate::animation::WindowSurface;
use crate::error::{Error, Result};
use crate::model::{Point, Rect, Size, OPACITY_MAX};

/// A top-level window, addressed by its handle.
///
/// Window handles belong to the GUI thread model of Win32; keep a `Window`
/// on the thread that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Wrap `hwnd` if it names an existing window.
    pub fn from_handle(hwnd: HWND) -> Option<Self> {
        unsafe { IsWindow(Some(hwnd)).as_bool() }.then_some(Self { hwnd })
    }

    /// The window the user is currently working in.
    pub fn foreground() -> Option<Self> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            None
        } else {
            Self::from_handle(hwnd)
        }
    }

    /// The window under a screen point.
    pub fn from_point(point: Point) -> Option<Self> {
        let hwnd = unsafe {
            WindowFromPoint(POINT {
                x: point.x,
                y: point.y,
            })
        };
        if hwnd.is_invalid() {
            None
        } else {
            Some(Self { hwnd })
        }
    }

    /// The first top-level window matching an exact title and/or window
    /// class name. With neither given there is nothing to match.
    pub fn find(title: Option<&str>, class: Option<&str>) -> Option<Self> {
        if title.is_none() && class.is_none() {
            return None;
        }
        let title = title.map(wide);
        let class = class.map(wide);
        let hwnd = unsafe { FindWindowW(pcwstr(class.as_deref()), pcwstr(title.as_deref())) }.ok()?;
        if hwnd.is_invalid() {
            None
        } else {
            Some(Self { hwnd })
        }
    }

    pub fn find_by_title(title: &str) -> Option<Self> {
        Self::find(Some(title), None)
    }

    pub fn find_by_class(class: &str) -> Option<Self> {
        Self::find(None, Some(class))
    }

    pub fn handle(&self) -> HWND {
        self.hwnd
    }

    fn window_rect(&self) -> Result<RECT> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut rect) }
            .map_err(|e| platform_error("GetWindowRect", e))?;
        Ok(rect)
    }

    fn is_layered(&self) -> bool {
        let style = unsafe { GetWindowLongW(self.hwnd, GWL_EXSTYLE) } as u32;
        style & WS_EX_LAYERED.0 == WS_EX_LAYERED.0
    }

    /// Layered windows are the only ones with an alpha attribute.
    fn become_layered(&self) -> Result<()> {
        if self.is_layered() {
            return Ok(());
        }
        let style = unsafe { GetWindowLongW(self.hwnd, GWL_EXSTYLE) } as u32;
        unsafe { SetWindowLongW(self.hwnd, GWL_EXSTYLE, (style | WS_EX_LAYERED.0) as i32) };
        if self.is_layered() {
            Ok(())
        } else {
            Err(Error::Platform {
                operation: "SetWindowLongW",
                code: 0,
            })
        }
    }
}

/// Null-terminated UTF-16 copy of `text`.
fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn pcwstr(text: Option<&[u16]>) -> PCWSTR {
    text.map_or(PCWSTR::null(), |t| PCWSTR(t.as_ptr()))
}

impl WindowSurface for Window {
    fn position(&self) -> Result<Point> {
        let rect = self.window_rect()?;
        Ok(Point::new(rect.left, rect.top))
    }

    fn set_position(&self, point: Point) -> Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                point.x,
                point.y,
                0,
                0,
                SWP_NOZORDER | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| platform_error("SetWindowPos", e))
    }

    fn size(&self) -> Result<Size> {
        let rect = self.window_rect()?;
        Ok(Size::new(rect.right - rect.left, rect.bottom - rect.top))
    }

    fn set_size(&self, size: Size) -> Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                0,
                0,
                size.width,
                size.height,
                SWP_NOZORDER | SWP_NOMOVE | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| platform_error("SetWindowPos", e))
    }

    fn opacity(&self) -> Result<i32> {
        if !self.is_layered() {
            return Ok(OPACITY_MAX);
        }
        let mut alpha: u8 = OPACITY_MAX as u8;
        unsafe { GetLayeredWindowAttributes(self.hwnd, None, Some(&mut alpha as *mut u8), None) }
            .map_err(|e| platform_error("GetLayeredWindowAttributes", e))?;
        Ok(alpha as i32)
    }

    fn set_opacity(&self, value: i32) -> Result<()> {
        self.become_layered()?;
        unsafe { SetLayeredWindowAttributes(self.hwnd, COLORREF(0), value as u8, LWA_ALPHA) }
            .map_err(|e| platform_error("SetLayeredWindowAttributes", e))
    }

    fn screen_size(&self) -> Result<Size> {
        let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        if w == 0 || h == 0 {
            return Err(Error::Platform {
                operation: "GetSystemMetrics",
                code: 0,
            });
        }
        Ok(Size::new(w, h))
    }

    fn rect(&self) -> Result<Rect> {
        let r = self.window_rect()?;
        Ok(Rect::new(r.left, r.top, r.right - r.left, r.bottom - r.top))
    }

    fn set_rect(&self, rect: Rect) -> Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| platform_error("SetWindowPos", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_needs_a_title_or_class() {
        assert!(Window::find(None, None).is_none());
    }

    #[test]
    fn find_misses_unknown_windows() {
        assert!(Window::find_by_title("windrive: no window carries this title").is_none());
        assert!(Window::find_by_class("WindriveNoSuchClass").is_none());
    }

    #[test]
    fn wide_strings_are_null_terminated() {
        assert_eq!(wide("ab"), vec![u16::from(b'a'), u16::from(b'b'), 0]);
        assert!(pcwstr(None).is_null());
    }
}
