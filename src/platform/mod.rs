//! Platform-specific implementations.
//!
//! Each platform submodule provides a window type implementing
//! [`WindowSurface`](crate::animation::WindowSurface) and a
//! [`HotkeyBackend`](crate::hotkeys::HotkeyBackend).

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::*;
