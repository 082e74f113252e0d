//! Windows implementation using the Win32 API.
//!
//! # Module Structure
//!
//! - [`window`]: `Window`, a top-level window as a `WindowSurface`
//! - [`hotkeys`]: `Win32Hotkeys`, the `RegisterHotKey` backend

pub mod hotkeys;
pub mod window;

pub use hotkeys::{spawn_registry, Win32Hotkeys};
pub use window::Window;

use crate::error::Error;

/// Map a failed Win32 call onto [`Error::Platform`].
pub(crate) fn platform_error(operation: &'static str, err: windows::core::Error) -> Error {
    let code = err.code().0 as u32;
    log::debug!("{} failed: {}", operation, err);
    Error::Platform { operation, code }
}
