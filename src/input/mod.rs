//! Keyboard input model.
//!
//! This module contains pure key types (no FFI):
//! - keys.rs: virtual-key codes and their names
//! - shortcut.rs: modifier flags and the `Shortcut` id scheme

pub mod keys;
pub mod shortcut;

pub use keys::Key;
pub use shortcut::{Modifiers, Shortcut};
