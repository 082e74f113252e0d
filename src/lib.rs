//! Animated window transitions and global hotkeys.
//!
//! `windrive` drives top-level windows through smooth transitions (move,
//! resize, fade) and dispatches global keyboard shortcuts to callbacks on a
//! dedicated listener thread.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   frames   ┌──────────────┐   set_*   ┌───────────────┐
//! │ PathGenerator│ ─────────▶ │   Animator   │ ────────▶ │ WindowSurface │
//! │ Direct/Linear│            │              │           │ (Win32 Window)│
//! └──────────────┘            └──────┬───────┘           └───────────────┘
//!                                    │ failures
//!                                    ▼
//!                             ┌──────────────┐
//!                             │ ErrorStream  │
//!                             └──────────────┘
//!
//! ┌──────────────┐  pending ops  ┌─────────────────┐  WM_HOTKEY  ┌────┐
//! │HotkeyRegistry│ ────────────▶ │ listener thread │ ◀────────── │ OS │
//! └──────────────┘               └─────────────────┘             └────┘
//! ```
//!
//! # Module Structure
//!
//! - [`model`]: `Combination` values (`Point`, `Size`, `Rect`, scalars, arrays)
//! - [`pathgen`]: path generators and their iteration sessions
//! - [`animation`]: `Animator` and the `WindowSurface` seam
//! - [`input`]: virtual keys, modifiers and `Shortcut`
//! - [`hotkeys`]: `HotkeyRegistry` and its listener thread
//! - [`diagnostics`]: `ErrorStream`
//! - [`storage`]: JSON settings
//! - `platform`: Win32 window and hotkey backend (Windows only)

pub mod animation;
pub mod diagnostics;
pub mod error;
pub mod hotkeys;
pub mod input;
pub mod model;
pub mod pathgen;
pub mod storage;

#[cfg(target_os = "windows")]
pub mod platform;

pub use animation::{Anchor, Animator, WindowSurface};
pub use diagnostics::ErrorStream;
pub use error::{Error, Result};
pub use hotkeys::{HotkeyRegistry, MemoryHotkeys};
pub use input::{Key, Modifiers, Shortcut};
pub use model::{Combination, Component, Point, Rect, Size};
pub use pathgen::{Direct, Linear, PathGenerator, PathIterator};
pub use storage::{Settings, SettingsStore};
