//! Library constants and default values.
//!
//! This module contains animation defaults, opacity bounds, hotkey message
//! identifiers and settings validation limits.

// === Animation Defaults ===

/// Default linear speed, in distance units per step.
pub const DEFAULT_SPEED: f64 = 8.0;

/// Default delay between two animation frames, in milliseconds.
pub const DEFAULT_WAITING_MS: u64 = 10;

/// Upper bound on the steps of one linear path. Tiny speeds over wide
/// deltas are clamped here.
pub const MAX_LINEAR_STEPS: u64 = 100_000;

// === Validation Limits ===

/// Smallest speed accepted from persisted settings.
pub const MIN_SPEED: f64 = 0.01;

/// Largest speed accepted from persisted settings.
pub const MAX_SPEED: f64 = 10_000.0;

/// Longest delay accepted from persisted settings, in milliseconds.
pub const MAX_WAITING_MS: u64 = 1_000;

// === Opacity ===

/// Fully transparent layered window.
pub const OPACITY_MIN: i32 = 0;

/// Fully opaque window.
pub const OPACITY_MAX: i32 = 255;

// === Hotkeys ===

/// Mask selecting the modifier bits that take part in a shortcut id.
pub const SHORTCUT_MODIFIER_MASK: u32 = 0b1111;

/// Shift applied to the key code when deriving a shortcut id.
pub const SHORTCUT_KEY_SHIFT: u32 = 4;

/// Identifier used for the register/unregister probe in `is_registered`.
pub const PROBE_HOTKEY_ID: i32 = 0;
