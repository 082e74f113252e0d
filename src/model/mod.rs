//! Value model.
//!
//! This module contains pure value types (no FFI dependencies): the
//! [`Combination`] abstraction animated by path generators, the concrete
//! geometry types, and library-wide constants.

pub mod combination;
pub mod constants;

pub use combination::{Combination, Component, Point, Rect, Size};
pub use constants::*;
