//! Animated window transitions.
//!
//! A window setter such as "move to P" becomes a loop over the frames of a
//! [`PathGenerator`](crate::pathgen::PathGenerator) session, each frame being
//! one call on a [`WindowSurface`]. Pass
//! [`Direct`](crate::pathgen::Direct) to jump straight to the target.
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Duration;
//! use windrive::animation::Animator;
//! use windrive::pathgen::Linear;
//! use windrive::Point;
//!
//! let linear = Linear::new(4.0, Duration::from_millis(5))?;
//! Animator::new(&window).move_to(Point::new(100, 100), &linear)?;
//! ```

pub mod animator;
pub mod surface;

pub use animator::{Animator, Transition};
pub use surface::{Anchor, WindowSurface};
