//! Linear path: uniform speed, all components arriving together.
//!
//! The component with the largest delta decides how many steps the path
//! takes:
//!
//! ```text
//! block = max(1, max_i |to[i] - from[i]|) / speed
//! steps = ceil(block)
//! frame(k) = from + (to - from) / block * k      for k in 0..steps
//! frame(steps) = to
//! ```
//!
//! A path therefore has `ceil(block) + 1` frames, the first one being `from`
//! and the last one being exactly `to`. `block` is capped at
//! [`MAX_LINEAR_STEPS`], so a path never has more than `MAX_LINEAR_STEPS + 1`
//! frames however small the speed.

use std::time::Duration;

use super::{wait, PathGenerator, PathIterator};
use crate::error::{Error, Result};
use crate::model::constants::MAX_LINEAR_STEPS;
use crate::model::{Combination, Component};

/// Uniform-speed generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    speed: f64,
    waiting_time: Duration,
}

impl Linear {
    /// `speed` is measured in distance units per step and must be finite and
    /// strictly positive.
    pub fn new(speed: f64, waiting_time: Duration) -> Result<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(Error::InvalidSpeed(speed));
        }
        Ok(Self {
            speed,
            waiting_time,
        })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_waiting_time(&mut self, waiting_time: Duration) {
        self.waiting_time = waiting_time;
    }

    /// The real-valued step count for a path between `from` and `to`,
    /// at most [`MAX_LINEAR_STEPS`].
    pub fn block<C: Combination>(&self, from: &C, to: &C) -> f64 {
        let widest = (0..C::DIMENSION)
            .map(|i| (to.component(i).to_f64() - from.component(i).to_f64()).abs())
            .fold(1.0_f64, f64::max);
        (widest / self.speed).min(MAX_LINEAR_STEPS as f64)
    }

    /// Number of frames a path between `from` and `to` produces.
    pub fn frame_count<C: Combination>(&self, from: &C, to: &C) -> u64 {
        steps(self.block(from, to)).saturating_add(1)
    }
}

impl<C: Combination> PathGenerator<C> for Linear {
    fn waiting_time(&self) -> Duration {
        self.waiting_time
    }

    fn build(&self, from: C, to: C) -> Box<dyn PathIterator<C>> {
        let block = self.block(&from, &to);
        Box::new(LinearIterator {
            from,
            to,
            block,
            last: steps(block),
            pos: 0,
            waiting_time: self.waiting_time,
        })
    }
}

fn steps(block: f64) -> u64 {
    (block.ceil() as u64).min(MAX_LINEAR_STEPS)
}

struct LinearIterator<C> {
    from: C,
    to: C,
    block: f64,
    /// Index of the final frame.
    last: u64,
    pos: u64,
    waiting_time: Duration,
}

impl<C: Combination> PathIterator<C> for LinearIterator<C> {
    fn starting(&self) -> C {
        self.from
    }

    fn end(&self) -> C {
        self.to
    }

    fn current(&self) -> C {
        if self.pos == 0 {
            return self.from;
        }
        if self.pos >= self.last {
            return self.to;
        }

        let k = self.pos as f64;
        C::from_fn(|i| {
            let a = self.from.component(i).to_f64();
            let b = self.to.component(i).to_f64();
            let v = a + (b - a) / self.block * k;
            C::Value::from_f64(v.clamp(a.min(b), a.max(b)))
        })
    }

    fn advance(&mut self) {
        self.pos += 1;
        wait(self.waiting_time);
    }

    fn remains(&self) -> bool {
        self.pos <= self.last
    }
}
