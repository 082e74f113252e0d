//! Path generators: strategies that turn a `(from, to)` pair into a sequence
//! of intermediate values.
//!
//! A generator is configured once (speed, delay) and can build any number of
//! independent sessions. A session is a [`PathIterator`]: peek the value with
//! [`current`](PathIterator::current), step with
//! [`advance`](PathIterator::advance) and stop when
//! [`remains`](PathIterator::remains) turns false.
//!
//! Every session obeys the same contract:
//! - the first value is exactly `from`;
//! - the last value is exactly `to`;
//! - no value leaves the component-wise range between `from` and `to`.
//!
//! `advance` blocks the calling thread for the generator's waiting time.
//! Callers that cannot block must drive the session from their own worker.
//!
//! # Module Structure
//!
//! - [`direct`]: two-frame strategy (start, end)
//! - [`linear`]: uniform-speed interpolation

pub mod direct;
pub mod linear;

use std::time::Duration;

use crate::model::Combination;

pub use direct::Direct;
pub use linear::Linear;

/// One iteration session over a generated path.
pub trait PathIterator<C: Combination> {
    /// The value the session started from.
    fn starting(&self) -> C;

    /// The value the session ends on.
    fn end(&self) -> C;

    /// Value at the cursor. Only meaningful while [`remains`](Self::remains)
    /// is true.
    fn current(&self) -> C;

    /// Move the cursor one step forward, then sleep for the waiting time.
    fn advance(&mut self);

    /// False once the sequence is exhausted.
    fn remains(&self) -> bool;
}

/// A strategy building [`PathIterator`] sessions for one combination type.
pub trait PathGenerator<C: Combination> {
    /// Delay applied after each step.
    fn waiting_time(&self) -> Duration;

    /// Start a fresh session from `from` to `to`.
    ///
    /// Pure in its inputs: two builds with the same arguments yield the same
    /// sequence.
    fn build(&self, from: C, to: C) -> Box<dyn PathIterator<C>>;

    /// Number of components the generated values carry.
    fn dimension(&self) -> usize {
        C::DIMENSION
    }

    /// Session adapted to [`Iterator`]: yields every frame in order.
    fn frames(&self, from: C, to: C) -> Frames<C> {
        Frames::new(self.build(from, to))
    }
}

/// Sleep for `waiting_time` unless it is zero.
pub(crate) fn wait(waiting_time: Duration) {
    if !waiting_time.is_zero() {
        std::thread::sleep(waiting_time);
    }
}

/// [`Iterator`] over the frames of a session.
///
/// The first call to `next` yields the starting frame without waiting; every
/// later call advances the session (and therefore sleeps) before yielding.
pub struct Frames<C: Combination> {
    session: Box<dyn PathIterator<C>>,
    started: bool,
}

impl<C: Combination> Frames<C> {
    pub fn new(session: Box<dyn PathIterator<C>>) -> Self {
        Self {
            session,
            started: false,
        }
    }
}

impl<C: Combination> Iterator for Frames<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.started {
            self.session.advance();
        } else {
            self.started = true;
        }

        if self.session.remains() {
            Some(self.session.current())
        } else {
            None
        }
    }
}
