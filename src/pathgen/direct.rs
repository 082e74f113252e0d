//! Direct path: the start, then the end, nothing in between.

use std::time::Duration;

use super::{wait, PathGenerator, PathIterator};
use crate::model::Combination;

/// Two-frame generator. This is what a non-animated setter amounts to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Direct {
    waiting_time: Duration,
}

impl Direct {
    pub fn new(waiting_time: Duration) -> Self {
        Self { waiting_time }
    }

    pub fn set_waiting_time(&mut self, waiting_time: Duration) {
        self.waiting_time = waiting_time;
    }
}

impl<C: Combination> PathGenerator<C> for Direct {
    fn waiting_time(&self) -> Duration {
        self.waiting_time
    }

    fn build(&self, from: C, to: C) -> Box<dyn PathIterator<C>> {
        Box::new(DirectIterator {
            frames: [from, to],
            pos: 0,
            waiting_time: self.waiting_time,
        })
    }
}

struct DirectIterator<C> {
    frames: [C; 2],
    pos: usize,
    waiting_time: Duration,
}

impl<C: Combination> PathIterator<C> for DirectIterator<C> {
    fn starting(&self) -> C {
        self.frames[0]
    }

    fn end(&self) -> C {
        self.frames[1]
    }

    fn current(&self) -> C {
        self.frames[self.pos.min(1)]
    }

    fn advance(&mut self) {
        self.pos += 1;
        wait(self.waiting_time);
    }

    fn remains(&self) -> bool {
        self.pos < self.frames.len()
    }
}
