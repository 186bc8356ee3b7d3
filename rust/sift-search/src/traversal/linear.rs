//! Fixed-step scanning, forward or backward.

use std::{cmp::Ordering, ops::Range};

use sift_common::{Result, verify_arg};

use super::Traversal;

/// Visits the window one position every `step` elements.
///
/// A positive step starts at `window.start` and stops at `window.end`; a
/// negative step starts at `window.end - 1` and stops below `window.start`.
/// Every probe is visited regardless of the comparison outcome.
#[derive(Debug, Clone)]
pub struct LinearScan {
    /// Distance between consecutive probes; never zero.
    step: isize,
    /// The window being scanned.
    window: Range<usize>,
    /// Current probe. May sit one step outside the window once exhausted,
    /// including below zero for backward scans.
    pos: isize,
}

impl LinearScan {
    /// Creates a scan with the given step.
    ///
    /// Fails with `InvalidArgument` if `step` is zero.
    pub fn new(step: isize) -> Result<LinearScan> {
        verify_arg!(step, step != 0);
        Ok(LinearScan {
            step,
            window: 0..0,
            pos: 0,
        })
    }

    /// A scan visiting every element front to back.
    pub fn forward() -> LinearScan {
        LinearScan {
            step: 1,
            window: 0..0,
            pos: 0,
        }
    }

    /// A scan visiting every element back to front.
    pub fn backward() -> LinearScan {
        LinearScan {
            step: -1,
            window: 0..0,
            pos: -1,
        }
    }

    pub fn step(&self) -> isize {
        self.step
    }

    pub fn is_forward(&self) -> bool {
        self.step > 0
    }

    /// Changes the step and rewinds to the leading edge of the window for
    /// the new direction.
    ///
    /// Fails with `InvalidArgument` if `step` is zero, leaving the scan as is.
    pub fn set_step(&mut self, step: isize) -> Result<()> {
        verify_arg!(step, step != 0);
        self.step = step;
        self.rewind(self.window.clone());
        Ok(())
    }

    /// The current probe position, if it lies within the window.
    pub fn position(&self) -> Option<usize> {
        self.probe()
    }
}

impl Traversal for LinearScan {
    fn rewind(&mut self, window: Range<usize>) {
        self.pos = if self.is_forward() {
            window.start as isize
        } else {
            window.end as isize - 1
        };
        self.window = window;
    }

    fn probe(&self) -> Option<usize> {
        // Forward scans only move away from `start`, backward scans only
        // away from `end`, so each direction tests its stopping edge alone.
        let within = if self.is_forward() {
            self.pos < self.window.end as isize
        } else {
            self.pos >= self.window.start as isize
        };
        within.then_some(self.pos as usize)
    }

    #[inline]
    fn advance(&mut self, _ordering: Ordering) {
        self.pos = self.pos.saturating_add(self.step);
    }
}
