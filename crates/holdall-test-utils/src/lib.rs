//! Test utilities and probes for Holdall development.
//!
//! Provides [`DropTally`], a shared drop counter for verifying the
//! destruction properties of owning containers, and reusable fixtures
//! in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

pub mod fixtures;

/// Shared counter recording how many probe values have been dropped.
///
/// Create probes with [`tracked`](DropTally::tracked); every probe drop
/// bumps the tally, including drops of clones. Single-threaded by design
/// (`Rc<Cell<_>>`), matching the containers under test.
#[derive(Clone, Debug, Default)]
pub struct DropTally {
    count: Rc<Cell<usize>>,
}

impl DropTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total probe drops observed so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Create a probe value that bumps this tally when dropped.
    pub fn tracked(&self, value: u32) -> Tracked {
        Tracked {
            tally: Rc::clone(&self.count),
            value,
        }
    }
}

/// Probe value carrying a payload and reporting its own destruction.
///
/// Clones report to the same tally as the original, so a deep-copied
/// container of probes yields one drop event per element per container.
#[derive(Debug)]
pub struct Tracked {
    tally: Rc<Cell<usize>>,
    pub value: u32,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            tally: Rc::clone(&self.tally),
            value: self.value,
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tally.set(self.tally.get() + 1);
    }
}
