//! Nullable clock: deterministic time and block height for testing.

use std::cell::Cell;

use warden_types::{BlockHeight, Timestamp};

/// A deterministic clock for testing.
///
/// Time and block height only advance when you tell them to, and
/// independently of each other.
pub struct NullClock {
    current: Cell<u64>,
    block: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
            block: Cell::new(1),
        }
    }

    /// Get the current time.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Get the current block height.
    pub fn block_height(&self) -> BlockHeight {
        BlockHeight::new(self.block.get())
    }

    /// Advance time by a number of seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }

    /// Set the time to a specific value.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }

    /// Move to the next block.
    pub fn mine(&self) {
        self.block.set(self.block.get() + 1);
    }
}
