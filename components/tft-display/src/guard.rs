//! Device lifecycle guard: one open handle at a time
//!
//! ```text
//!            try_open
//!   Closed ───────────► Open
//!     ▲                  │
//!     └──────────────────┘
//!            release
//! ```
//!
//! Admission is a single compare-and-swap on the open count, so two
//! racing opens can never both succeed.

use core::sync::atomic::{AtomicUsize, Ordering};

use chardev_runtime::{DriverError, Result, ThisModule};
use log::warn;

/// Guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Closed,
    Open,
}

/// Exclusive-open counter
#[derive(Debug, Default)]
pub struct OpenGuard {
    open_count: AtomicUsize,
}

impl OpenGuard {
    pub const fn new() -> Self {
        Self {
            open_count: AtomicUsize::new(0),
        }
    }

    /// Admit one opener
    ///
    /// Takes a usage reference on `module` so it cannot be unloaded while
    /// the handle is open.
    ///
    /// # Errors
    /// `Busy` if a handle is already open
    pub fn try_open(&self, module: &ThisModule) -> Result<()> {
        self.open_count
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DriverError::Busy)?;
        module.get();
        Ok(())
    }

    /// Close the handle admitted by `try_open`
    pub fn release(&self, module: &ThisModule) {
        if self
            .open_count
            .compare_exchange(1, 0, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("{}: release without a matching open", module.info().name);
            return;
        }
        module.put();
    }

    pub fn open_count(&self) -> usize {
        self.open_count.load(Ordering::Acquire)
    }

    pub fn state(&self) -> GuardState {
        match self.open_count() {
            0 => GuardState::Closed,
            _ => GuardState::Open,
        }
    }
}
