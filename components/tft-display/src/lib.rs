//! TFT Display Driver - read-only character device
//!
//! # Purpose
//! Exposes `/dev/tft_display`, a device that serves a fixed status
//! message to readers, cycling forever, and rejects every write. There is
//! no display hardware behind it: the module demonstrates the driver
//! contract (exclusive open, cyclic reads, boundary-safe copies,
//! registration) that a real TFT controller driver would build on.
//!
//! # Integration Points
//! - Depends on: `chardev-runtime` (file operations, module lifecycle,
//!   registry, user-buffer copy)
//! - Provides to: the host kernel, through [`TftDisplayModule`]
//! - Device file: `tft_display`, dynamic major number
//!
//! # Architecture
//! ```text
//! load ──► Registration ──► TftDisplay ◄── open/release ── OpenGuard
//!                               │
//!                 read/write ───┴──► transfer ──► MessageStore
//! ```
//! All module-wide state (message buffer, cursor, open count, module
//! usage count) lives in one [`TftDisplay`] value owned by the loaded
//! module and passed by reference to every handler.
//!
//! # Testing Strategy
//! - Unit tests: message cursor, guard state machine, transfer engine
//! - Integration tests: load/unload against `chardev-mock`, concurrent opens
//! - Benchmarks: full-cycle reads (`benches/read_cycle.rs`)

#![no_std]

#[cfg(test)]
extern crate std;

pub mod consts;
pub mod guard;
pub mod message;
pub mod registration;
pub mod transfer;

pub use chardev_runtime::{DriverError, Result};
pub use guard::{GuardState, OpenGuard};
pub use message::MessageStore;
pub use registration::Registration;

use chardev_runtime::{
    ChrdevRegistry, File, FileOperations, KernelModule, ThisModule, UserReader, UserWriter,
};
use log::{debug, info};

use crate::consts::{DEVICE_NAME, EXAMPLE_MSG, MODULE_INFO};

/// Driver state shared by every file operation
#[derive(Debug)]
pub struct TftDisplay {
    module: ThisModule,
    store: MessageStore,
    guard: OpenGuard,
}

impl TftDisplay {
    /// Fresh device state: message loaded, cursor at the start, closed
    pub const fn new() -> Self {
        Self {
            module: ThisModule::new(MODULE_INFO),
            store: MessageStore::new(EXAMPLE_MSG.as_bytes()),
            guard: OpenGuard::new(),
        }
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn guard(&self) -> &OpenGuard {
        &self.guard
    }

    pub fn module(&self) -> &ThisModule {
        &self.module
    }
}

impl Default for TftDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOperations for TftDisplay {
    fn open(&self, file: &File) -> Result<()> {
        self.guard.try_open(&self.module)?;
        debug!("{}: opened ({:?})", DEVICE_NAME, file.flags());
        Ok(())
    }

    fn release(&self, file: &File) {
        self.guard.release(&self.module);
        debug!("{}: released ({:?})", DEVICE_NAME, file.flags());
    }

    fn read(&self, _file: &File, buf: &mut dyn UserWriter, count: usize) -> Result<usize> {
        transfer::read(&self.store, buf, count)
    }

    fn write(&self, _file: &File, buf: &dyn UserReader, count: usize) -> Result<usize> {
        transfer::write(buf, count)
    }
}

/// The loaded module: device state plus its registration
#[derive(Debug)]
pub struct TftDisplayModule {
    device: TftDisplay,
    registration: Registration,
}

impl TftDisplayModule {
    /// The device's file operations
    pub fn device(&self) -> &TftDisplay {
        &self.device
    }

    /// Major number assigned at load
    pub fn major(&self) -> u32 {
        self.registration.major()
    }
}

impl KernelModule for TftDisplayModule {
    fn init(registry: &mut dyn ChrdevRegistry) -> Result<Self> {
        let device = TftDisplay::new();
        let registration = Registration::register(registry, DEVICE_NAME)?;

        info!(
            "TFT display module loaded with device major number {}",
            registration.major()
        );
        Ok(Self {
            device,
            registration,
        })
    }

    fn exit(self, registry: &mut dyn ChrdevRegistry) {
        self.registration.unregister(registry);
        info!("Removed TFT display module.");
    }

    fn this_module(&self) -> &ThisModule {
        &self.device.module
    }
}
