//! Character Device Runtime - the contract between a driver and its host
//!
//! # Purpose
//! Provides the types and traits a character-device driver is written
//! against: the file operations table, the module load/unload lifecycle,
//! the device-number registry, and the capability used to copy bytes
//! across the kernel/user address-space boundary.
//!
//! # Integration Points
//! - Depends on: nothing but `core`
//! - Provides to: device drivers (`tft-display`), host backends (`chardev-mock`)
//! - Kernel surface: `register_chrdev`, `unregister_chrdev`, `put_user`,
//!   `get_user`, `try_module_get`, `module_put`
//!
//! # Architecture
//! Everything the kernel would hand a driver as a global (the module
//! handle, the registry, user memory) is modelled here as a value or a
//! trait object passed in explicitly. A driver never dereferences a user
//! pointer; it goes through [`UserWriter`] / [`UserReader`].
//!
//! # Testing Strategy
//! - Unit tests: errno mapping, module usage counting, file flags
//! - Integration tests: live in the driver crates, backed by `chardev-mock`

#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod errno;
mod file;
mod module;
mod registry;
mod user;

pub use file::{File, FileFlags};
pub use module::{try_unload, KernelModule, ModuleInfo, ThisModule};
pub use registry::{ChrdevRegistry, DYNAMIC_MAJOR};
pub use user::{UserReader, UserWriter};

use thiserror::Error;

/// Driver error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The device already has an open handle
    #[error("Device or resource busy")]
    Busy,

    /// The operation is not implemented by this device
    #[error("This operation is not supported")]
    Unsupported,

    /// The kernel refused to hand out a device number
    #[error("Could not register device: {code}")]
    Registration { code: i32 },

    /// A user-space address could not be accessed
    #[error("Bad address")]
    Fault,
}

impl DriverError {
    /// Negative errno as returned to the VFS layer.
    ///
    /// `Registration` carries the registry's own code, which is already
    /// negative, and passes it through unchanged.
    pub const fn to_errno(self) -> i32 {
        match self {
            DriverError::Busy => -errno::EBUSY,
            DriverError::Unsupported => -errno::EINVAL,
            DriverError::Registration { code } => code,
            DriverError::Fault => -errno::EFAULT,
        }
    }
}

pub type Result<T> = core::result::Result<T, DriverError>;

/// Collapse a read/write result into the kernel's `ssize_t` convention.
pub fn ssize(result: Result<usize>) -> isize {
    match result {
        Ok(count) => count as isize,
        Err(err) => err.to_errno() as isize,
    }
}

/// Collapse an open/release result into the kernel's `int` convention.
pub fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => err.to_errno(),
    }
}

/// File operations table
///
/// The host dispatches every system call on the device file through this
/// trait. Handlers take `&self`: calls may arrive concurrently from any
/// thread, so implementors keep their state in atomics.
pub trait FileOperations: Sync {
    /// Called when a process opens the device file
    fn open(&self, file: &File) -> Result<()>;

    /// Called when the last reference to an open file goes away
    fn release(&self, file: &File);

    /// Copy at most `count` bytes into `buf`, returning the number copied
    fn read(&self, file: &File, buf: &mut dyn UserWriter, count: usize) -> Result<usize>;

    /// Accept at most `count` bytes from `buf`, returning the number consumed
    fn write(&self, file: &File, buf: &dyn UserReader, count: usize) -> Result<usize>;
}
