//! Kernel/user boundary copy
//!
//! User buffers live in another address space and must never be touched
//! through a raw pointer. Drivers receive them as trait objects and move
//! one byte at a time through `put_user` / `get_user`, which report
//! [`DriverError::Fault`](crate::DriverError::Fault) for unmapped addresses.

use crate::Result;

/// Destination buffer in user space (the target of a `read`)
pub trait UserWriter {
    /// Number of bytes the caller made room for
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `byte` at `offset` within the user buffer
    fn put_user(&mut self, offset: usize, byte: u8) -> Result<()>;
}

/// Source buffer in user space (the origin of a `write`)
pub trait UserReader {
    /// Number of bytes the caller supplied
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the byte at `offset` within the user buffer
    fn get_user(&self, offset: usize) -> Result<u8>;
}
