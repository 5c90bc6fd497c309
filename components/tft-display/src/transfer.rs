//! Transfer engine: message store to user buffer, and write rejection
//!
//! Every byte crosses the address-space boundary through
//! [`UserWriter::put_user`]; the engine never sees a user pointer.

use chardev_runtime::{DriverError, Result, UserReader, UserWriter};
use log::{trace, warn};

use crate::message::MessageStore;

/// Copy up to `count` bytes of the message into `dest`
///
/// A read that starts on the terminator first rewinds the cursor, so the
/// device never reports EOF. A read ends at the terminator even when more
/// bytes were requested; the next read starts a fresh cycle.
///
/// # Errors
/// `Fault` if the very first byte cannot be stored. A fault after that
/// ends the read early with the count copied so far. The faulting byte
/// is not consumed.
pub fn read(store: &MessageStore, dest: &mut dyn UserWriter, count: usize) -> Result<usize> {
    if store.at_terminator() {
        store.reset_cursor();
    }

    let mut copied = 0;
    while copied < count {
        let Some(byte) = store.peek() else {
            break;
        };
        if let Err(err) = dest.put_user(copied, byte) {
            if copied == 0 {
                return Err(err);
            }
            break;
        }
        store.next_byte();
        copied += 1;
    }

    trace!("read {} of {} requested bytes", copied, count);
    Ok(copied)
}

/// Reject a write: the device is read-only
pub fn write(src: &dyn UserReader, count: usize) -> Result<usize> {
    trace!("write of {} bytes ({} supplied)", count, src.len());
    warn!("This operation is not supported.");
    Err(DriverError::Unsupported)
}
