//! Message store: the fixed status text and its read cursor
//!
//! The buffer is filled once at load time and never written again. The
//! cursor walks it one byte at a time and parks on the NUL terminator;
//! only [`MessageStore::reset_cursor`] moves it back to the start.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::consts::MSG_BUFFER_LEN;

/// NUL-terminated message buffer with a shared read cursor
#[derive(Debug)]
pub struct MessageStore {
    buffer: [u8; MSG_BUFFER_LEN],
    cursor: AtomicUsize,
}

impl MessageStore {
    /// Copy `message` into a fresh buffer (`strncpy` semantics)
    ///
    /// Copying stops at the first NUL in `message`. Text longer than
    /// `MSG_BUFFER_LEN - 1` is truncated so the terminator always fits.
    pub const fn new(message: &[u8]) -> Self {
        let mut buffer = [0u8; MSG_BUFFER_LEN];
        let mut i = 0;
        while i < MSG_BUFFER_LEN - 1 && i < message.len() && message[i] != 0 {
            buffer[i] = message[i];
            i += 1;
        }

        Self {
            buffer,
            cursor: AtomicUsize::new(0),
        }
    }

    /// The raw buffer, terminator and padding included
    pub fn buffer(&self) -> &[u8; MSG_BUFFER_LEN] {
        &self.buffer
    }

    /// The message text up to (not including) the terminator
    pub fn message(&self) -> &[u8] {
        &self.buffer[..self.len()]
    }

    /// Message length in bytes, terminator excluded
    pub fn len(&self) -> usize {
        self.buffer
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(MSG_BUFFER_LEN)
    }

    pub fn is_empty(&self) -> bool {
        self.buffer[0] == 0
    }

    /// Offset of the next byte to emit
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Whether the cursor has reached the terminator
    pub fn at_terminator(&self) -> bool {
        self.buffer[self.cursor()] == 0
    }

    /// Move the cursor back to the start of the buffer
    pub fn reset_cursor(&self) {
        self.cursor.store(0, Ordering::Release);
    }

    /// The byte under the cursor, without consuming it
    pub fn peek(&self) -> Option<u8> {
        match self.buffer[self.cursor()] {
            0 => None,
            byte => Some(byte),
        }
    }

    /// Consume the byte under the cursor
    ///
    /// Returns `None` once the terminator is reached; the cursor stays put
    /// until it is reset.
    pub fn next_byte(&self) -> Option<u8> {
        let pos = self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |pos| {
                (self.buffer[pos] != 0).then_some(pos + 1)
            })
            .ok()?;
        Some(self.buffer[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_initial_state() {
        let store = MessageStore::new(b"TFT Driver Feedback");
        assert_eq!(store.message(), b"TFT Driver Feedback");
        assert_eq!(store.len(), 19);
        assert_eq!(store.cursor(), 0);
        assert!(!store.at_terminator());
        assert_eq!(store.buffer()[19], 0);
    }

    #[test]
    fn test_next_byte_stops_at_terminator() {
        let store = MessageStore::new(b"abc");
        let drained: Vec<u8> = core::iter::from_fn(|| store.next_byte()).collect();
        assert_eq!(drained, b"abc");

        // Parked on the terminator until reset
        assert!(store.at_terminator());
        assert_eq!(store.next_byte(), None);
        assert_eq!(store.peek(), None);
        assert_eq!(store.cursor(), 3);

        store.reset_cursor();
        assert_eq!(store.next_byte(), Some(b'a'));
    }

    #[test]
    fn test_peek_does_not_advance() {
        let store = MessageStore::new(b"xy");
        assert_eq!(store.peek(), Some(b'x'));
        assert_eq!(store.peek(), Some(b'x'));
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_long_message_truncated() {
        let long = [b'z'; 40];
        let store = MessageStore::new(&long);
        assert_eq!(store.len(), MSG_BUFFER_LEN - 1);
        assert_eq!(store.buffer()[MSG_BUFFER_LEN - 1], 0);

        while store.next_byte().is_some() {}
        assert_eq!(store.cursor(), MSG_BUFFER_LEN - 1);
    }

    #[test]
    fn test_copy_stops_at_embedded_nul() {
        let store = MessageStore::new(b"TFT\0hidden");
        assert_eq!(store.message(), b"TFT");
        assert!(store.buffer()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_message() {
        let store = MessageStore::new(b"");
        assert!(store.is_empty());
        assert!(store.at_terminator());
        assert_eq!(store.next_byte(), None);
    }
}
