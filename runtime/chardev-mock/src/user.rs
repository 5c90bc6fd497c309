//! Mock user-space memory

use chardev_runtime::{DriverError, Result, UserReader, UserWriter};

/// A user buffer a driver reads into
#[derive(Debug, Clone)]
pub struct UserBuffer {
    data: Vec<u8>,
    fault_at: Option<usize>,
}

impl UserBuffer {
    /// A zeroed buffer of `len` bytes
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0; len],
            fault_at: None,
        }
    }

    /// A buffer whose pages from `offset` onward are unmapped
    pub fn with_fault_at(len: usize, offset: usize) -> Self {
        Self {
            data: vec![0; len],
            fault_at: Some(offset),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The first `count` bytes, typically the count a read returned
    pub fn filled(&self, count: usize) -> &[u8] {
        &self.data[..count.min(self.data.len())]
    }
}

impl UserWriter for UserBuffer {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn put_user(&mut self, offset: usize, byte: u8) -> Result<()> {
        if self.fault_at.is_some_and(|fault| offset >= fault) {
            return Err(DriverError::Fault);
        }
        let slot = self.data.get_mut(offset).ok_or(DriverError::Fault)?;
        *slot = byte;
        Ok(())
    }
}

/// A user buffer a driver is asked to write from
#[derive(Debug, Clone)]
pub struct UserSource {
    data: Vec<u8>,
}

impl UserSource {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl UserReader for UserSource {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get_user(&self, offset: usize) -> Result<u8> {
        self.data.get(offset).copied().ok_or(DriverError::Fault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_user_in_bounds() {
        let mut buf = UserBuffer::new(4);
        buf.put_user(0, b'T').unwrap();
        buf.put_user(3, b'!').unwrap();
        assert_eq!(buf.as_bytes(), b"T\0\0!");
        assert_eq!(buf.filled(1), b"T");
    }

    #[test]
    fn test_put_user_faults() {
        let mut buf = UserBuffer::new(2);
        assert_eq!(buf.put_user(2, b'x'), Err(DriverError::Fault));

        let mut buf = UserBuffer::with_fault_at(8, 3);
        assert!(buf.put_user(2, b'x').is_ok());
        assert_eq!(buf.put_user(3, b'x'), Err(DriverError::Fault));
    }

    #[test]
    fn test_get_user() {
        let src = UserSource::new(b"hi");
        assert_eq!(src.len(), 2);
        assert_eq!(src.get_user(1), Ok(b'i'));
        assert_eq!(src.get_user(2), Err(DriverError::Fault));
    }
}
