//! Open file handles

use bitflags::bitflags;

bitflags! {
    /// Access mode and status flags of an open file
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileFlags: u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const NONBLOCK = 1 << 2;
        const APPEND = 1 << 3;
    }
}

/// A handle to an open device file, as seen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct File {
    flags: FileFlags,
    minor: u32,
}

impl File {
    /// Create a handle for minor number 0
    pub const fn new(flags: FileFlags) -> Self {
        Self { flags, minor: 0 }
    }

    /// Create a handle for a specific minor number
    pub const fn with_minor(flags: FileFlags, minor: u32) -> Self {
        Self { flags, minor }
    }

    pub fn flags(&self) -> FileFlags {
        self.flags
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn is_readable(&self) -> bool {
        self.flags.contains(FileFlags::READ)
    }

    pub fn is_writable(&self) -> bool {
        self.flags.contains(FileFlags::WRITE)
    }
}
