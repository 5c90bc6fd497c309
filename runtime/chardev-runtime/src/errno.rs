//! Linux errno values used by character devices
//!
//! Positive constants, negated at the VFS boundary.

pub const ENOMEM: i32 = 12;
pub const EFAULT: i32 = 14;
pub const EBUSY: i32 = 16;
pub const EINVAL: i32 = 22;
