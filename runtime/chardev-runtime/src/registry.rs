//! Character device number registry
//!
//! Binds a device name and its file operations to a major number in the
//! host's device-file namespace.

/// Pass as `major` to have the registry choose one
pub const DYNAMIC_MAJOR: u32 = 0;

/// Host-side registry of character devices (`register_chrdev` and friends)
pub trait ChrdevRegistry {
    /// Register `name` under `major`, or under a free dynamic major when
    /// `major` is [`DYNAMIC_MAJOR`].
    ///
    /// # Returns
    /// The assigned major number, or a negative errno on failure
    fn register_chrdev(&mut self, major: u32, name: &'static str) -> i32;

    /// Release a major number obtained from `register_chrdev`
    fn unregister_chrdev(&mut self, major: u32, name: &'static str);
}
