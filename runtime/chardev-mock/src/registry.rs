//! Mock character device registry
//!
//! Dynamic majors are handed out the way Linux does it: from
//! [`DYNAMIC_MAJOR_START`] downward to [`DYNAMIC_MAJOR_END`].

use std::collections::BTreeMap;

use chardev_runtime::{errno, ChrdevRegistry, DYNAMIC_MAJOR};
use log::{debug, warn};

/// Highest dynamically assigned major number
pub const DYNAMIC_MAJOR_START: u32 = 254;

/// Lowest dynamically assigned major number
pub const DYNAMIC_MAJOR_END: u32 = 234;

/// In-memory `register_chrdev` table
#[derive(Debug, Default)]
pub struct MockRegistry {
    devices: BTreeMap<u32, &'static str>,
    fail_next: Option<i32>,
    register_calls: usize,
    unregister_calls: usize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `register_chrdev` fail with `-errno`
    pub fn fail_next_register(&mut self, errno: i32) {
        self.fail_next = Some(-errno);
    }

    /// Major number `name` is registered under, if any
    pub fn major_of(&self, name: &str) -> Option<u32> {
        self.devices
            .iter()
            .find(|(_, &registered)| registered == name)
            .map(|(&major, _)| major)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.major_of(name).is_some()
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls
    }

    fn find_dynamic_major(&self) -> Option<u32> {
        (DYNAMIC_MAJOR_END..=DYNAMIC_MAJOR_START)
            .rev()
            .find(|major| !self.devices.contains_key(major))
    }
}

impl ChrdevRegistry for MockRegistry {
    fn register_chrdev(&mut self, major: u32, name: &'static str) -> i32 {
        self.register_calls += 1;

        if let Some(code) = self.fail_next.take() {
            debug!("register_chrdev({}, {}): injected failure {}", major, name, code);
            return code;
        }

        if self.is_registered(name) {
            return -errno::EBUSY;
        }

        let major = if major == DYNAMIC_MAJOR {
            match self.find_dynamic_major() {
                Some(major) => major,
                None => return -errno::EBUSY,
            }
        } else if self.devices.contains_key(&major) {
            return -errno::EBUSY;
        } else {
            major
        };

        self.devices.insert(major, name);
        debug!("register_chrdev: {} -> major {}", name, major);
        major as i32
    }

    fn unregister_chrdev(&mut self, major: u32, name: &'static str) {
        self.unregister_calls += 1;

        match self.devices.get(&major) {
            Some(&registered) if registered == name => {
                self.devices.remove(&major);
                debug!("unregister_chrdev: {} (major {})", name, major);
            }
            _ => warn!("unregister_chrdev: {} is not registered under major {}", name, major),
        }
    }
}
