//! Registration shim: the device's binding in the device-file namespace

use chardev_runtime::{ChrdevRegistry, DriverError, Result, DYNAMIC_MAJOR};
use log::{error, info};

/// A live character device registration
///
/// Consumed by [`Registration::unregister`], so a device cannot be
/// released twice.
#[derive(Debug, PartialEq, Eq)]
pub struct Registration {
    major: u32,
    name: &'static str,
}

impl Registration {
    /// Register `name` under a dynamically assigned major number
    ///
    /// # Errors
    /// `Registration` carrying the registry's (negative) error code
    pub fn register(registry: &mut dyn ChrdevRegistry, name: &'static str) -> Result<Self> {
        let ret = registry.register_chrdev(DYNAMIC_MAJOR, name);
        if ret < 0 {
            error!("Could not register device: {}", ret);
            return Err(DriverError::Registration { code: ret });
        }

        let major = ret as u32;
        info!("{}: registered with major number {}", name, major);
        Ok(Self { major, name })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Release the major number and the device-file binding
    pub fn unregister(self, registry: &mut dyn ChrdevRegistry) {
        registry.unregister_chrdev(self.major, self.name);
        info!("{}: released major number {}", self.name, self.major);
    }
}
