//! Loadable module lifecycle
//!
//! A module is loaded with [`KernelModule::init`], which registers whatever
//! devices it exposes, and unloaded with [`try_unload`], which refuses while
//! any open file still holds a reference to the module.

use core::sync::atomic::{AtomicUsize, Ordering};

use log::warn;

use crate::{ChrdevRegistry, Result};

/// Static module metadata (`MODULE_LICENSE`, `MODULE_AUTHOR`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub license: &'static str,
    pub version: &'static str,
}

/// The running module's handle (`THIS_MODULE`)
///
/// Tracks how many open files pin the module in memory.
#[derive(Debug)]
pub struct ThisModule {
    info: ModuleInfo,
    refcount: AtomicUsize,
}

impl ThisModule {
    pub const fn new(info: ModuleInfo) -> Self {
        Self {
            info,
            refcount: AtomicUsize::new(0),
        }
    }

    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    /// Take a usage reference (`try_module_get`)
    pub fn get(&self) {
        self.refcount.fetch_add(1, Ordering::AcqRel);
    }

    /// Drop a usage reference (`module_put`)
    pub fn put(&self) {
        let dropped = self
            .refcount
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            });
        if dropped.is_err() {
            warn!("{}: module_put without a matching get", self.info.name);
        }
    }

    /// Current number of usage references
    pub fn refcount(&self) -> usize {
        self.refcount.load(Ordering::Acquire)
    }
}

/// Trait for module lifecycle
pub trait KernelModule: Sized {
    /// Load the module (`module_init`)
    ///
    /// An error aborts the load; nothing registered so far may be left behind.
    fn init(registry: &mut dyn ChrdevRegistry) -> Result<Self>;

    /// Unload the module (`module_exit`)
    fn exit(self, registry: &mut dyn ChrdevRegistry);

    /// The module's usage-counted handle
    fn this_module(&self) -> &ThisModule;
}

/// Unload `module` if nothing holds a reference to it
///
/// # Errors
/// Hands the module back untouched while its usage count is non-zero
pub fn try_unload<M: KernelModule>(
    module: M,
    registry: &mut dyn ChrdevRegistry,
) -> core::result::Result<(), M> {
    let refcount = module.this_module().refcount();
    if refcount != 0 {
        warn!(
            "{}: module is in use ({} references)",
            module.this_module().info().name,
            refcount
        );
        return Err(module);
    }

    module.exit(registry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    const INFO: ModuleInfo = ModuleInfo {
        name: "counter",
        author: "test",
        description: "usage counting",
        license: "GPL",
        version: "1",
    };

    #[derive(Default)]
    struct RecordingRegistry {
        live: Vec<u32>,
    }

    impl ChrdevRegistry for RecordingRegistry {
        fn register_chrdev(&mut self, _major: u32, _name: &'static str) -> i32 {
            self.live.push(200);
            200
        }

        fn unregister_chrdev(&mut self, major: u32, _name: &'static str) {
            self.live.retain(|&m| m != major);
        }
    }

    struct Counter {
        module: ThisModule,
        major: u32,
    }

    impl KernelModule for Counter {
        fn init(registry: &mut dyn ChrdevRegistry) -> Result<Self> {
            let major = registry.register_chrdev(0, "counter") as u32;
            Ok(Self {
                module: ThisModule::new(INFO),
                major,
            })
        }

        fn exit(self, registry: &mut dyn ChrdevRegistry) {
            registry.unregister_chrdev(self.major, "counter");
        }

        fn this_module(&self) -> &ThisModule {
            &self.module
        }
    }

    #[test]
    fn test_refcount_get_put() {
        let module = ThisModule::new(INFO);
        assert_eq!(module.refcount(), 0);

        module.get();
        module.get();
        assert_eq!(module.refcount(), 2);

        module.put();
        module.put();
        assert_eq!(module.refcount(), 0);

        // Unbalanced put never wraps
        module.put();
        assert_eq!(module.refcount(), 0);
        assert_eq!(module.info().license, "GPL");
    }

    #[test]
    fn test_unload_refused_while_in_use() {
        let mut registry = RecordingRegistry::default();
        let module = Counter::init(&mut registry).expect("init failed");
        module.this_module().get();

        let module = match try_unload(module, &mut registry) {
            Ok(()) => panic!("module unloaded while in use"),
            Err(module) => module,
        };
        assert_eq!(registry.live, vec![200]);

        module.this_module().put();
        assert!(try_unload(module, &mut registry).is_ok());
        assert!(registry.live.is_empty());
    }
}
