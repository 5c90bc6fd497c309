//! Compile-time configuration of the TFT display module

use chardev_runtime::ModuleInfo;
use static_assertions::const_assert;

/// Name the device is registered under (`/dev/tft_display`)
pub const DEVICE_NAME: &str = "tft_display";

/// Status text served to readers
pub const EXAMPLE_MSG: &str = "TFT Driver Feedback";

/// Capacity of the message buffer, terminator included
pub const MSG_BUFFER_LEN: usize = 32;

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    name: DEVICE_NAME,
    author: "Alek Mabry",
    description: "A TFT Display Driver",
    license: "GPL",
    version: "1",
};

// The message and its NUL terminator must fit
const_assert!(EXAMPLE_MSG.len() < MSG_BUFFER_LEN);
