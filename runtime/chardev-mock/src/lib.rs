//! ⚠️  MOCK kernel services for host-side driver testing
//!
//! # WARNING: This is NOT a kernel!
//!
//! This crate stands in for the pieces of the kernel a character-device
//! driver talks to, so drivers can be loaded, opened, read and unloaded
//! inside an ordinary `cargo test` process.
//!
//! ## What is mocked
//!
//! - [`MockRegistry`]: `register_chrdev` / `unregister_chrdev`, including
//!   dynamic major allocation and injected failures
//! - [`UserBuffer`] / [`UserSource`]: user-space memory reached through
//!   `put_user` / `get_user`, with an optional faulting address
//! - [`CaptureLogger`]: a `log` backend that records every line so tests
//!   can assert on diagnostics
//!
//! ## Current Limitations
//!
//! - No device-file dispatch: tests call a driver's `FileOperations` directly
//! - One registry per test; nothing is process-global except the logger

mod logger;
mod registry;
mod user;

pub use logger::CaptureLogger;
pub use registry::{MockRegistry, DYNAMIC_MAJOR_END, DYNAMIC_MAJOR_START};
pub use user::{UserBuffer, UserSource};
