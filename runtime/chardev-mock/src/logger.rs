//! Capturing `log` backend
//!
//! Stands in for the kernel ring buffer (`dmesg`). The logger is process
//! global, so tests running in parallel share it: assert with
//! [`CaptureLogger::contains`] on a line only your test emits.

use std::sync::{Mutex, MutexGuard, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

/// A `log::Log` that keeps every record in memory
pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl CaptureLogger {
    /// Install the capture logger as the global `log` backend
    ///
    /// Safe to call from every test; only the first call installs it.
    pub fn install() -> &'static CaptureLogger {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
        &LOGGER
    }

    /// Whether a line at `level` containing `needle` was logged
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|(lvl, line)| *lvl == level && line.contains(needle))
    }

    /// Snapshot of every captured line
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lock().push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
