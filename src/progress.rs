// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of libraries to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one library is done, successfully or not.
    fn item_done(&mut self, _index: usize, _library: &str, _classes: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Reports through the logger, one line per library.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logd!("Visiting {} libraries", total);
    }

    // Failures are already warned about where they happen.
    fn log(&mut self, msg: &str) {
        logd!("{}", msg);
    }

    fn item_done(&mut self, index: usize, library: &str, classes: usize) {
        logf!("[{}/{}] {}: {} classes", index + 1, self.total, library, classes);
    }
}
