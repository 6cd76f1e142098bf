// src/progress.rs
/// Lightweight progress reporting used by the update cycle.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of entries to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A fetch for `name` is about to start.
    fn item_started(&mut self, _name: &str) {}

    /// `name` now has `points`.
    fn item_done(&mut self, _name: &str, _points: u64) {}

    /// `name` keeps its previous value.
    fn item_failed(&mut self, _name: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console sink used by the updater CLI.
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { done: 0, failed: 0, total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_started(&mut self, name: &str) {
        eprintln!("Scraping {name}'s profile...");
    }
    fn item_done(&mut self, _name: &str, points: u64) {
        self.done += 1;
        eprintln!("  Updated points: {points}");
    }
    fn item_failed(&mut self, name: &str, reason: &str) {
        self.failed += 1;
        eprintln!("  Could not update points for {name}. ({reason})");
    }
    fn finish(&mut self) {
        eprintln!(
            "Fetched {}/{} profile(s), {} kept previous value",
            self.done, self.total, self.failed
        );
    }
}
