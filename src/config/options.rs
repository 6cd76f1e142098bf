// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything the updater cycle needs besides the fetcher itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOptions {
    pub document: PathBuf,
    pub fetch: FetchOptions,
    /// 1 = strictly sequential.
    pub workers: usize,
    /// Pause after each fetch, per worker.
    pub pause: Duration,
    /// Compute and report, but leave the file alone.
    pub dry_run: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            document: PathBuf::from(DEFAULT_DOCUMENT),
            fetch: FetchOptions::default(),
            workers: WORKERS,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            dry_run: false,
        }
    }
}

impl UpdateOptions {
    /// Worker count actually used for `n` entries.
    pub fn effective_workers(&self, n: usize) -> usize {
        self.workers.clamp(1, MAX_WORKERS).min(n).max(1)
    }
}

/// HTTP fetcher settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub badge_class: String,
    /// Dump pages with no badge here, one file per entry.
    pub debug_dir: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
            badge_class: s!(BADGE_CLASS),
            debug_dir: None,
        }
    }
}

/// How the points-behind column compares abbreviated text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeficitScale {
    /// Only a trailing "M" scales; "1.5K" compares as 1.5.
    #[default]
    MegaOnly,
    /// "K" scales by a thousand as well.
    KiloAndMega,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    /// File path or http(s) URL.
    pub source: String,
    pub deficit_scale: DeficitScale,
    pub export_path: PathBuf,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            source: s!(DEFAULT_DOCUMENT),
            deficit_scale: DeficitScale::default(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}
