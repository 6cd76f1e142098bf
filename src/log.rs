// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::LOG_FILE;

static INIT: OnceLock<()> = OnceLock::new();

/// Where log lines go.
#[derive(Clone, Debug)]
pub enum LogTarget {
    /// Human-facing runs (the updater CLI).
    Stderr,
    /// Windowed runs; no console to write to.
    File(PathBuf),
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::File(PathBuf::from(LOG_FILE))
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once; only the
/// first call has any effect.
pub fn init(target: LogTarget) {
    INIT.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_timer(Uptime::default())
            .with_target(false);

        let res = match target {
            LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        let _ = fs::create_dir_all(parent);
                    }
                }
                match OpenOptions::new().create(true).append(true).open(&path) {
                    Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
                    // Log file unavailable: use stderr
                    Err(_) => builder.with_writer(std::io::stderr).try_init(),
                }
            }
        };
        // Another subscriber (e.g. a test harness) got there first
        let _ = res;
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
