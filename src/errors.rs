// src/errors.rs
use std::path::PathBuf;

use thiserror::Error;

/// One profile could not be read. Never fatal for the cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("entry has no profile_url")]
    NoProfile,
    #[error("request failed: {0}")]
    Http(String),
    #[error("points badge `{0}` not found on page")]
    BadgeMissing(String),
    #[error("badge text has no digits: {0:?}")]
    Unparseable(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value.to_string())
    }
}

/// Reading the persisted document. A missing file is not an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt leaderboard document {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Cycle-level failure; always surfaced to the operator.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("cannot set up points fetcher: {0}")]
    Fetcher(#[source] FetchError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Viewer-side load failure. Shown as a status, never a crash.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load {url}: {reason}")]
    Http { url: String, reason: String },
    #[error("invalid leaderboard JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
