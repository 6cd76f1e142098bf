// src/store.rs
//! Persisted leaderboard document on disk.
//!
//! - Missing file: start from an empty document (first run).
//! - Any other read error, or invalid JSON: `LoadError`, nothing gets written.
//! - Saves go to a sibling temp file first and are renamed into place.

use std::{fs, io, path::{Path, PathBuf}};

use crate::{
    errors::{LoadError, WriteError},
    file::ensure_directory,
    model::LeaderboardDocument,
};

pub fn load(path: &Path) -> Result<LeaderboardDocument, LoadError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logf!("Store: {} not found, starting empty", path.display());
            return Ok(LeaderboardDocument::empty());
        }
        Err(source) => {
            return Err(LoadError::Io { path: path.to_path_buf(), source });
        }
    };

    let doc = LeaderboardDocument::from_json(&text)
        .map_err(|source| LoadError::Corrupt { path: path.to_path_buf(), source })?;

    logd!("Store: Loaded {} (entries={})", path.display(), doc.len());
    Ok(doc)
}

pub fn save(path: &Path, doc: &LeaderboardDocument) -> Result<(), WriteError> {
    let io_err = |source| WriteError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let mut json = doc.to_json_pretty()?;
    json.push('\n');

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(e));
    }

    logd!("Store: Saved {} (entries={})", path.display(), doc.len());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
