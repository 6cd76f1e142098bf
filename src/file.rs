// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::csv::rows_to_string;

/// Write a table (headers + rows) as CSV/TSV, creating parent dirs.
/// If `path` looks like a directory, `default_filename` is appended.
/// Returns the final path written to.
pub fn write_table(
    path: &Path,
    default_filename: &str,
    headers: &[String],
    rows: &[Vec<String>],
    sep: char,
) -> io::Result<PathBuf> {
    let path = resolve_single_out_path(path, default_filename)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, rows_to_string(rows, Some(headers), sep))?;
    Ok(path)
}

/// Empty → default file; trailing separator or existing dir → default file inside it.
pub fn resolve_single_out_path(user_o: &Path, default_filename: &str) -> io::Result<PathBuf> {
    if user_o.as_os_str().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    if looks_like_dir_hint(user_o) || user_o.is_dir() {
        ensure_directory(user_o)?;
        Ok(user_o.join(default_filename))
    } else {
        Ok(user_o.to_path_buf())
    }
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// Separator implied by the file extension: `.tsv` → tab, anything else → comma.
pub fn sep_for_path(p: &Path) -> char {
    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => '\t',
        _ => ',',
    }
}
