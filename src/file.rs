// src/file.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::data::ClassIndex;
use crate::error::ExportError;

/// Pretty JSON (two-space indent) for the whole index.
pub fn to_json_string(index: &ClassIndex) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(index)?)
}

/// Write the index to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_index(path: &Path, index: &ClassIndex) -> Result<PathBuf, ExportError> {
    let json = to_json_string(index)?;
    let write_err = |source| ExportError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        ensure_directory(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;
    Ok(path.to_path_buf())
}

/// Create a directory (and parents). An empty path means the working directory.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}
