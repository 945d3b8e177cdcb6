// src/config/tables.rs
//
// Two-column input tables: the library list and the source mapping list.

use std::fs;
use std::path::Path;

use super::consts::{DEFAULT_LIBRARIES, TABLE_SEP};
use crate::csv::{parse_rows, skip_header};
use crate::data::{Library, SourceMapping};
use crate::error::ConfigError;

/// Read a two-column table. Every row must have exactly two non-empty cells.
fn read_pairs(path: &Path, header: &[&str]) -> Result<Vec<(String, String)>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = skip_header(parse_rows(&text, TABLE_SEP), header);
    if rows.is_empty() {
        return Err(ConfigError::Empty { path: path.to_path_buf() });
    }

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let cells: Vec<String> = row.into_iter().map(|c| c.trim().to_string()).collect();
        match cells.as_slice() {
            [a, b] if !a.is_empty() && !b.is_empty() => out.push((a.clone(), b.clone())),
            _ => {
                return Err(ConfigError::Shape {
                    path: path.to_path_buf(),
                    line: i + 1,
                    found: cells.iter().filter(|c| !c.is_empty()).count(),
                });
            }
        }
    }
    Ok(out)
}

pub fn load_libraries(path: &Path) -> Result<Vec<Library>, ConfigError> {
    let pairs = read_pairs(path, &["name", "library", "library_name"])?;
    logd!("Loaded {} libraries from {}", pairs.len(), path.display());
    Ok(pairs.into_iter().map(|(name, path)| Library { name, path }).collect())
}

pub fn load_mappings(path: &Path) -> Result<Vec<SourceMapping>, ConfigError> {
    let pairs = read_pairs(path, &["doc_prefix", "prefix"])?;
    logd!("Loaded {} source mappings from {}", pairs.len(), path.display());
    Ok(pairs
        .into_iter()
        .map(|(doc_prefix, source_prefix)| SourceMapping { doc_prefix, source_prefix })
        .collect())
}

pub fn default_libraries() -> Vec<Library> {
    DEFAULT_LIBRARIES
        .iter()
        .map(|(name, path)| Library { name: s!(*name), path: s!(*path) })
        .collect()
}
