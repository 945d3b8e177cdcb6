// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::net::FetchError;

/// Problems with the run's inputs. Always fatal: no useful index can be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{}:{line}: expected 2 columns, found {found}", path.display())]
    Shape { path: PathBuf, line: usize, found: usize },
    #[error("{} lists no entries", path.display())]
    Empty { path: PathBuf },
    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("{0}")]
    Usage(String),
}
