// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_OUT_FILE;

/// Shape of the JSON document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputSchema {
    /// `classes` holds one entry per library, each with its own records.
    Nested,
    /// `classes` holds every record; each record names its library.
    Flat,
}

/// How `data-version-*` attributes end up in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VersionFormat {
    Text,
    Level,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdMode {
    None,
    Sequential,
    Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexOptions {
    /// Library table; `None` means `libraries.csv` if present, else the built-in list.
    pub libraries: Option<PathBuf>,
    /// Source mapping table; `None` means `source_mapping.csv` if present.
    pub mappings: Option<PathBuf>,
    pub out: PathBuf,
    pub schema: OutputSchema,
    pub versions: VersionFormat,
    pub ids: IdMode,
    pub source_links: bool,
    pub only_versioned_rows: bool,
    pub same_origin_only: bool,
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            libraries: None,
            mappings: None,
            out: PathBuf::from(DEFAULT_OUT_FILE),
            schema: OutputSchema::Nested,
            versions: VersionFormat::Text,
            ids: IdMode::None,
            source_links: true,
            only_versioned_rows: false,
            same_origin_only: true,
            verbose: false,
            log_file: None,
        }
    }
}

impl IndexOptions {
    /// CSS selector for candidate class rows.
    pub fn row_selector(&self) -> &'static str {
        if self.only_versioned_rows { "tr[data-version-added]" } else { "tr" }
    }
}

impl OutputSchema {
    pub fn parse(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "nested" => Some(Self::Nested),
            "flat" => Some(Self::Flat),
            _ => None,
        }
    }
}

impl VersionFormat {
    pub fn parse(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "text" | "string" => Some(Self::Text),
            "level" | "int" => Some(Self::Level),
            _ => None,
        }
    }
}

impl IdMode {
    pub fn parse(v: &str) -> Option<Self> {
        match v.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "seq" | "sequential" => Some(Self::Sequential),
            "uuid" => Some(Self::Uuid),
            _ => None,
        }
    }
}
