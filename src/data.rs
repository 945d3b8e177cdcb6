// src/data.rs
//
// Records produced by a run and the document they are written as.
//
// - Library / SourceMapping: static inputs, read once.
// - ClassRecord: one parsed table row.
// - LibraryRecordSet: records of one library page, in page order.
// - ClassIndex: the JSON root, nested (per library) or flat.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::options::{IdMode, OutputSchema};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub name: String,
    /// Relative to the documentation base, e.g. `/androidx/classes`.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceMapping {
    pub doc_prefix: String,
    pub source_prefix: String,
}

/// API level marker from `data-version-*`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiLevel {
    Level(u32),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Seq(u64),
    Uuid(Uuid),
}

/// Hands out record ids for a whole run. Sequential ids start at 1 and are
/// never reset between libraries.
#[derive(Debug)]
pub struct IdSource {
    mode: IdMode,
    next: u64,
}

impl IdSource {
    pub fn new(mode: IdMode) -> Self {
        Self { mode, next: 1 }
    }

    pub fn next_id(&mut self) -> Option<RecordId> {
        match self.mode {
            IdMode::None => None,
            IdMode::Sequential => {
                let id = self.next;
                self.next += 1;
                Some(RecordId::Seq(id))
            }
            IdMode::Uuid => Some(RecordId::Uuid(Uuid::new_v4())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Only set in the flat schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name_extended: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "added_in_version", default, skip_serializing_if = "Option::is_none")]
    pub added: Option<ApiLevel>,
    #[serde(rename = "deprecated_in_version", default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<ApiLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecordSet {
    #[serde(rename = "library_name")]
    pub name: String,
    pub class_count: usize,
    pub classes: Vec<ClassRecord>,
}

impl LibraryRecordSet {
    pub fn new(name: impl Into<String>, classes: Vec<ClassRecord>) -> Self {
        Self { name: name.into(), class_count: classes.len(), classes }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexEntries {
    Nested(Vec<LibraryRecordSet>),
    Flat(Vec<ClassRecord>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassIndex {
    pub class_count: usize,
    pub classes: IndexEntries,
    #[serde(skip)]
    pub library_count: usize,
}

impl ClassIndex {
    /// Assemble the output document from per-library results, in library order.
    pub fn build(sets: Vec<LibraryRecordSet>, schema: OutputSchema) -> Self {
        let library_count = sets.len();
        let class_count = sets.iter().map(|s| s.class_count).sum();

        let classes = match schema {
            OutputSchema::Nested => IndexEntries::Nested(sets),
            OutputSchema::Flat => IndexEntries::Flat(
                sets.into_iter()
                    .flat_map(|set| {
                        let name = set.name;
                        set.classes.into_iter().map(move |mut rec| {
                            rec.library = Some(name.clone());
                            rec
                        })
                    })
                    .collect(),
            ),
        };

        Self { class_count, classes, library_count }
    }
}
