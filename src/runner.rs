// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{
        consts::{DEFAULT_LIBRARIES_FILE, DEFAULT_MAPPINGS_FILE},
        options::IndexOptions,
        tables,
    },
    core::net::{Fetch, HttpFetcher},
    data::{ClassIndex, IdSource, Library, SourceMapping},
    error::IndexError,
    file,
    progress::Progress,
    scrape,
    specs::{RowParser, SourceResolver},
};

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub class_count: usize,
    pub library_count: usize,
    pub out_path: PathBuf,
}

/// Top-level runner: load inputs, scrape over HTTP, write the index.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &IndexOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, IndexError> {
    let fetcher = HttpFetcher::new(opts.same_origin_only)?;
    run_with(opts, &fetcher, progress)
}

/// Same as [`run`] with a caller-supplied fetcher.
pub fn run_with(
    opts: &IndexOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, IndexError> {
    let libraries = load_libraries(opts)?;
    let resolver = if opts.source_links {
        load_mappings(opts)?.map(SourceResolver::new)
    } else {
        None
    };

    let parser = RowParser::new(opts, resolver)?;
    let mut ids = IdSource::new(opts.ids);
    let sets = scrape::collect_libraries(fetcher, &parser, &libraries, &mut ids, progress);

    let index = ClassIndex::build(sets, opts.schema);
    let out_path = file::write_index(&opts.out, &index)
        .inspect_err(|e| loge!("Could not write index: {}", e))?;

    logf!("Found {} classes in {} libraries", index.class_count, index.library_count);
    logd!("Wrote {}", out_path.display());

    Ok(RunSummary {
        class_count: index.class_count,
        library_count: index.library_count,
        out_path,
    })
}

/* ---------------- inputs ---------------- */

fn load_libraries(opts: &IndexOptions) -> Result<Vec<Library>, IndexError> {
    if let Some(path) = &opts.libraries {
        return Ok(tables::load_libraries(path)?);
    }
    let default = Path::new(DEFAULT_LIBRARIES_FILE);
    if default.exists() {
        return Ok(tables::load_libraries(default)?);
    }
    logd!("No {} found, using built-in library list", DEFAULT_LIBRARIES_FILE);
    Ok(tables::default_libraries())
}

/// `None` when no mapping table was asked for and none exists.
fn load_mappings(opts: &IndexOptions) -> Result<Option<Vec<SourceMapping>>, IndexError> {
    if let Some(path) = &opts.mappings {
        return Ok(Some(tables::load_mappings(path)?));
    }
    let default = Path::new(DEFAULT_MAPPINGS_FILE);
    if default.exists() {
        return Ok(Some(tables::load_mappings(default)?));
    }
    logd!("No {} found, source links disabled", DEFAULT_MAPPINGS_FILE);
    Ok(None)
}
