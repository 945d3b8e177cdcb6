// src/scrape.rs
//
// One sequential pass over the configured libraries.

use crate::config::consts::BASE_DOC_LINK;
use crate::core::net::{Fetch, FetchError};
use crate::data::{IdSource, Library, LibraryRecordSet};
use crate::progress::Progress;
use crate::specs::RowParser;

pub fn page_url(library: &Library) -> String {
    join!(BASE_DOC_LINK, &library.path)
}

/// Fetch and parse one library page.
pub fn scrape_library(
    fetcher: &dyn Fetch,
    parser: &RowParser,
    library: &Library,
    ids: &mut IdSource,
) -> Result<LibraryRecordSet, FetchError> {
    let url = page_url(library);
    let body = fetcher.get(&url)?;
    let classes = parser.parse_page(&body, ids);
    logd!("{}: {} class rows at {}", library.name, classes.len(), url);
    Ok(LibraryRecordSet::new(library.name.clone(), classes))
}

/// Visit every library in order. A page that cannot be fetched is reported
/// and yields an empty record set; the run goes on.
pub fn collect_libraries(
    fetcher: &dyn Fetch,
    parser: &RowParser,
    libraries: &[Library],
    ids: &mut IdSource,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<LibraryRecordSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(libraries.len());
    }

    let mut sets = Vec::with_capacity(libraries.len());
    for (i, library) in libraries.iter().enumerate() {
        let set = match scrape_library(fetcher, parser, library, ids) {
            Ok(set) => set,
            Err(e) => {
                logw!("Skipping {}: {}", library.name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Failed to fetch {}", e.url().unwrap_or(&library.path)));
                }
                LibraryRecordSet::empty(library.name.clone())
            }
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i, &set.name, set.class_count);
        }
        sets.push(set);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    sets
}
