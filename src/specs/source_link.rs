// src/specs/source_link.rs

use crate::config::consts::{BASE_DOC_LINK, BASE_SOURCE_LINK, GENERATED_SUFFIX, SOURCE_SUFFIX};
use crate::data::SourceMapping;

/// Guesses a source browsing URL for a documented class.
#[derive(Clone, Debug)]
pub struct SourceResolver {
    base_doc: String,
    /// Path part of `base_doc`, e.g. `/reference`, for host-relative links.
    doc_path: String,
    base_source: String,
    mappings: Vec<SourceMapping>,
}

impl SourceResolver {
    pub fn new(mappings: Vec<SourceMapping>) -> Self {
        Self::with_bases(BASE_DOC_LINK, BASE_SOURCE_LINK, mappings)
    }

    pub fn with_bases(base_doc: &str, base_source: &str, mappings: Vec<SourceMapping>) -> Self {
        Self {
            base_doc: s!(base_doc),
            doc_path: s!(path_of(base_doc)),
            base_source: s!(base_source),
            mappings,
        }
    }

    /// Strip the documentation base, absolute (`https://host/reference/...`)
    /// or host-relative (`/reference/...`).
    fn relative<'a>(&self, link: &'a str) -> &'a str {
        if let Some(rest) = link.strip_prefix(self.base_doc.as_str()) {
            return rest;
        }
        if !self.doc_path.is_empty() {
            if let Some(rest) = link.strip_prefix(self.doc_path.as_str()) {
                if rest.starts_with('/') {
                    return rest;
                }
            }
        }
        link
    }

    /// First mapping whose doc prefix matches wins; table order matters.
    ///
    /// `/classes/android/view/View.OnClickListener.html` under a `/classes` mapping
    /// gives the title `android/view/View`. Titles ending in `R` are generated
    /// resource classes and get no link.
    pub fn resolve(&self, link: &str) -> Option<String> {
        let rel = self.relative(link);
        let mapping = self
            .mappings
            .iter()
            .find(|m| rel.starts_with(m.doc_prefix.as_str()))?;

        let rest = rel[mapping.doc_prefix.len()..].trim_start_matches('/');
        let title = match rest.find('.') {
            Some(dot) => &rest[..dot],
            None => rest,
        };
        if title.is_empty() || title.ends_with(GENERATED_SUFFIX) {
            logd!("No source link for {} (title '{}')", link, title);
            return None;
        }

        Some(join!(self.base_source.as_str(), &mapping.source_prefix, title, SOURCE_SUFFIX))
    }
}

/// `https://host/reference` → `/reference`; empty when the base has no path.
fn path_of(base: &str) -> &str {
    let after_scheme = base.split_once("://").map_or(base, |(_, rest)| rest);
    match after_scheme.find('/') {
        Some(i) => after_scheme[i..].trim_end_matches('/'),
        None => "",
    }
}
