// src/specs/class_table.rs

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{ATTR_ADDED, ATTR_DEPRECATED, DESC_COL, LINK_COL};
use crate::config::options::{IndexOptions, VersionFormat};
use crate::core::html::{self, child_attr, child_text, selector};
use crate::core::sanitize::{normalize_ws, WhitespaceNormalizer};
use crate::data::{ApiLevel, ClassRecord, IdSource};
use crate::error::ConfigError;

struct RowSelectors {
    row: Selector,
    link_cell: Selector,
    link_anchor: Selector,
    desc_cell: Selector,
}

impl RowSelectors {
    fn new(row_css: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            row: selector(row_css)?,
            link_cell: selector(LINK_COL)?,
            link_anchor: selector(&format!("{LINK_COL} > a[href]"))?,
            desc_cell: selector(DESC_COL)?,
        })
    }
}

/// Turns class table rows into records.
pub struct RowParser {
    selectors: RowSelectors,
    ws: WhitespaceNormalizer,
    versions: VersionFormat,
    resolver: Option<super::SourceResolver>,
}

impl RowParser {
    pub fn new(
        opts: &IndexOptions,
        resolver: Option<super::SourceResolver>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            selectors: RowSelectors::new(opts.row_selector())?,
            ws: WhitespaceNormalizer::new(),
            versions: opts.versions,
            resolver,
        })
    }

    /// Candidate rows in document order.
    pub fn rows<'a>(&'a self, doc: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        doc.select(&self.selectors.row)
    }

    /// A class row has an anchor in its link column.
    pub fn is_class_row(&self, row: ElementRef<'_>) -> bool {
        html::first(row, &self.selectors.link_anchor).is_some()
    }

    /// Parse a whole page body into records, taking one id per class row.
    pub fn parse_page(&self, body: &str, ids: &mut IdSource) -> Vec<ClassRecord> {
        let doc = Html::parse_document(body);
        self.rows(&doc)
            .filter(|row| self.is_class_row(*row))
            .map(|row| self.parse_row(row, ids))
            .collect()
    }

    /// Extract one record. Missing cells or attributes become empty fields.
    pub fn parse_row(&self, row: ElementRef<'_>, ids: &mut IdSource) -> ClassRecord {
        let sel = &self.selectors;

        let name = child_text(row, &sel.link_anchor);
        let mut name_extended = normalize_ws(&child_text(row, &sel.link_cell));
        if name_extended == name {
            name_extended.clear();
        }

        let link = child_attr(row, &sel.link_anchor, "href");
        let source_link = self
            .resolver
            .as_ref()
            .and_then(|r| r.resolve(&link))
            .unwrap_or_default();

        let description = self.ws.collapse(&child_text(row, &sel.desc_cell));

        ClassRecord {
            id: ids.next_id(),
            library: None,
            name,
            name_extended,
            link,
            source_link,
            description,
            added: self.version(html::attr(row, ATTR_ADDED)),
            deprecated: self.version(html::attr(row, ATTR_DEPRECATED)),
        }
    }

    /// Missing or blank → absent. In `Level` mode a non-numeric value reads as 0.
    fn version(&self, raw: Option<&str>) -> Option<ApiLevel> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty())?;
        Some(match self.versions {
            VersionFormat::Text => ApiLevel::Text(s!(raw)),
            VersionFormat::Level => ApiLevel::Level(raw.parse().unwrap_or(0)),
        })
    }
}
