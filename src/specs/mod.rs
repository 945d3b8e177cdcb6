// src/specs/mod.rs
//! # Page reading
//!
//! This module knows **where the data lives** on an Android reference index page
//! and how to turn it into records. Everything here is pure: HTML string in,
//! records out. Fetching, id assignment policy and output live elsewhere.
//!
//! ## What lives here
//! - **`class_table`** – row selection and row → [`ClassRecord`] extraction
//!   (`td.jd-linkcol` anchor, `td.jd-descrcol` text, `data-version-*` attributes).
//! - **`source_link`** – rewriting a documentation link into a source browsing
//!   link through an ordered prefix table.
//!
//! ## Conventions & invariants
//! - Parsing **never fails**: a missing cell or attribute becomes an empty field.
//! - Rows without a link-column anchor are not classes (header rows, spacers)
//!   and are skipped before any id is spent on them.
//! - Rows come out in document order.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_libraries → net::Fetch::get
//!                                   ↘  specs::class_table::RowParser::parse_page
//!                                          ↘ specs::source_link::SourceResolver::resolve
//! ```
//!
//! [`ClassRecord`]: crate::data::ClassRecord
pub mod class_table;
pub mod source_link;

pub use class_table::RowParser;
pub use source_link::SourceResolver;
