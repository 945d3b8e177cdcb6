// tests/row_parsing.rs
//
// Row → record extraction against a captured-style reference page.
//
use android_class_index::config::options::{IdMode, IndexOptions, VersionFormat};
use android_class_index::data::{ApiLevel, ClassRecord, IdSource, SourceMapping};
use android_class_index::specs::{RowParser, SourceResolver};

const PAGE: &str = include_str!("fixtures/view_classes.html");

fn parse(opts: &IndexOptions, resolver: Option<SourceResolver>) -> Vec<ClassRecord> {
    let parser = RowParser::new(opts, resolver).unwrap();
    parser.parse_page(PAGE, &mut IdSource::new(opts.ids))
}

fn by_name<'a>(recs: &'a [ClassRecord], name: &str) -> &'a ClassRecord {
    recs.iter().find(|r| r.name == name).unwrap()
}

#[test]
fn header_row_is_skipped_and_order_kept() {
    let recs = parse(&IndexOptions::default(), None);
    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["View", "View.OnClickListener", "AdapterView", "R", "Sample"]);
}

#[test]
fn extended_name_only_when_cell_text_differs() {
    let recs = parse(&IndexOptions::default(), None);
    assert_eq!(by_name(&recs, "View").name_extended, "");
    assert_eq!(by_name(&recs, "AdapterView").name_extended, "AdapterView<T extends Adapter>");
}

#[test]
fn description_is_whitespace_normalized() {
    let recs = parse(&IndexOptions::default(), None);
    assert_eq!(
        by_name(&recs, "AdapterView").description,
        "An AdapterView is a view whose children are determined by an Adapter."
    );
    assert_eq!(by_name(&recs, "R").description, "");
}

#[test]
fn link_is_the_anchor_href() {
    let recs = parse(&IndexOptions::default(), None);
    assert_eq!(by_name(&recs, "View").link, "/classes/android/view/View.html");
}

#[test]
fn versions_as_text() {
    let recs = parse(&IndexOptions::default(), None);
    let listener = by_name(&recs, "View.OnClickListener");
    assert_eq!(listener.added, Some(ApiLevel::Text("1".into())));
    assert_eq!(listener.deprecated, Some(ApiLevel::Text("30".into())));
    assert_eq!(by_name(&recs, "Sample").added, None);
}

#[test]
fn versions_as_levels() {
    let opts = IndexOptions { versions: VersionFormat::Level, ..IndexOptions::default() };
    let recs = parse(&opts, None);
    assert_eq!(by_name(&recs, "AdapterView").added, Some(ApiLevel::Level(3)));
    assert_eq!(by_name(&recs, "View.OnClickListener").deprecated, Some(ApiLevel::Level(30)));
}

#[test]
fn versioned_only_drops_unmarked_rows() {
    let opts = IndexOptions { only_versioned_rows: true, ..IndexOptions::default() };
    let recs = parse(&opts, None);
    assert_eq!(recs.len(), 4);
    assert!(recs.iter().all(|r| r.name != "Sample"));
}

#[test]
fn sequential_ids_follow_row_order() {
    let opts = IndexOptions { ids: IdMode::Sequential, ..IndexOptions::default() };
    let recs = parse(&opts, None);
    let ids: Vec<String> = recs
        .iter()
        .map(|r| serde_json::to_string(&r.id).unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn source_links_resolved_per_row() {
    let resolver = SourceResolver::new(vec![SourceMapping {
        doc_prefix: "/classes".into(),
        source_prefix: "/platform/frameworks/base/+/master/core/java/".into(),
    }]);
    let recs = parse(&IndexOptions::default(), Some(resolver));

    let base = "https://android.googlesource.com/platform/frameworks/base/+/master/core/java/";
    assert_eq!(by_name(&recs, "View").source_link, format!("{base}android/view/View.java"));
    // Nested type maps to its outer file
    assert_eq!(
        by_name(&recs, "View.OnClickListener").source_link,
        format!("{base}android/view/View.java")
    );
    assert_eq!(by_name(&recs, "R").source_link, "");
}
