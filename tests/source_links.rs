// tests/source_links.rs
use android_class_index::data::SourceMapping;
use android_class_index::specs::SourceResolver;

const SOURCE_HOST: &str = "https://android.googlesource.com";

fn mapping(doc: &str, src: &str) -> SourceMapping {
    SourceMapping { doc_prefix: doc.into(), source_prefix: src.into() }
}

fn platform() -> SourceResolver {
    SourceResolver::new(vec![mapping("/classes", "/platform/frameworks/base/+/master/core/java/")])
}

#[test]
fn prefix_match_builds_java_path() {
    let got = platform().resolve("/classes/android/view/View.html");
    assert_eq!(
        got.unwrap(),
        format!("{SOURCE_HOST}/platform/frameworks/base/+/master/core/java/android/view/View.java")
    );
}

#[test]
fn generated_r_class_is_excluded() {
    assert_eq!(platform().resolve("/classes/android/R.html"), None);
    assert_eq!(platform().resolve("/classes/android/R.attr.html"), None);
}

#[test]
fn no_matching_prefix_gives_nothing() {
    assert_eq!(platform().resolve("/androidx/core/app/ActivityCompat.html"), None);
}

#[test]
fn first_matching_mapping_wins() {
    let r = SourceResolver::new(vec![
        mapping("/androidx", "/first/"),
        mapping("/androidx/core", "/second/"),
    ]);
    assert_eq!(
        r.resolve("/androidx/core/app/ActivityCompat.html").unwrap(),
        format!("{SOURCE_HOST}/first/core/app/ActivityCompat.java")
    );
}

#[test]
fn excluded_title_does_not_fall_through_to_later_mappings() {
    let r = SourceResolver::new(vec![
        mapping("/classes", "/a/"),
        mapping("/classes/android", "/b/"),
    ]);
    assert_eq!(r.resolve("/classes/android/R.html"), None);
}

#[test]
fn host_relative_reference_links_resolve() {
    let r = SourceResolver::new(vec![mapping(
        "/android/view",
        "/platform/frameworks/base/+/master/core/java/android/view/",
    )]);
    let expected =
        format!("{SOURCE_HOST}/platform/frameworks/base/+/master/core/java/android/view/View.java");
    assert_eq!(r.resolve("/reference/android/view/View").unwrap(), expected);
    assert_eq!(r.resolve("/reference/android/view/View.html").unwrap(), expected);
    assert_eq!(
        r.resolve("https://developer.android.com/reference/android/view/View.html").unwrap(),
        expected
    );
    assert_eq!(r.resolve("/android/view/View.html").unwrap(), expected);
}
