// src/core/html.rs
// Thin helpers over `scraper` for reading table cells.

use scraper::{ElementRef, Selector};

use crate::error::ConfigError;

pub fn selector(css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::Selector {
        css: s!(css),
        reason: e.to_string(),
    })
}

/// All text nodes under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First descendant of `el` matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Trimmed text of the first descendant matching `sel`, or empty.
pub fn child_text(el: ElementRef<'_>, sel: &Selector) -> String {
    first(el, sel)
        .map(|c| text_of(c).trim().to_string())
        .unwrap_or_default()
}

/// Attribute of the first descendant matching `sel`, or empty.
pub fn child_attr(el: ElementRef<'_>, sel: &Selector, attr: &str) -> String {
    first(el, sel)
        .and_then(|c| c.value().attr(attr))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Attribute on `el` itself.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ROW: &str = r#"<table><tr data-x="7"><td class="c"> <a href="/p">P</a>
        tail </td></tr></table>"#;

    #[test]
    fn reads_child_text_and_attrs() {
        let doc = Html::parse_document(ROW);
        let tr_sel = selector("tr").unwrap();
        let tr = doc.select(&tr_sel).next().unwrap();

        assert_eq!(child_text(tr, &selector("td.c").unwrap()), "P\n        tail");
        assert_eq!(child_attr(tr, &selector("td.c > a[href]").unwrap(), "href"), "/p");
        assert_eq!(child_attr(tr, &selector("td.missing a").unwrap(), "href"), "");
        assert_eq!(attr(tr, "data-x"), Some("7"));
    }

    #[test]
    fn bad_selector_is_a_config_error() {
        assert!(matches!(selector("td[["), Err(ConfigError::Selector { .. })));
    }
}
