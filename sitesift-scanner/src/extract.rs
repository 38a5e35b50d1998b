// Anchor extraction and href path resolution

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("link selector is a valid constant"));

/// Collect every non-empty `href` value in document order.
/// Duplicates are preserved; anchors without an `href` are skipped.
pub fn extract_links(document: &Html) -> Vec<String> {
    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(|href| href.to_string())
        .collect()
}

/// Resolve an href against the page URL and isolate its path component
/// for classification.
///
/// Fragment-only links and non-web schemes carry no classifiable path
/// and yield `None`, as do hrefs that fail to resolve at all.
pub fn href_path(base: &Url, href: &str) -> Option<String> {
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return None;
    }

    let resolved = base.join(href).ok()?;
    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    Some(resolved.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/home/").unwrap()
    }

    #[test]
    fn test_extract_links_document_order() {
        let html = Html::parse_document(
            r#"<html><body>
                <a href="/sermons/one">One</a>
                <a href="https://example.com/events/">Two</a>
                <a href="/sermons/one">One again</a>
            </body></html>"#,
        );
        let links = extract_links(&html);
        assert_eq!(
            links,
            vec!["/sermons/one", "https://example.com/events/", "/sermons/one"]
        );
    }

    #[test]
    fn test_extract_links_skips_missing_and_empty_href() {
        let html = Html::parse_document(
            r#"<html><body>
                <a>no href</a>
                <a href="">empty</a>
                <a href="/about">ok</a>
            </body></html>"#,
        );
        assert_eq!(extract_links(&html), vec!["/about"]);
    }

    #[test]
    fn test_href_path_absolute_and_relative() {
        assert_eq!(
            href_path(&base(), "/blog/post-1"),
            Some("/blog/post-1".to_string())
        );
        assert_eq!(
            href_path(&base(), "team/jane"),
            Some("/home/team/jane".to_string())
        );
        assert_eq!(
            href_path(&base(), "https://other.org/events/"),
            Some("/events/".to_string())
        );
    }

    #[test]
    fn test_href_path_excludes_fragments_and_schemes() {
        assert_eq!(href_path(&base(), "#section"), None);
        assert_eq!(href_path(&base(), "mailto:hi@example.com"), None);
        assert_eq!(href_path(&base(), "tel:+15551234567"), None);
        assert_eq!(href_path(&base(), "javascript:void(0)"), None);
        assert_eq!(href_path(&base(), ""), None);
    }

    #[test]
    fn test_href_path_rejects_non_web_scheme() {
        assert_eq!(href_path(&base(), "ftp://example.com/file"), None);
    }
}
