// Ordered content-category rules for URL paths

use regex::Regex;
use std::sync::LazyLock;

/// Label for paths no rule matches.
pub const CATCH_ALL_CATEGORY: &str = "Other";

/// Coarse bucket for sitemap leaf URLs, which are tallied without
/// consulting the rule table.
pub const PAGES_CATEGORY: &str = "Pages";

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("invalid classification rule '{}': {}", pattern, e))
}

/// The canonical rule table. Order is significant: the first matching
/// rule wins, so earlier entries take priority when a path contains
/// keywords from more than one rule. Keywords must appear as a whole
/// path segment (preceded by `/`, followed by `/` or end of path).
static CONTENT_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            rule(r"/(sermon|sermons|message|messages|watch)(/|$)"),
            "Sermons",
        ),
        (
            rule(r"/(event|events|webinar|workshop|conference|calendar)(/|$)"),
            "Events",
        ),
        (rule(r"/(about|contact|faq|beliefs|visit)(/|$)"), "Info"),
        (
            rule(r"/(blog|article|articles|post|posts|news)(/|$)"),
            "Articles",
        ),
        (rule(r"/(staff|people|team|leadership)(/|$)"), "Staff"),
        (
            rule(r"/(ministry|ministries|youth|adults|young-adults|kids|children)(/|$)"),
            "Ministries",
        ),
        (
            rule(r"/(episode|episodes|podcast|podcasts)(/|$)"),
            "Podcasts",
        ),
        (
            rule(r"/(group|groups|home-group|connect-group|small-group)(/|$)"),
            "Groups",
        ),
        (
            rule(r"/(resource|resources|download|downloads|ebook|whitepaper)(/|$)"),
            "Resources",
        ),
        (
            rule(r"/(product|products|item|service|services|store|shop)(/|$)"),
            "Products",
        ),
    ]
});

/// Classify a URL path into exactly one content category.
///
/// Total over all string input: paths no rule matches (including the
/// empty string) fall into the catch-all category.
pub fn classify(path: &str) -> &'static str {
    for (pattern, label) in CONTENT_RULES.iter() {
        if pattern.is_match(path) {
            return *label;
        }
    }
    CATCH_ALL_CATEGORY
}
