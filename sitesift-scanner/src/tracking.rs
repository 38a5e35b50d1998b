// Third-party tracking detection over script elements

use regex::Regex;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Reported value when a provider is recognized but no identifier can
/// be captured from either the inline body or the script source.
pub const DETECTED_SENTINEL: &str = "Detected";

/// Detection patterns for one tracking provider.
///
/// `content_pattern` is tried against the inline script body first and
/// the `src` attribute second, so it may carry the capture group for
/// identifiers that only ever appear in a script URL.
pub struct TrackingSignature {
    pub name: &'static str,
    pub content_pattern: Regex,
    pub script_src_pattern: Regex,
}

static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("script selector is a valid constant"));

fn signature_pattern(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("invalid tracking signature '{}': {}", pattern, e))
}

static TRACKING_SIGNATURES: LazyLock<Vec<TrackingSignature>> = LazyLock::new(|| {
    vec![
        TrackingSignature {
            name: "Google Analytics",
            content_pattern: signature_pattern(
                r#"(?:gtag\(\s*['"]config['"]\s*,\s*['"]|gtag/js\?id=)((?:G|UA)-[A-Za-z0-9_-]+)"#,
            ),
            script_src_pattern: signature_pattern(r"googletagmanager\.com/gtag/js"),
        },
        TrackingSignature {
            name: "Google Tag Manager",
            content_pattern: signature_pattern(
                r#"(?:['"]dataLayer['"]\s*,\s*['"]|gtm\.js\?id=)(GTM-[A-Z0-9]+)"#,
            ),
            script_src_pattern: signature_pattern(r"googletagmanager\.com/gtm\.js"),
        },
        TrackingSignature {
            name: "Facebook Pixel",
            content_pattern: signature_pattern(r#"fbq\(\s*['"]init['"]\s*,\s*['"](\d+)['"]"#),
            script_src_pattern: signature_pattern(r"connect\.facebook\.net"),
        },
        TrackingSignature {
            name: "HubSpot",
            content_pattern: signature_pattern(r"js\.hs-scripts\.com/(\d+)\.js"),
            script_src_pattern: signature_pattern(r"js\.hs-scripts\.com"),
        },
        TrackingSignature {
            name: "TikTok Pixel",
            content_pattern: signature_pattern(r#"ttq\.load\(\s*['"]([A-Za-z0-9_-]+)['"]"#),
            script_src_pattern: signature_pattern(r"analytics\.tiktok\.com"),
        },
        TrackingSignature {
            name: "Hotjar",
            content_pattern: signature_pattern(r"hjid\s*[:=]\s*(\d+)"),
            script_src_pattern: signature_pattern(r"static\.hotjar\.com"),
        },
        TrackingSignature {
            name: "LinkedIn Insight",
            content_pattern: signature_pattern(r#"_linkedin_partner_id\s*=\s*['"](\d+)['"]"#),
            script_src_pattern: signature_pattern(r"snap\.licdn\.com"),
        },
    ]
});

/// Scan every script element for known tracking integrations.
///
/// A provider is detected when its src pattern matches the `src`
/// attribute or its content pattern matches the inline body. The
/// identifier is capture group 1 of the content pattern, tried against
/// the inline body first and the src second. Later matches overwrite
/// earlier ones.
pub fn detect_tracking(document: &Html) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();

    for element in document.select(&SCRIPT_SELECTOR) {
        let inline: String = element.text().collect();
        let src = element.value().attr("src").unwrap_or("");

        for signature in TRACKING_SIGNATURES.iter() {
            let src_hit = signature.script_src_pattern.is_match(src);
            let content_hit = signature.content_pattern.is_match(&inline);
            if !src_hit && !content_hit {
                continue;
            }

            let id = signature
                .content_pattern
                .captures(&inline)
                .or_else(|| signature.content_pattern.captures(src))
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DETECTED_SENTINEL.to_string());

            tags.insert(signature.name.to_string(), id);
        }
    }

    tags
}
