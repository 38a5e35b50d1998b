// Sitemap XML decoding

use crate::error::{AnalyzeError, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// A decoded sitemap document. An index lists further sitemap
/// documents; a urlset lists leaf page URLs. Transient, only alive
/// during a walk.
#[derive(Debug)]
pub enum SitemapNode {
    Index(Vec<String>),
    UrlSet(Vec<String>),
}

impl SitemapNode {
    /// Child location strings in document order, regardless of shape.
    pub fn locations(self) -> Vec<String> {
        match self {
            SitemapNode::Index(locs) | SitemapNode::UrlSet(locs) => locs,
        }
    }
}

/// Decode a sitemap document, collecting `<loc>` entries in document
/// order. Tag names are matched by suffix so namespace prefixes do not
/// matter. A document that is neither a `<sitemapindex>` nor a
/// `<urlset>` is malformed, as is any XML the reader rejects.
pub fn parse_sitemap(url: &str, xml: &str) -> Result<SitemapNode> {
    let malformed = |reason: String| AnalyzeError::MalformedDocument {
        url: url.to_string(),
        reason,
    };

    let mut reader = Reader::from_str(xml);
    let mut in_loc = false;
    let mut saw_index = false;
    let mut saw_urlset = false;
    let mut locs: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let name = name.as_ref();
                if name.ends_with(b"sitemapindex") {
                    saw_index = true;
                } else if name.ends_with(b"urlset") {
                    saw_urlset = true;
                } else if name.ends_with(b"loc") {
                    in_loc = true;
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref().ends_with(b"loc") {
                    in_loc = false;
                }
            }
            Ok(Event::Text(t)) => {
                if in_loc {
                    let loc = t.unescape().map_err(|e| malformed(e.to_string()))?;
                    let loc = loc.trim();
                    if !loc.is_empty() {
                        locs.push(loc.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(e.to_string())),
            Ok(_) => {}
        }
    }

    if saw_index && !saw_urlset {
        Ok(SitemapNode::Index(locs))
    } else if saw_urlset {
        Ok(SitemapNode::UrlSet(locs))
    } else {
        Err(malformed(
            "document is neither <sitemapindex> nor <urlset>".to_string(),
        ))
    }
}

/// Whether a location string refers to another sitemap document.
pub fn is_sitemap_ref(loc: &str) -> bool {
    loc.ends_with(".xml")
}
