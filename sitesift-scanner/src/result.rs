use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw outcome of analyzing one seed URL, before percentage aggregation.
///
/// Maps are ordered so that serialized output is stable across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteAnalysis {
    pub seed_url: String,
    /// Category label to link count. Every classified link lands in
    /// exactly one bucket.
    pub category_counts: BTreeMap<String, usize>,
    /// Tracking provider to extracted identifier.
    pub tracking_tags: BTreeMap<String, String>,
    /// Raw href values in document order, duplicates preserved.
    /// Populated in HTML mode only; sitemap walks leave this `None`.
    pub crawled_urls: Option<Vec<String>>,
}

impl SiteAnalysis {
    pub fn new(seed_url: String) -> Self {
        Self {
            seed_url,
            category_counts: BTreeMap::new(),
            tracking_tags: BTreeMap::new(),
            crawled_urls: None,
        }
    }

    /// Total number of classified links across all categories.
    pub fn total_links(&self) -> usize {
        self.category_counts.values().sum()
    }
}
