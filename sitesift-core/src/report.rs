// Report assembly and rendering

use serde::{Deserialize, Serialize};
use sitesift_scanner::SiteAnalysis;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// The terminal output of one analysis. Field names follow the
/// published response shape, so serialized reports are directly
/// consumable by existing clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrawlReport {
    pub page_count: usize,
    pub content_types: BTreeMap<String, usize>,
    pub content_type_breakdown: BTreeMap<String, String>,
    pub tracking_tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawled_urls: Option<Vec<String>>,
}

impl CrawlReport {
    /// Assemble the report from a finished analysis. The breakdown is
    /// derived here, after the tally is final, never while counting.
    pub fn from_analysis(analysis: SiteAnalysis) -> Self {
        let page_count = analysis.total_links();
        let content_type_breakdown = breakdown(&analysis.category_counts);

        Self {
            page_count,
            content_types: analysis.category_counts,
            content_type_breakdown,
            tracking_tags: analysis.tracking_tags,
            crawled_urls: analysis.crawled_urls,
        }
    }
}

/// Percentage share per category, two decimal places with a trailing
/// percent sign. An empty tally yields an empty map so the division is
/// never evaluated with a zero total.
pub fn breakdown(tally: &BTreeMap<String, usize>) -> BTreeMap<String, String> {
    let total: usize = tally.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }

    tally
        .iter()
        .map(|(label, count)| {
            let percent = *count as f64 / total as f64 * 100.0;
            (label.clone(), format!("{:.2}%", percent))
        })
        .collect()
}

/// Generate a plain-text report for terminal display
pub fn generate_text_report(seed_url: &str, report: &CrawlReport) -> String {
    let mut out = String::new();
    out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    out.push_str(&format!("# {}\n\n", seed_url));
    out.push_str("## Summary:\n");
    out.push_str(&format!("  Pages counted: {}\n", report.page_count));
    out.push_str(&format!(
        "  Tracking tags found: {}\n",
        report.tracking_tags.len()
    ));
    out.push('\n');

    if !report.content_types.is_empty() {
        out.push_str("## Content types:\n");
        for (label, count) in &report.content_types {
            let share = report
                .content_type_breakdown
                .get(label)
                .map(String::as_str)
                .unwrap_or("0.00%");
            out.push_str(&format!("  {} {} ({})\n", count, label, share));
        }
        out.push('\n');
    }

    if !report.tracking_tags.is_empty() {
        out.push_str("## Tracking tags:\n");
        for (provider, id) in &report.tracking_tags {
            out.push_str(&format!("  {}: {}\n", provider, id));
        }
        out.push('\n');
    }

    if let Some(ref crawled) = report.crawled_urls {
        out.push_str(&format!("## Crawled URLs ({}):\n", crawled.len()));
        for url in crawled {
            out.push_str(&format!("  {}\n", url));
        }
        out.push('\n');
    }

    out
}

/// Generate a JSON report in the published response shape
pub fn generate_json_report(report: &CrawlReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
