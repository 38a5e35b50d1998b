// Analysis orchestration over the scanner

use crate::report::CrawlReport;
use sitesift_scanner::{AnalyzeError, Analyzer};
use std::sync::Arc;
use tracing::warn;
use url::Url;

/// Options for one analysis run
pub struct AnalyzeOptions {
    pub urls: Vec<String>,
    pub timeout_secs: u64,
    pub max_sitemap_depth: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            timeout_secs: 10,
            max_sitemap_depth: 8,
        }
    }
}

/// Callback for reporting analysis progress
pub type AnalysisProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Outcome for a single seed. Seeds are independent: one failing does
/// not stop the rest, and no state is shared between them.
pub struct SeedReport {
    pub seed_url: String,
    pub outcome: Result<CrawlReport, AnalyzeError>,
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() { "/".to_string() } else { path }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Analyze each seed URL in sequence and assemble its report.
/// A failure yields a per-seed error, never a partial report.
pub async fn execute_analysis(
    options: AnalyzeOptions,
    progress_callback: Option<AnalysisProgressCallback>,
) -> Vec<SeedReport> {
    let AnalyzeOptions {
        urls,
        timeout_secs,
        max_sitemap_depth,
    } = options;

    let analyzer = Analyzer::with_timeout(timeout_secs).with_max_sitemap_depth(max_sitemap_depth);

    let mut reports = Vec::with_capacity(urls.len());
    for (idx, url) in urls.iter().enumerate() {
        if let Some(ref callback) = progress_callback
            && urls.len() > 1
        {
            callback(format!(
                "Analyzing host {}/{}: {}",
                idx + 1,
                urls.len(),
                url
            ));
        }

        let outcome = analyzer
            .analyze(url)
            .await
            .map(CrawlReport::from_analysis)
            .inspect_err(|e| warn!("Analysis of {} failed: {}", url, e));

        reports.push(SeedReport {
            seed_url: url.clone(),
            outcome,
        });
    }

    reports
}
