use crate::classify::{PAGES_CATEGORY, classify};
use crate::error::{AnalyzeError, Result};
use crate::extract::{extract_links, href_path};
use crate::result::SiteAnalysis;
use crate::sitemap::{SitemapNode, is_sitemap_ref, parse_sitemap};
use crate::tracking::detect_tracking;
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use scraper::Html;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};
use url::Url;

const DEFAULT_MAX_SITEMAP_DEPTH: usize = 8;

pub struct Analyzer {
    client: Client,
    max_sitemap_depth: usize,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Sitesift/0.1 (https://github.com/mkvr/sitesift)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_sitemap_depth: DEFAULT_MAX_SITEMAP_DEPTH,
        }
    }

    pub fn with_max_sitemap_depth(mut self, depth: usize) -> Self {
        self.max_sitemap_depth = depth;
        self
    }

    /// Analyze one seed URL.
    ///
    /// Seeds whose path ends in `.xml` are walked as sitemaps; anything
    /// else is fetched as an HTML page. All state is owned by this
    /// invocation, so concurrent calls share nothing but the compiled
    /// rule tables. Any failure discards the partial tally.
    pub async fn analyze(&self, seed_url: &str) -> Result<SiteAnalysis> {
        let seed = Url::parse(seed_url)
            .map_err(|e| AnalyzeError::InvalidUrl(format!("{}: {}", seed_url, e)))?;
        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(AnalyzeError::InvalidUrl(format!(
                "{}: expected http or https",
                seed_url
            )));
        }

        if seed.path().ends_with(".xml") {
            self.analyze_sitemap(&seed).await
        } else {
            self.analyze_page(&seed).await
        }
    }

    async fn analyze_page(&self, page_url: &Url) -> Result<SiteAnalysis> {
        info!("Analyzing page {}", page_url);

        let body = self.fetch_text(page_url.as_str()).await?;
        let document = Html::parse_document(&body);

        let hrefs = extract_links(&document);
        let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
        for href in &hrefs {
            if let Some(path) = href_path(page_url, href) {
                *category_counts
                    .entry(classify(&path).to_string())
                    .or_insert(0) += 1;
            }
        }

        let tracking_tags = detect_tracking(&document);
        debug!(
            "Page {} yielded {} hrefs, {} tracking tags",
            page_url,
            hrefs.len(),
            tracking_tags.len()
        );

        Ok(SiteAnalysis {
            seed_url: page_url.as_str().to_string(),
            category_counts,
            tracking_tags,
            crawled_urls: Some(hrefs),
        })
    }

    async fn analyze_sitemap(&self, sitemap_url: &Url) -> Result<SiteAnalysis> {
        info!("Walking sitemap {}", sitemap_url);

        let mut analysis = SiteAnalysis::new(sitemap_url.as_str().to_string());
        let mut visited: HashSet<String> = HashSet::new();
        self.walk_sitemap(
            sitemap_url.as_str().to_string(),
            0,
            &mut visited,
            &mut analysis.category_counts,
        )
        .await?;

        debug!(
            "Sitemap {} yielded {} pages across {} documents",
            sitemap_url,
            analysis.total_links(),
            visited.len()
        );
        Ok(analysis)
    }

    /// Depth-first sitemap expansion, children awaited sequentially in
    /// document order. The visited set and the depth ceiling turn
    /// cyclic or runaway indexes into errors instead of hangs.
    fn walk_sitemap<'a>(
        &'a self,
        url: String,
        depth: usize,
        visited: &'a mut HashSet<String>,
        tally: &'a mut BTreeMap<String, usize>,
    ) -> BoxFuture<'a, Result<()>> {
        async move {
            if depth > self.max_sitemap_depth {
                return Err(AnalyzeError::SitemapDepthExceeded { url, depth });
            }
            if !visited.insert(normalize_sitemap_url(&url)) {
                return Err(AnalyzeError::SitemapCycle { url });
            }

            let xml = self.fetch_text(&url).await?;
            let node = parse_sitemap(&url, &xml)?;
            match &node {
                SitemapNode::Index(children) => {
                    debug!("Sitemap index {} lists {} children", url, children.len())
                }
                SitemapNode::UrlSet(leaves) => {
                    debug!("Urlset {} lists {} entries", url, leaves.len())
                }
            }

            for loc in node.locations() {
                if is_sitemap_ref(&loc) {
                    self.walk_sitemap(loc, depth + 1, visited, tally).await?;
                } else {
                    *tally.entry(PAGES_CATEGORY.to_string()).or_insert(0) += 1;
                }
            }

            Ok(())
        }
        .boxed()
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Key for the visited set. Fragments never matter for identity, and a
/// fetch of `http://host` and `http://host/` is the same document.
fn normalize_sitemap_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.as_str().trim_end_matches('/').to_string()
        }
        Err(_) => url.to_string(),
    }
}
