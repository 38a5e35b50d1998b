use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Malformed document at {url}: {reason}")]
    MalformedDocument { url: String, reason: String },

    #[error("Sitemap cycle detected at {url}")]
    SitemapCycle { url: String },

    #[error("Sitemap recursion depth exceeded at {url} (depth {depth})")]
    SitemapDepthExceeded { url: String, depth: usize },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
