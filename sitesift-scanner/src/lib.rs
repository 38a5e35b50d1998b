pub mod analyzer;
pub mod classify;
pub mod error;
pub mod extract;
pub mod result;
pub mod sitemap;
pub mod tracking;

pub use analyzer::Analyzer;
pub use error::AnalyzeError;
pub use result::SiteAnalysis;
