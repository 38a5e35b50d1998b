// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_urls_from_file, load_urls_from_source, parse_url_line};

// Re-export analysis functionality from sitesift-core
pub use sitesift_core::analyze::{
    AnalysisProgressCallback, AnalyzeOptions, SeedReport, execute_analysis, extract_url_path,
};
pub use sitesift_core::report::{
    CrawlReport, ReportFormat, generate_json_report, generate_text_report,
};

// Re-export the scanner surface for embedders
pub use sitesift_scanner::{AnalyzeError, Analyzer, SiteAnalysis};
