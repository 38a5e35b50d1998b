use sitesift::handlers::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use url::Url;

#[test]
fn test_parse_url_line_with_scheme() {
    let result = parse_url_line("https://example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_url_line_without_scheme() {
    let result = parse_url_line("example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_url_line_invalid() {
    let result = parse_url_line("not a valid url!!!");
    assert_eq!(result, None);
}

#[test]
fn test_extract_url_path() {
    assert_eq!(
        extract_url_path("https://example.com/sermons/grace"),
        "/sermons/grace"
    );
    assert_eq!(extract_url_path("https://example.com/"), "/");
    assert_eq!(extract_url_path("https://example.com"), "/");
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com")?;
    writeln!(temp_file, "gracechapel.org")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "https://example.com/sitemap.xml")?;

    let path = PathBuf::from(temp_file.path());
    let urls = load_urls_from_file(&path)?;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0], "https://example.com");
    assert_eq!(urls[1], "https://gracechapel.org");
    assert_eq!(urls[2], "https://example.com/sitemap.xml");

    Ok(())
}

#[test]
fn test_load_urls_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_urls_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid URLs"));
}

#[test]
fn test_load_urls_from_source_single_url() {
    let url = Url::parse("https://example.com").unwrap();
    let result = load_urls_from_source(Some(&url), None).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0], "https://example.com/");
}

#[test]
fn test_load_urls_from_source_no_input() {
    let result = load_urls_from_source(None, None);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .contains("Either --url or --hosts-file must be provided")
    );
}

#[test]
fn test_generate_text_report_from_analysis() {
    use sitesift::{CrawlReport, generate_text_report};
    use sitesift_scanner::SiteAnalysis;

    let mut analysis = SiteAnalysis::new("https://example.com/".to_string());
    analysis.category_counts.insert("Sermons".to_string(), 3);
    analysis.category_counts.insert("Other".to_string(), 1);
    analysis
        .tracking_tags
        .insert("TikTok Pixel".to_string(), "ABCDE12345".to_string());

    let report = CrawlReport::from_analysis(analysis);
    let text = generate_text_report("https://example.com/", &report);

    assert!(text.contains("Pages counted: 4"));
    assert!(text.contains("3 Sermons (75.00%)"));
    assert!(text.contains("TikTok Pixel: ABCDE12345"));
}
