use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sitesift_core::report::{ReportFormat, generate_json_report, generate_text_report};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

// Re-export analysis functionality from sitesift-core
pub use sitesift_core::analyze::{
    AnalysisProgressCallback, AnalyzeOptions, SeedReport, execute_analysis, extract_url_path,
};

// Helper functions for the analyze handler

/// Load URLs from either a file or a single URL argument
pub fn load_urls_from_source(
    url: Option<&Url>,
    hosts_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(hosts_file_path) = hosts_file {
        load_urls_from_file(hosts_file_path)
    } else if let Some(url) = url {
        Ok(vec![url.as_str().to_string()])
    } else {
        Err("Either --url or --hosts-file must be provided".to_string())
    }
}

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hosts file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Parse a single line as a URL, trying to add https:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    // Try adding https://
    let with_scheme = format!("https://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    eprintln!("⚠️  Skipping invalid URL '{}'", line);
    None
}

pub async fn handle_analyze(sub_matches: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = sub_matches.get_one::<Url>("url");
    let hosts_file = sub_matches.get_one::<PathBuf>("hosts-file");
    let timeout_secs = *sub_matches.get_one::<u64>("timeout").unwrap_or(&10);
    let max_sitemap_depth = *sub_matches.get_one::<usize>("max-sitemap-depth").unwrap_or(&8);
    let output = sub_matches.get_one::<PathBuf>("output");

    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);

    // Load URLs from source
    let urls = match load_urls_from_source(url, hosts_file) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    };

    println!("\n🔍 Analyzing {} host(s)", urls.len());
    println!("Timeout: {}s", timeout_secs);
    println!("Max sitemap depth: {}\n", max_sitemap_depth);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Analyzing...");

    let options = AnalyzeOptions {
        urls,
        timeout_secs,
        max_sitemap_depth,
    };

    let spinner_clone = spinner.clone();
    let progress_callback = Arc::new(move |msg: String| {
        spinner_clone.set_message(msg);
    });

    let results = execute_analysis(options, Some(progress_callback)).await;
    spinner.finish_and_clear();

    // Render every successful report; surface failures on stderr
    let mut rendered = String::new();
    let mut failures = 0;
    for seed_report in &results {
        match &seed_report.outcome {
            Ok(report) => {
                let section = match format {
                    ReportFormat::Text => generate_text_report(&seed_report.seed_url, report),
                    ReportFormat::Json => match generate_json_report(report) {
                        Ok(json) => format!("{}\n", json),
                        Err(e) => {
                            eprintln!(
                                "{} Failed to serialize report for {}: {}",
                                "✗".red().bold(),
                                seed_report.seed_url,
                                e
                            );
                            failures += 1;
                            continue;
                        }
                    },
                };
                rendered.push_str(&section);
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "✗".red().bold(), seed_report.seed_url, e);
            }
        }
    }

    // Write to file or stdout
    if let Some(output_path) = output {
        let expanded = shellexpand::tilde(&output_path.display().to_string()).to_string();
        match fs::write(&expanded, &rendered) {
            Ok(()) => println!("{} Report saved to {}", "✓".green().bold(), expanded),
            Err(e) => {
                eprintln!("{} Failed to write {}: {}", "✗".red().bold(), expanded, e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", rendered);
    }

    if failures > 0 {
        std::process::exit(1);
    }
    println!("{} Analysis complete", "✓".green().bold());
}
