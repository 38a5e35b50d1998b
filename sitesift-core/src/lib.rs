pub mod analyze;
pub mod report;

use colored::Colorize;

pub fn print_banner() {
    let banner = r#"
   _____ _ __            _ ______
  / ___/(_) /____  _____(_) __/ /_
  \__ \/ / __/ _ \/ ___/ / /_/ __/
 ___/ / / /_/  __(__  ) / __/ /_
/____/_/\__/\___/____/_/_/  \__/
"#;
    println!("{}", banner.bright_cyan());
    println!(
        "{}",
        format!(
            "  site content classifier and sitemap crawler v{}",
            env!("CARGO_PKG_VERSION")
        )
        .bright_white()
    );
    println!();
}
