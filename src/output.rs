//! CLI output formatting.
//!
//! Each page is listed by positional index and title, with the file it maps
//! to after an arrow:
//!
//! ```text
//! Pages
//! 001 OCCA → index.html
//! 002 OCCA: About Us → aboutUs.html
//!     Tab: aboutUs
//! ...
//! Assets: 14 files copied
//! Generated 6 pages
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateReport;
use crate::nav;
use crate::pages::Route;
use crate::site::RenderedPage;
use crate::types::RequestContext;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `001 OCCA: About Us → aboutUs.html`, plus the highlighted tab if any.
fn page_lines(index: usize, title: &str, route: Route) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} \u{2192} {}",
        format_index(index),
        title,
        route.output_file()
    )];
    if let Some(tag) = nav::active_tag(&RequestContext::new(route.path())) {
        lines.push(format!("    Tab: {}", tag.as_str()));
    }
    lines
}

/// Format the result of `build`.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in report.pages.iter().enumerate() {
        lines.extend(page_lines(i + 1, &page.title, page.route));
    }
    lines.push(String::new());
    lines.push(format!("Assets: {} files copied", report.assets_copied));
    lines.push(format!("Generated {} pages", report.pages.len()));
    lines
}

/// Print `build` output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

/// Format the result of `check`.
pub fn format_check_output(pages: &[RenderedPage]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.extend(page_lines(i + 1, &page.title, page.route));
        lines.push(format!("    Size: {} bytes", page.html.len()));
    }
    lines
}

/// Print `check` output to stdout.
pub fn print_check_output(pages: &[RenderedPage]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}
