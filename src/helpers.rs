//! Template helpers shared by every page.
//!
//! Three small, pure decisions drive all conditional output on the site:
//!
//! - [`compose_header`]: put the page title into the shared header markup
//! - [`is_active`] / [`active_marker`]: which navigation tab is selected
//! - [`copyright_text`]: the footer year range
//!
//! The only impure input is the current year, read through the [`Clock`]
//! trait so tests (and reproducible builds) can pin it. [`js_string`] quotes
//! config values for the inline scripts.

use chrono::Datelike;
use maud::html;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Marker in the shared header markup that receives the page title.
/// Must occur exactly once in that markup.
pub const TITLE_PLACEHOLDER: &str = "<!--TITLE-->";

/// CSS class emitted on the navigation entry of the current section.
pub const ACTIVE_MARKER: &str = "selected";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("header markup does not contain the title placeholder <!--TITLE-->")]
    InvalidTitlePlaceholder,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("system clock unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Clock
// ============================================================================

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> Result<i32, ClockError>;
}

/// Reads the host clock and reports the year in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> Result<i32, ClockError> {
        // Read through `SystemTime` so a clock set before the epoch is a
        // `ClockError` rather than a bogus year.
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError::Unavailable(e.to_string()))?;
        let secs = i64::try_from(since_epoch.as_secs())
            .map_err(|e| ClockError::Unavailable(e.to_string()))?;
        let utc = chrono::DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| ClockError::Unavailable(format!("timestamp {secs} out of range")))?;
        Ok(utc.with_timezone(&chrono::Local).year())
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> Result<i32, ClockError> {
        Ok(self.0)
    }
}

// ============================================================================
// Header title
// ============================================================================

/// Replace the first [`TITLE_PLACEHOLDER`] in `header` with the escaped title.
///
/// Nothing else in the markup is touched.
pub fn compose_header(header: &str, title: &str) -> Result<String, TemplateError> {
    if !header.contains(TITLE_PLACEHOLDER) {
        return Err(TemplateError::InvalidTitlePlaceholder);
    }
    let escaped = html! { (title) }.into_string();
    Ok(header.replacen(TITLE_PLACEHOLDER, &escaped, 1))
}

// ============================================================================
// Active tab
// ============================================================================

/// Whether `tag` names the section the request `path` belongs to.
///
/// A tag is active when the last path segment without its extension equals
/// the tag (`/aboutUs.html` → `aboutUs`), or when the page sits directly in
/// a directory named after the tag (`/documentation/hostAPI.html` →
/// `documentation`).
pub fn is_active(path: &str, tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    let trimmed = path.trim_end_matches('/');
    let (dir, file) = trimmed.rsplit_once('/').unwrap_or(("", trimmed));
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);

    stem == tag || dir.strip_prefix('/') == Some(tag)
}

/// [`ACTIVE_MARKER`] when `tag` is active for `path`, otherwise `""`.
pub fn active_marker(path: &str, tag: &str) -> &'static str {
    if is_active(path, tag) { ACTIVE_MARKER } else { "" }
}

// ============================================================================
// Copyright
// ============================================================================

/// Footer year range: `© 2014 - 2024`, or `© 2024` when both years match.
///
/// Without a current year, or with one before the start year, the text
/// degrades to the start year alone.
pub fn copyright_text(start_year: i32, current_year: Option<i32>) -> String {
    match current_year {
        Some(year) if year > start_year => format!("\u{a9} {start_year} - {year}"),
        _ => format!("\u{a9} {start_year}"),
    }
}

/// [`copyright_text`] with the current year read from `clock`.
pub fn copyright(start_year: i32, clock: &dyn Clock) -> String {
    copyright_text(start_year, clock.current_year().ok())
}

// ============================================================================
// Script embedding
// ============================================================================

/// Quote `value` as a JavaScript string literal that is safe inside `<script>`.
pub fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn current_year(&self) -> Result<i32, ClockError> {
            Err(ClockError::Unavailable("no rtc".to_string()))
        }
    }

    // =========================================================================
    // compose_header
    // =========================================================================

    #[test]
    fn compose_header_replaces_placeholder() {
        let header = "<head><title><!--TITLE--></title></head>";
        let out = compose_header(header, "OCCA: Documentation").unwrap();
        assert_eq!(out, "<head><title>OCCA: Documentation</title></head>");
    }

    #[test]
    fn compose_header_leaves_surroundings_untouched() {
        let header = "a <!--TITLE--> b";
        let out = compose_header(header, "T").unwrap();
        assert_eq!(out, "a T b");
    }

    #[test]
    fn compose_header_only_replaces_first_occurrence() {
        let header = "<!--TITLE-->|<!--TITLE-->";
        let out = compose_header(header, "x").unwrap();
        assert_eq!(out, "x|<!--TITLE-->");
    }

    #[test]
    fn compose_header_escapes_title() {
        let out = compose_header("<title><!--TITLE--></title>", "<script>&").unwrap();
        assert_eq!(out, "<title>&lt;script&gt;&amp;</title>");
    }

    #[test]
    fn compose_header_without_placeholder_is_error() {
        let result = compose_header("<head><title>OCCA</title></head>", "Docs");
        assert_eq!(result, Err(TemplateError::InvalidTitlePlaceholder));
    }

    // =========================================================================
    // is_active / active_marker
    // =========================================================================

    #[test]
    fn active_on_exact_page_name() {
        assert_eq!(active_marker("/aboutUs.php", "aboutUs"), "selected");
        assert!(is_active("/aboutUs.html", "aboutUs"));
    }

    #[test]
    fn active_on_parent_directory() {
        assert_eq!(
            active_marker("/documentation/hostAPI.php", "documentation"),
            "selected"
        );
    }

    #[test]
    fn inactive_on_other_page() {
        assert_eq!(active_marker("/index.php", "aboutUs"), "");
        assert!(!is_active("/documentation.html", "aboutUs"));
    }

    #[test]
    fn active_without_extension() {
        assert!(is_active("/tutorials", "tutorials"));
    }

    #[test]
    fn active_with_trailing_slash() {
        assert!(is_active("/documentation/", "documentation"));
    }

    #[test]
    fn parent_match_only_applies_to_top_level_directory() {
        assert!(!is_active("/archive/documentation/old.html", "documentation"));
    }

    #[test]
    fn root_path_has_no_active_tab() {
        assert!(!is_active("/", "index"));
        assert!(!is_active("/", ""));
    }

    #[test]
    fn tag_is_case_sensitive() {
        assert!(!is_active("/aboutus.html", "aboutUs"));
    }

    // =========================================================================
    // copyright
    // =========================================================================

    #[test]
    fn copyright_same_year() {
        assert_eq!(copyright_text(2024, Some(2024)), "\u{a9} 2024");
    }

    #[test]
    fn copyright_year_range() {
        assert_eq!(copyright_text(2014, Some(2024)), "\u{a9} 2014 - 2024");
    }

    #[test]
    fn copyright_without_current_year_fails_closed() {
        assert_eq!(copyright_text(2014, None), "\u{a9} 2014");
    }

    #[test]
    fn copyright_never_runs_backwards() {
        assert_eq!(copyright_text(2014, Some(1999)), "\u{a9} 2014");
        assert_eq!(copyright(2014, &FixedClock(1999)), "\u{a9} 2014");
    }

    #[test]
    fn copyright_reads_clock() {
        assert_eq!(copyright(2014, &FixedClock(2026)), "\u{a9} 2014 - 2026");
    }

    #[test]
    fn copyright_broken_clock_uses_start_year() {
        assert_eq!(copyright(2014, &BrokenClock), "\u{a9} 2014");
    }

    #[test]
    fn js_string_quotes_and_escapes() {
        assert_eq!(js_string("ace/theme/chrome"), r#""ace/theme/chrome""#);
        assert_eq!(js_string("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn js_string_cannot_close_script() {
        assert_eq!(js_string("</script>"), r#""<\/script>""#);
    }

    #[test]
    fn system_clock_reports_plausible_year() {
        let year = SystemClock.current_year().unwrap();
        assert!(year >= 2024);
    }
}
