//! Shared test utilities for the occa-site test suite.
//!
//! Provides a site pinned to a fixed year plus assertions about the
//! structure of composed documents.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = test_site();
//! let html = site.render("/aboutUs.html").unwrap();
//!
//! assert_single_chrome(&html);
//! assert_in_order(&html, &[HEADER_MARK, MENU_MARK, FOOTER_MARK]);
//! ```

use crate::config::SiteConfig;
use crate::helpers::FixedClock;
use crate::site::Site;

/// Opening tag of the header fragment.
pub const HEADER_MARK: &str = "<head>";
/// Root element of the menu fragment.
pub const MENU_MARK: &str = r#"id="id_topMenu""#;
/// Root element of the footer fragment.
pub const FOOTER_MARK: &str = r#"id="id_footer""#;

/// Default config, copyright range ending in 2024.
pub fn test_site() -> Site {
    Site::with_clock(SiteConfig::default(), FixedClock(2024))
}

/// Panics unless header, menu, and footer each appear exactly once.
pub fn assert_single_chrome(html: &str) {
    for mark in [HEADER_MARK, MENU_MARK, FOOTER_MARK] {
        let count = html.matches(mark).count();
        assert_eq!(count, 1, "expected exactly one {mark}, found {count}");
    }
}

/// Panics unless every needle occurs, each after the previous one.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("{needle:?} not found after byte {from}"),
        }
    }
}
