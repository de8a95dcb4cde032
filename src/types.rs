//! Per-request values passed between the site, fragments, and pages.
//!
//! Nothing here outlives a single render: a [`RequestContext`] is built from
//! the incoming path, a [`PageDescriptor`] is produced by a page renderer and
//! consumed by document composition.

use crate::helpers;
use maud::Markup;

/// The path being rendered, passed explicitly to anything that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
}

impl RequestContext {
    /// Normalize a raw request path: query and fragment dropped, always
    /// rooted at `/`.
    pub fn new(raw: &str) -> Self {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let path = raw[..end].trim();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self { path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the navigation `tag` is the current section.
    pub fn is_active(&self, tag: &str) -> bool {
        helpers::is_active(&self.path, tag)
    }

    /// `"selected"` for the current section's tag, `""` otherwise.
    pub fn active_marker(&self, tag: &str) -> &'static str {
        helpers::active_marker(&self.path, tag)
    }
}

/// What a page renderer hands to document composition.
#[derive(Debug, Clone)]
pub struct PageDescriptor {
    /// Full `<title>` text, e.g. `OCCA: Documentation`.
    pub title: String,
    /// Page-specific content placed between the menu and the footer.
    pub body: Markup,
    /// Emitted after the footer (widget scripts that need the DOM in place).
    pub trailer: Option<Markup>,
}

impl PageDescriptor {
    pub fn new(title: impl Into<String>, body: Markup) -> Self {
        Self {
            title: title.into(),
            body,
            trailer: None,
        }
    }

    pub fn with_trailer(mut self, trailer: Markup) -> Self {
        self.trailer = Some(trailer);
        self
    }
}
