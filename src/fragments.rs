//! Shared layout fragments and the root-relative fragment includer.
//!
//! Every page is assembled from the same three fragments:
//!
//! | Path | Fragment |
//! |------|----------|
//! | `/header` | `<head>` element: asset references and the title placeholder |
//! | `/menu` | top navigation bar, active tab from the request context |
//! | `/footer` | copyright line |
//!
//! Fragments are addressed by path so pages include them the same way
//! regardless of where the page itself lives. A path that names no fragment
//! is an error: a page missing its chrome must never be served.

use crate::config::AssetsConfig;
use crate::helpers::{self, TITLE_PLACEHOLDER};
use crate::nav;
use crate::site::Site;
use crate::types::RequestContext;
use maud::{Markup, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("fragment not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Header,
    Menu,
    Footer,
}

impl Fragment {
    pub const ALL: [Fragment; 3] = [Fragment::Header, Fragment::Menu, Fragment::Footer];

    pub fn path(self) -> &'static str {
        match self {
            Fragment::Header => "/header",
            Fragment::Menu => "/menu",
            Fragment::Footer => "/footer",
        }
    }

    /// Look up a fragment by root-relative path; `.html` is optional.
    pub fn resolve(path: &str) -> Result<Fragment, FragmentError> {
        let key = path.strip_suffix(".html").unwrap_or(path);
        Fragment::ALL
            .into_iter()
            .find(|f| f.path() == key)
            .ok_or_else(|| FragmentError::NotFound(path.to_string()))
    }

    pub fn render(self, ctx: &RequestContext, site: &Site) -> Markup {
        let config = site.config();
        match self {
            Fragment::Header => render_header(&config.assets),
            Fragment::Menu => nav::render_menu(ctx, &config.site.name),
            Fragment::Footer => render_footer(
                &helpers::copyright(config.site.copyright_start_year, site.clock()),
                &config.site.copyright_holder,
            ),
        }
    }
}

/// Resolve `path` and render the fragment for this request.
pub fn include(path: &str, ctx: &RequestContext, site: &Site) -> Result<Markup, FragmentError> {
    Ok(Fragment::resolve(path)?.render(ctx, site))
}

/// Inline loader that picks the legacy jQuery build for old browsers.
fn jquery_loader(assets: &AssetsConfig) -> String {
    format!(
        r#"(function () {{
  var eventSupport = ('querySelector' in document && 'addEventListener' in window),
      jsonSupport = (typeof JSON !== 'undefined'),
      src = (eventSupport && jsonSupport) ? {modern} : {legacy};
  document.write('<script src="' + src + '"><\/script>');
}}());"#,
        modern = helpers::js_string(&assets.jquery),
        legacy = helpers::js_string(&assets.jquery_legacy),
    )
}

fn render_header(assets: &AssetsConfig) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (PreEscaped(TITLE_PLACEHOLDER)) }
            link rel="stylesheet" type="text/css" href=(assets.semantic_css);
            link rel="stylesheet" type="text/css" href=(assets.site_css);
            script { (PreEscaped(jquery_loader(assets))) }
            script type="text/javascript" src=(assets.jquery_address) {}
            script type="text/javascript" src=(assets.semantic_js) {}
            script type="text/javascript" src=(assets.site_js) {}
        }
    }
}

fn render_footer(copyright: &str, holder: &str) -> Markup {
    html! {
        div.ui.footer #id_footer {
            div.footer.wrapper {
                p.copyright {
                    (copyright)
                    @if !holder.is_empty() {
                        " " (holder)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_site;

    #[test]
    fn resolve_known_paths() {
        assert_eq!(Fragment::resolve("/header"), Ok(Fragment::Header));
        assert_eq!(Fragment::resolve("/menu.html"), Ok(Fragment::Menu));
        assert_eq!(Fragment::resolve("/footer"), Ok(Fragment::Footer));
    }

    #[test]
    fn resolve_unknown_path_is_not_found() {
        assert_eq!(
            Fragment::resolve("/sidebar"),
            Err(FragmentError::NotFound("/sidebar".to_string()))
        );
    }

    #[test]
    fn resolve_requires_root_relative_path() {
        assert!(Fragment::resolve("menu").is_err());
    }

    #[test]
    fn include_missing_fragment_is_error() {
        let site = test_site();
        let ctx = RequestContext::new("/index.html");
        let err = include("/missing.html", &ctx, &site).unwrap_err();
        assert_eq!(err.to_string(), "fragment not found: /missing.html");
    }

    #[test]
    fn header_carries_single_placeholder() {
        let html = render_header(&AssetsConfig::default()).into_string();
        assert_eq!(html.matches(TITLE_PLACEHOLDER).count(), 1);
        assert!(html.starts_with("<head>"));
    }

    #[test]
    fn header_references_assets() {
        let assets = AssetsConfig::default();
        let html = render_header(&assets).into_string();
        assert!(html.contains(r#"href="/library/css/semantic.min.css""#));
        assert!(html.contains(r#"href="/main.css""#));
        assert!(html.contains(r#"src="/library/js/semantic.min.js""#));
        assert!(html.contains(r#""/library/js/jquery.legacy.min.js""#));
    }

    #[test]
    fn jquery_loader_picks_between_builds() {
        let js = jquery_loader(&AssetsConfig::default());
        assert!(js.contains(r#"? "/library/js/jquery.min.js" : "/library/js/jquery.legacy.min.js""#));
        assert!(js.contains(r"<\/script>"));
    }

    #[test]
    fn footer_shows_copyright_range() {
        let site = test_site();
        let ctx = RequestContext::new("/index.html");
        let html = include("/footer", &ctx, &site).unwrap().into_string();
        assert!(html.contains("\u{a9} 2014 - 2024 OCCA"));
        assert!(html.contains(r#"id="id_footer""#));
    }

    #[test]
    fn footer_without_holder() {
        let html = render_footer("\u{a9} 2024", "").into_string();
        assert!(html.contains("<p class=\"copyright\">\u{a9} 2024</p>"));
    }

    #[test]
    fn menu_fragment_uses_request_path() {
        let site = test_site();
        let ctx = RequestContext::new("/aboutUs.html");
        let html = include("/menu", &ctx, &site).unwrap().into_string();
        assert!(html.contains("selected"));
    }
}
