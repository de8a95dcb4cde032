//! Document composition and the request-style entry point.
//!
//! [`Site`] owns the immutable inputs of every render (config and clock).
//! A render resolves the request path to a [`Route`], lets the page build its
//! [`PageDescriptor`], and composes the document:
//!
//! ```text
//! <head>  ← /header, title substituted
//! <body>
//!   menu  ← /menu, active tab from the request context
//!   body  ← page
//!   footer ← /footer
//!   trailer (page scripts)
//! ```
//!
//! [`Site::respond`] never returns a partial page: any failure is answered
//! with a standalone error document.

use crate::config::SiteConfig;
use crate::fragments::{self, Fragment, FragmentError};
use crate::helpers::{self, Clock, SystemClock, TemplateError};
use crate::pages::Route;
use crate::types::{PageDescriptor, RequestContext};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("{0}")]
    Template(#[from] TemplateError),
    #[error("{0}")]
    Fragment(#[from] FragmentError),
    #[error("no page at {0}")]
    UnknownPage(String),
}

/// HTTP-like outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    InternalError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
            Status::InternalError => 500,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub body: String,
}

/// A fully composed page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub route: Route,
    pub title: String,
    pub html: String,
}

pub struct Site {
    config: SiteConfig,
    clock: Box<dyn Clock>,
}

impl Site {
    /// A site that reads the current year from the host clock.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: SiteConfig, clock: impl Clock + 'static) -> Self {
        Self {
            config,
            clock: Box::new(clock),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// `OCCA` for the home page, `OCCA: <section>` elsewhere.
    pub fn page_title(&self, section: Option<&str>) -> String {
        match section {
            Some(section) => format!("{}: {}", self.config.site.name, section),
            None => self.config.site.name.clone(),
        }
    }

    /// Wrap a page in the shared header, menu, and footer.
    pub fn compose(&self, ctx: &RequestContext, page: PageDescriptor) -> Result<Markup, RenderError> {
        let header = fragments::include(Fragment::Header.path(), ctx, self)?;
        let head = helpers::compose_header(&header.into_string(), &page.title)?;
        let menu = fragments::include(Fragment::Menu.path(), ctx, self)?;
        let footer = fragments::include(Fragment::Footer.path(), ctx, self)?;

        Ok(html! {
            (DOCTYPE)
            html lang="en" {
                (PreEscaped(head))
                body {
                    div #id_bodyWrapper {
                        div #id_bodyWrapper2 {
                            (menu)
                            (page.body)
                        }
                    }
                    (footer)
                    @if let Some(trailer) = &page.trailer {
                        (trailer)
                    }
                }
            }
        })
    }

    /// Render a routed page. The request context is the route's canonical
    /// path, so legacy spellings highlight the same tab.
    pub fn render_route(&self, route: Route) -> Result<RenderedPage, RenderError> {
        let ctx = RequestContext::new(route.path());
        let page = route.render(self);
        let title = page.title.clone();
        let html = self.compose(&ctx, page)?.into_string();
        Ok(RenderedPage { route, title, html })
    }

    /// Render the page at `path`.
    pub fn render(&self, path: &str) -> Result<String, RenderError> {
        let ctx = RequestContext::new(path);
        let route =
            Route::from_path(ctx.path()).ok_or_else(|| RenderError::UnknownPage(ctx.path().to_string()))?;
        Ok(self.render_route(route)?.html)
    }

    /// Path in, HTML out. Failures become a generic error page.
    pub fn respond(&self, path: &str) -> Response {
        response_for(self.render(path))
    }
}

/// Map a render outcome to a response. Errors never carry page content.
fn response_for(result: Result<String, RenderError>) -> Response {
    match result {
        Ok(body) => Response {
            status: Status::Ok,
            body,
        },
        Err(RenderError::UnknownPage(_)) => error_response(Status::NotFound),
        Err(RenderError::Template(_) | RenderError::Fragment(_)) => {
            error_response(Status::InternalError)
        }
    }
}

fn error_response(status: Status) -> Response {
    Response {
        status,
        body: error_page(status).into_string(),
    }
}

/// Standalone error document. Uses no fragments, so it renders even when
/// the layout cannot.
pub fn error_page(status: Status) -> Markup {
    let message = match status {
        Status::NotFound => "Page not found",
        Status::Ok | Status::InternalError => "Something went wrong",
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (status.code()) " " (message) }
            }
            body {
                h1 { (message) }
                p { a href="/index.html" { "Back to the home page" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::FixedClock;
    use crate::test_helpers::*;

    #[test]
    fn page_title_formats() {
        let site = test_site();
        assert_eq!(site.page_title(None), "OCCA");
        assert_eq!(site.page_title(Some("Documentation")), "OCCA: Documentation");
    }

    #[test]
    fn compose_orders_chrome() {
        let site = test_site();
        let ctx = RequestContext::new("/aboutUs.html");
        let page = PageDescriptor::new("T", html! { div #marker { "body" } });
        let html = site.compose(&ctx, page).unwrap().into_string();
        assert_single_chrome(&html);
        assert_in_order(&html, &[HEADER_MARK, MENU_MARK, r#"id="marker""#, FOOTER_MARK]);
    }

    #[test]
    fn compose_substitutes_escaped_title() {
        let site = test_site();
        let ctx = RequestContext::new("/index.html");
        let page = PageDescriptor::new("A & B", html! {});
        let html = site.compose(&ctx, page).unwrap().into_string();
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(!html.contains(helpers::TITLE_PLACEHOLDER));
    }

    #[test]
    fn compose_places_trailer_after_footer() {
        let site = test_site();
        let ctx = RequestContext::new("/index.html");
        let page = PageDescriptor::new("T", html! {}).with_trailer(html! { script #trail {} });
        let html = site.compose(&ctx, page).unwrap().into_string();
        assert_in_order(&html, &[FOOTER_MARK, r#"id="trail""#, "</body>"]);
    }

    #[test]
    fn every_route_renders_with_chrome_once() {
        let site = test_site();
        for route in Route::ALL {
            let page = site.render_route(route).unwrap();
            assert_single_chrome(&page.html);
            assert_in_order(&page.html, &[HEADER_MARK, MENU_MARK, FOOTER_MARK]);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let site = test_site();
        for route in Route::ALL {
            assert_eq!(site.render(route.path()), site.render(route.path()));
        }
    }

    #[test]
    fn render_unknown_path() {
        let site = test_site();
        assert_eq!(
            site.render("/nope.html"),
            Err(RenderError::UnknownPage("/nope.html".to_string()))
        );
    }

    #[test]
    fn respond_ok() {
        let site = test_site();
        let response = site.respond("/documentation.html");
        assert_eq!(response.status, Status::Ok);
        assert!(response.body.contains("<title>OCCA: Documentation</title>"));
    }

    #[test]
    fn respond_accepts_legacy_php_paths() {
        let site = test_site();
        let legacy = site.respond("/aboutUs.php");
        let current = site.respond("/aboutUs.html");
        assert_eq!(legacy, current);
    }

    #[test]
    fn respond_not_found_is_standalone_error_page() {
        let site = test_site();
        let response = site.respond("/missing.html");
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.status.code(), 404);
        assert!(response.body.contains("Page not found"));
        assert!(!response.body.contains(MENU_MARK));
        assert!(!response.body.contains(FOOTER_MARK));
    }

    #[test]
    fn error_page_for_internal_error() {
        let html = error_page(Status::InternalError).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>500 Something went wrong</title>"));
    }

    fn assert_internal_error(response: &Response) {
        assert_eq!(response.status, Status::InternalError);
        assert_eq!(response.status.code(), 500);
        assert!(response.body.contains("Something went wrong"));
        assert!(!response.body.contains(MENU_MARK));
        assert!(!response.body.contains(FOOTER_MARK));
    }

    #[test]
    fn missing_fragment_answers_with_error_page() {
        let site = test_site();
        let ctx = RequestContext::new("/index.html");
        let result = fragments::include("/sidebar", &ctx, &site)
            .map(|m| m.into_string())
            .map_err(RenderError::from);
        assert_eq!(
            result,
            Err(RenderError::Fragment(FragmentError::NotFound("/sidebar".to_string())))
        );
        assert_internal_error(&response_for(result));
    }

    #[test]
    fn missing_title_placeholder_answers_with_error_page() {
        let result = helpers::compose_header("<head></head>", "OCCA").map_err(RenderError::from);
        assert_eq!(result, Err(RenderError::Template(TemplateError::InvalidTitlePlaceholder)));
        assert_internal_error(&response_for(result));
    }

    #[test]
    fn response_for_unknown_page_is_not_found() {
        let response = response_for(Err(RenderError::UnknownPage("/x".to_string())));
        assert_eq!(response.status, Status::NotFound);
        assert!(!response.body.contains(MENU_MARK));
    }

    #[test]
    fn footer_year_follows_clock() {
        let site = Site::with_clock(crate::config::SiteConfig::default(), FixedClock(2014));
        let html = site.render("/index.html").unwrap();
        assert!(html.contains("\u{a9} 2014 OCCA"));
        assert!(!html.contains("2014 -"));
    }

    #[test]
    fn status_helpers() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::NotFound.is_ok());
        assert_eq!(Status::InternalError.code(), 500);
    }
}
