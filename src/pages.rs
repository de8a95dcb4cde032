//! Page renderers and routing.
//!
//! Each page is a straight-line function from the site to a
//! [`PageDescriptor`]; the shared chrome is added by [`Site::compose`].
//!
//! | Route | Output | Tab |
//! |-------|--------|-----|
//! | Home | `index.html` | none |
//! | About Us | `aboutUs.html` | `aboutUs` |
//! | Documentation | `documentation.html` | `documentation` |
//! | Host API | `documentation/hostAPI.html` | `documentation` |
//! | Device API | `documentation/deviceAPI.html` | `documentation` |
//! | Tutorials | `tutorials.html` | `tutorials` |
//!
//! Documentation sub-pages are written in Markdown under `content/` and
//! embedded at compile time.

use crate::config::EditorConfig;
use crate::helpers::js_string;
use crate::site::Site;
use crate::types::PageDescriptor;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

const HOST_API_MD: &str = include_str!("../content/documentation/hostAPI.md");
const DEVICE_API_MD: &str = include_str!("../content/documentation/deviceAPI.md");
const ADD_VECTORS_OKL: &str = include_str!("../content/tutorials/addVectors.okl");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AboutUs,
    Documentation,
    HostApi,
    DeviceApi,
    Tutorials,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::AboutUs,
        Route::Documentation,
        Route::HostApi,
        Route::DeviceApi,
        Route::Tutorials,
    ];

    /// Canonical root-relative URL.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/index.html",
            Route::AboutUs => "/aboutUs.html",
            Route::Documentation => "/documentation.html",
            Route::HostApi => "/documentation/hostAPI.html",
            Route::DeviceApi => "/documentation/deviceAPI.html",
            Route::Tutorials => "/tutorials.html",
        }
    }

    /// File path relative to the output directory.
    pub fn output_file(self) -> &'static str {
        &self.path()[1..]
    }

    /// Resolve a request path. `.html`, `.php`, and extension-less spellings
    /// all address the same page, as do the old `tutorial` and `devAPI` names.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        let key = path
            .strip_suffix(".html")
            .or_else(|| path.strip_suffix(".php"))
            .unwrap_or(path);
        match key {
            "" | "/index" => Some(Route::Home),
            "/aboutUs" => Some(Route::AboutUs),
            "/documentation" => Some(Route::Documentation),
            "/documentation/hostAPI" => Some(Route::HostApi),
            "/documentation/deviceAPI" | "/documentation/devAPI" => Some(Route::DeviceApi),
            "/tutorials" | "/tutorial" => Some(Route::Tutorials),
            _ => None,
        }
    }

    pub fn render(self, site: &Site) -> PageDescriptor {
        match self {
            Route::Home => home(site),
            Route::AboutUs => about_us(site),
            Route::Documentation => documentation(site),
            Route::HostApi => documentation_page(site, "Host API", HOST_API_MD),
            Route::DeviceApi => documentation_page(site, "Device API", DEVICE_API_MD),
            Route::Tutorials => tutorials(site),
        }
    }
}

// ============================================================================
// Home
// ============================================================================

fn home(site: &Site) -> PageDescriptor {
    let body = html! {
        div #id_body .index.body {
            h1.ui.header {
                (site.config().site.name)
                div.sub.header {
                    "Write a kernel once, run it with OpenMP, OpenCL or CUDA."
                }
            }
            div.ui.buttons {
                a.ui.button href=(Route::Tutorials.path()) { "Tutorials" }
                a.ui.button href=(Route::Documentation.path()) { "Documentation" }
            }
        }
    };
    PageDescriptor::new(site.page_title(None), body)
}

// ============================================================================
// About Us
// ============================================================================

struct Profile {
    name: &'static str,
    location: &'static str,
    homepage: &'static str,
    photo: &'static str,
    /// `(icon classes, href)`
    links: &'static [(&'static str, &'static str)],
}

const TEAM: &[Profile] = &[
    Profile {
        name: "David S Medina",
        location: "Rice University",
        homepage: "http://davidmedinawiki.wordpress.com/",
        photo: "/images/aboutUs/david.jpg",
        links: &[
            ("linkedin sign", "http://www.linkedin.com/pub/david-medina/50/3/17a"),
            ("github alternate", "https://github.com/dmed256"),
            ("text file outline", "http://lnkd.in/bNPCtVe"),
            ("mail outline", "mailto:dsm5@rice.edu"),
        ],
    },
    Profile {
        name: "Tim Warburton",
        location: "Rice University",
        homepage: "http://tcew.github.io/",
        photo: "/images/aboutUs/warburton.jpg",
        links: &[
            ("linkedin sign", "http://www.linkedin.com/pub/tim-warburton/1/878/705/"),
            ("github alternate", "https://github.com/tcew"),
            ("text file outline", "http://www.caam.rice.edu/~timwar/warburtoncv14.pdf"),
            ("mail outline", "mailto:spam.warburton@gmail.com"),
        ],
    },
];

const CONTRIBUTORS: &[Profile] = &[
    Profile {
        name: "Lucas Wilcox",
        location: "Naval Postgraduate School",
        homepage: "http://lucaswilcox.com/",
        photo: "/images/aboutUs/lucas.jpg",
        links: &[],
    },
    Profile {
        name: "Florian Kummer",
        location: "Technische Universit\u{e4}t Darmstadt",
        homepage: "http://www.fdy.tu-darmstadt.de/forschung_16/entwicklungcfdcode/entwicklungcfdcode.en.jsp",
        photo: "/images/aboutUs/florian.png",
        links: &[],
    },
];

fn profile_card(profile: &Profile, contributor: bool) -> Markup {
    html! {
        div.ui.contributor[contributor].profile.segment {
            a.ui.rounded.image href=(profile.homepage) {
                img src=(profile.photo) alt=(profile.name);
            }
            div.info {
                p.name { (profile.name) }
                p.location { (profile.location) }
                @if !profile.links.is_empty() {
                    div.links {
                        @for (icon, href) in profile.links {
                            a href=(href) {
                                i class={ "large " (icon) " link icon" } {}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn about_us(site: &Site) -> PageDescriptor {
    let body = html! {
        div #id_body .aboutUs.body {
            h2.ui.dividing.header { "Team" }
            @for profile in TEAM {
                (profile_card(profile, false))
            }
            h2.ui.dividing.header { "Contributors" }
            @for profile in CONTRIBUTORS {
                (profile_card(profile, true))
            }
        }
    };
    PageDescriptor::new(site.page_title(Some("About Us")), body)
}

// ============================================================================
// Documentation
// ============================================================================

/// `(anchor, label)` entries of the documentation sidebar.
const DOC_SECTIONS: &[(&str, &str)] = &[
    ("Introduction", "1. Introduction"),
    ("Host-API", "2. Host API"),
    ("Device-API", "3. Device API"),
];

fn sidebar(entries: &[(&str, &str)]) -> Markup {
    html! {
        div.ui.vertical.sidebar #id_sidebar {
            @for (anchor, label) in entries {
                div.entry { a href={ "#" (anchor) } { (label) } }
            }
        }
    }
}

fn documentation(site: &Site) -> PageDescriptor {
    let body = html! {
        (sidebar(DOC_SECTIONS))
        div #id_body .documentation.fixed.body {
            h2 #Introduction .ui.dividing.header { "Quick Introduction" }
            p {
                "OCCA separates host code, which manages devices and memory, from "
                "kernels, which are written once and compiled at run time for the "
                "chosen backend."
            }
            h2 #Host-API .ui.dividing.header {
                a.dsm5.link href=(Route::HostApi.path()) { "Host API" }
            }
            p { "Devices, memory allocation and transfers, and building and launching kernels." }
            h2 #Device-API .ui.dividing.header {
                a.dsm5.link href=(Route::DeviceApi.path()) { "Device API" }
            }
            p { "The kernel language: kernel declarations and outer/inner parallel loops." }
        }
    };
    PageDescriptor::new(site.page_title(Some("Documentation")), body)
}

/// Markdown to HTML. The source is compiled into the binary, not user input.
fn markdown(source: &str) -> Markup {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

fn documentation_page(site: &Site, section: &str, source: &str) -> PageDescriptor {
    let body = html! {
        div #id_body .documentation.body {
            div.ui.breadcrumb {
                a.section href=(Route::Documentation.path()) { "Documentation" }
                div.divider { "/" }
                div.active.section { (section) }
            }
            article.doc-content {
                (markdown(source))
            }
        }
    };
    PageDescriptor::new(site.page_title(Some(section)), body)
}

// ============================================================================
// Tutorials
// ============================================================================

/// Ace setup for the read-only sample viewer.
fn editor_script(editor: &EditorConfig) -> String {
    format!(
        r#"var editor = ace.edit("editor");
editor.setTheme({theme});
editor.getSession().setMode({mode});
editor.setReadOnly({read_only});
editor.renderer.setShowGutter({show_gutter});
editor.setHighlightActiveLine({highlight_active_line});
editor.setDisplayIndentGuides({display_indent_guides});
editor.setShowPrintMargin({show_print_margin});
editor.setOption("maxLines", {max_lines});"#,
        theme = js_string(&editor.theme),
        mode = js_string(&editor.mode),
        read_only = editor.read_only,
        show_gutter = editor.show_gutter,
        highlight_active_line = editor.highlight_active_line,
        display_indent_guides = editor.display_indent_guides,
        show_print_margin = editor.show_print_margin,
        max_lines = editor.max_lines,
    )
}

fn tutorials(site: &Site) -> PageDescriptor {
    let config = site.config();
    let body = html! {
        div #id_body .tutorial {
            div #id_tutorialMenu {}
            div #id_tutorialContents {
                div #editor { (ADD_VECTORS_OKL) }
            }
        }
    };
    let trailer = html! {
        script src=(config.assets.ace_js) type="text/javascript" charset="utf-8" {}
        script { (PreEscaped(editor_script(&config.editor))) }
    };
    PageDescriptor::new(site.page_title(Some("Tutorials")), body).with_trailer(trailer)
}
