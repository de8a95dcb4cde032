//! Top navigation: the fixed entry table and the menu fragment.
//!
//! Entries are compile-time constants. The only per-request input is the
//! [`RequestContext`], which decides which tab carries the `selected` class.

use crate::types::RequestContext;
use maud::{Markup, html};

/// Sections the top menu can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTag {
    GetStarted,
    Downloads,
    Tutorials,
    Documentation,
    AboutUs,
}

impl NavTag {
    pub const ALL: [NavTag; 5] = [
        NavTag::GetStarted,
        NavTag::Downloads,
        NavTag::Tutorials,
        NavTag::Documentation,
        NavTag::AboutUs,
    ];

    /// The path name a section's pages are addressed by.
    pub fn as_str(self) -> &'static str {
        match self {
            NavTag::GetStarted => "getStarted",
            NavTag::Downloads => "downloads",
            NavTag::Tutorials => "tutorials",
            NavTag::Documentation => "documentation",
            NavTag::AboutUs => "aboutUs",
        }
    }
}

/// A plain link inside a dropdown.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// One top-level menu entry; non-empty `children` render as a dropdown.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
    pub tag: NavTag,
    pub children: &'static [NavLink],
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Get Started",
        href: "/getStarted.html",
        tag: NavTag::GetStarted,
        children: &[],
    },
    NavEntry {
        label: "Downloads",
        href: "/downloads.html",
        tag: NavTag::Downloads,
        children: &[],
    },
    NavEntry {
        label: "Tutorials",
        href: "/tutorials.html",
        tag: NavTag::Tutorials,
        children: &[],
    },
    NavEntry {
        label: "Documentation",
        href: "/documentation.html",
        tag: NavTag::Documentation,
        children: &[
            NavLink {
                label: "Host API",
                href: "/documentation/hostAPI.html",
            },
            NavLink {
                label: "Device API",
                href: "/documentation/deviceAPI.html",
            },
        ],
    },
    NavEntry {
        label: "About Us",
        href: "/aboutUs.html",
        tag: NavTag::AboutUs,
        children: &[],
    },
];

const HOME_HREF: &str = "/index.html";
const TOP_LOGO: &str = "/images/blueOccaLogo.png";
const BOTTOM_LOGO: &str = "/images/blackOccaLogo.png";

/// The tag of the current section, if any.
pub fn active_tag(ctx: &RequestContext) -> Option<NavTag> {
    NavTag::ALL.into_iter().find(|tag| ctx.is_active(tag.as_str()))
}

fn tab_class(base: &str, marker: &str) -> String {
    if marker.is_empty() {
        base.to_string()
    } else {
        format!("{base} {marker}")
    }
}

/// Renders the top menu bar.
pub fn render_menu(ctx: &RequestContext, site_name: &str) -> Markup {
    html! {
        div.ui.top.menu #id_topMenu {
            div.top.wrapper {
                a.item #id_logo_div href=(HOME_HREF) {
                    img.top.logo #id_top_logo src=(TOP_LOGO) alt=(site_name);
                    img.bottom.logo #id_bottom_logo src=(BOTTOM_LOGO) alt=(site_name);
                }
                div.right.menu {
                    @for entry in NAV_ENTRIES {
                        @let marker = ctx.active_marker(entry.tag.as_str());
                        @if entry.children.is_empty() {
                            a class=(tab_class("light topMenu black item", marker)) href=(entry.href) {
                                (entry.label)
                            }
                        } @else {
                            div class=(tab_class("ui light topMenu black simple dropdown item", marker)) {
                                a.topMenu href=(entry.href) { (entry.label) }
                                div.menu {
                                    @for child in entry.children {
                                        a.item href=(child.href) { (child.label) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
