//! # OCCA Site
//!
//! The public website of the OCCA project: Home, About Us, Documentation
//! (with Host API and Device API sub-pages) and the Tutorial viewer.
//!
//! Every page is the same composition:
//!
//! ```text
//! header (title substituted) → menu (active tab) → page body → footer (copyright)
//! ```
//!
//! The site can answer a single request ([`site::Site::respond`], path in,
//! HTML out) or render everything into a directory ([`generate::generate`]).
//! Both go through the same code, so a built page is byte-identical to the
//! response for its path.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`helpers`] | Title substitution, active-tab matching, copyright years, clock |
//! | [`fragments`] | `/header`, `/menu`, `/footer` and the fragment includer |
//! | [`nav`] | Fixed navigation table and the menu markup |
//! | [`pages`] | Routes and per-page content |
//! | [`site`] | Document composition, request entry point, error page |
//! | [`generate`] | Writes the rendered site and its assets to disk |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`types`] | Request context and page descriptor |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Request Context
//!
//! The menu needs to know which page it is on. Instead of reading ambient
//! request state, every fragment receives a [`types::RequestContext`], which
//! makes each fragment a plain function of its inputs.
//!
//! ## Missing Fragments Are Errors
//!
//! A page without its header, menu, or footer is broken even if it renders.
//! Including an unknown fragment fails the render, and the request is
//! answered with a standalone error page instead.
//!
//! ## Pinned Clock
//!
//! The footer year is the only value that changes between renders. It is
//! read through [`helpers::Clock`], so tests and reproducible builds
//! (`occa-site --year 2024 build`) produce stable output. If the host clock
//! cannot be read the footer shows the start year alone.

pub mod config;
pub mod fragments;
pub mod generate;
pub mod helpers;
pub mod nav;
pub mod output;
pub mod pages;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
