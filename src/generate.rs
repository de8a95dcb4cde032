//! Static site generation.
//!
//! Renders every [`Route`] through the same composition path as
//! [`Site::respond`] and writes the result under the output directory.
//! The site's own static files (`<source>/assets/`: images, `main.css`,
//! `main.js`, the vendored library) are copied to the output root unchanged.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── aboutUs.html
//! ├── documentation.html
//! ├── documentation/
//! │   ├── hostAPI.html
//! │   └── deviceAPI.html
//! ├── tutorials.html
//! └── images/ library/ ...     # copied from <source>/assets/
//! ```
//!
//! Every page is rendered before anything is written, so a render error
//! leaves the output directory untouched. I/O failures while copying assets
//! or writing pages can still leave it partly written.

use crate::pages::Route;
use crate::site::{RenderError, RenderedPage, Site};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// One page written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub route: Route,
    pub title: String,
    /// Relative to the output directory.
    pub output: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
}

/// Render every route in memory without writing anything.
pub fn render_all(site: &Site) -> Result<Vec<RenderedPage>, RenderError> {
    Route::ALL
        .into_iter()
        .map(|route| site.render_route(route))
        .collect()
}

/// Render the whole site into `output_dir`, copying `assets_dir` if it exists.
pub fn generate(
    site: &Site,
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let rendered = render_all(site)?;

    fs::create_dir_all(output_dir)?;
    let assets_copied = if assets_dir.is_dir() {
        copy_assets(assets_dir, output_dir)?
    } else {
        0
    };

    let mut pages = Vec::with_capacity(rendered.len());
    for page in rendered {
        let relative = PathBuf::from(page.route.output_file());
        let target = output_dir.join(&relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, page.html)?;
        pages.push(GeneratedPage {
            route: page.route,
            title: page.title,
            output: relative,
        });
    }

    Ok(GenerateReport {
        pages,
        assets_copied,
    })
}

/// Mirror `src` into `dst`, returning the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(std::io::Error::other)?;
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
