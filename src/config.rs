//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the site source directory and is optional: stock defaults describe the
//! published OCCA site, and a user file only overrides what it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "OCCA"                 # Brand used in page titles
//! copyright_start_year = 2014   # First year of the footer copyright range
//! copyright_holder = "OCCA"     # Shown after the year range
//!
//! [assets]
//! semantic_css = "/library/css/semantic.min.css"
//! site_css = "/main.css"
//! jquery = "/library/js/jquery.min.js"
//! jquery_legacy = "/library/js/jquery.legacy.min.js"
//! jquery_address = "/library/js/jquery.address.js"
//! semantic_js = "/library/js/semantic.min.js"
//! site_js = "/main.js"
//! ace_js = "/library/js/aceMin/ace.js"
//!
//! [editor]
//! theme = "ace/theme/chrome"
//! mode = "ace/mode/c_cpp"
//! read_only = true
//! show_gutter = false
//! highlight_active_line = false
//! display_indent_guides = false
//! show_print_margin = false
//! max_lines = 20
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding and footer settings.
    pub site: SiteSettings,
    /// References to the external CSS/JS asset library.
    pub assets: AssetsConfig,
    /// Options for the read-only code viewer on the tutorial page.
    pub editor: EditorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !(1970..=9999).contains(&self.site.copyright_start_year) {
            return Err(ConfigError::Validation(
                "site.copyright_start_year must be between 1970 and 9999".into(),
            ));
        }
        for (key, value) in self.assets.entries() {
            if !is_asset_reference(value) {
                return Err(ConfigError::Validation(format!(
                    "assets.{key} must be root-relative or an http(s) URL, got {value:?}"
                )));
            }
        }
        if self.editor.max_lines == 0 {
            return Err(ConfigError::Validation(
                "editor.max_lines must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn is_asset_reference(value: &str) -> bool {
    (value.starts_with('/') && !value.starts_with("//"))
        || value.starts_with("https://")
        || value.starts_with("http://")
}

/// Branding and footer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    pub name: String,
    pub copyright_start_year: i32,
    pub copyright_holder: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "OCCA".to_string(),
            copyright_start_year: 2014,
            copyright_holder: "OCCA".to_string(),
        }
    }
}

/// Root-relative (or absolute) references to the CSS/JS asset library.
///
/// The site never reads these files; it only emits the references.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    pub semantic_css: String,
    pub site_css: String,
    pub jquery: String,
    /// Served instead of `jquery` to browsers without `querySelector`/JSON.
    pub jquery_legacy: String,
    pub jquery_address: String,
    pub semantic_js: String,
    pub site_js: String,
    pub ace_js: String,
}

impl AssetsConfig {
    /// All references keyed by their config name, for validation.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("semantic_css", self.semantic_css.as_str()),
            ("site_css", self.site_css.as_str()),
            ("jquery", self.jquery.as_str()),
            ("jquery_legacy", self.jquery_legacy.as_str()),
            ("jquery_address", self.jquery_address.as_str()),
            ("semantic_js", self.semantic_js.as_str()),
            ("site_js", self.site_js.as_str()),
            ("ace_js", self.ace_js.as_str()),
        ]
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            semantic_css: "/library/css/semantic.min.css".to_string(),
            site_css: "/main.css".to_string(),
            jquery: "/library/js/jquery.min.js".to_string(),
            jquery_legacy: "/library/js/jquery.legacy.min.js".to_string(),
            jquery_address: "/library/js/jquery.address.js".to_string(),
            semantic_js: "/library/js/semantic.min.js".to_string(),
            site_js: "/main.js".to_string(),
            ace_js: "/library/js/aceMin/ace.js".to_string(),
        }
    }
}

/// Ace viewer options for the tutorial code sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub theme: String,
    pub mode: String,
    pub read_only: bool,
    pub show_gutter: bool,
    pub highlight_active_line: bool,
    pub display_indent_guides: bool,
    pub show_print_margin: bool,
    /// The viewer grows with its content up to this many lines, then scrolls.
    pub max_lines: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: "ace/theme/chrome".to_string(),
            mode: "ace/mode/c_cpp".to_string(),
            read_only: true,
            show_gutter: false,
            highlight_active_line: false,
            display_indent_guides: false,
            show_print_margin: false,
            max_lines: 20,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given site source directory.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# OCCA Site Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Branding and footer
# ---------------------------------------------------------------------------
[site]
# Brand used in page titles ("OCCA: Documentation").
name = "OCCA"

# First year of the footer copyright range. The range ends at the year the
# page is rendered; when both are equal only one year is shown.
copyright_start_year = 2014

# Shown after the year range in the footer.
copyright_holder = "OCCA"

# ---------------------------------------------------------------------------
# Asset library references (root-relative paths or http(s) URLs)
# ---------------------------------------------------------------------------
[assets]
semantic_css = "/library/css/semantic.min.css"
site_css = "/main.css"
jquery = "/library/js/jquery.min.js"
# Served to browsers without querySelector/addEventListener/JSON.
jquery_legacy = "/library/js/jquery.legacy.min.js"
jquery_address = "/library/js/jquery.address.js"
semantic_js = "/library/js/semantic.min.js"
site_js = "/main.js"
ace_js = "/library/js/aceMin/ace.js"

# ---------------------------------------------------------------------------
# Tutorial code viewer (Ace)
# ---------------------------------------------------------------------------
[editor]
theme = "ace/theme/chrome"
mode = "ace/mode/c_cpp"
read_only = true
show_gutter = false
highlight_active_line = false
display_indent_guides = false
show_print_margin = false
# Viewer height cap; longer samples scroll.
max_lines = 20
"##
}
