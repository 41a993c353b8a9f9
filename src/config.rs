//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. The page copy lives
//! in [`crate::content`]; this file only carries the deployment-specific bits:
//! where the site is published, the theme palette, the asset directory and the
//! preview server address.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml      # optional, overrides stock defaults
//! └── public/          # static assets, copied to the output root
//!     ├── hilink-logo.svg
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "public"
//!
//! [site]
//! base_url = "https://travel-camping-ui.vercel.app"
//! locale = "en_US"
//! theme_color = "#30AF5B"
//!
//! [colors]
//! green_50 = "#30AF5B"
//! green_90 = "#292C27"
//! gray_10 = "#D5EFFA"
//! gray_20 = "#E7E7E7"
//! gray_30 = "#7B7B7B"
//! gray_50 = "#585858"
//! gray_90 = "#141414"
//! orange_50 = "#FF814C"
//! blue_70 = "#021639"
//! yellow_50 = "#FEC601"
//!
//! [serve]
//! interface = "127.0.0.1"
//! port = 3000
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the source dir) copied verbatim to the output root.
    pub assets_dir: String,
    /// Publication settings used by the document head.
    pub site: SiteSettings,
    /// Theme palette, emitted as CSS custom properties.
    pub colors: Palette,
    /// Preview server settings.
    pub serve: ServeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "public".to_string(),
            site: SiteSettings::default(),
            colors: Palette::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        let url = &self.site.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if !is_hex_color(&self.site.theme_color) {
            return Err(ConfigError::Validation(format!(
                "site.theme_color must be a hex color, got {:?}",
                self.site.theme_color
            )));
        }
        for (name, value) in self.colors.entries() {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must be a hex color, got {value:?}"
                )));
            }
        }
        if self.serve.port == 0 {
            return Err(ConfigError::Validation(
                "serve.port must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        })
}

/// Where and how the page is published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Absolute origin; canonical link and base for preview image URLs.
    pub base_url: String,
    /// Open Graph locale.
    pub locale: String,
    /// Browser UI tint (`theme-color` meta tag).
    pub theme_color: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: "https://travel-camping-ui.vercel.app".to_string(),
            locale: "en_US".to_string(),
            theme_color: "#30AF5B".to_string(),
        }
    }
}

impl SiteSettings {
    /// Resolve a site-relative path (`/hero.png`) against `base_url`.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Brand colors referenced by the stylesheet as `var(--green-50)` etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub green_50: String,
    pub green_90: String,
    pub gray_10: String,
    pub gray_20: String,
    pub gray_30: String,
    pub gray_50: String,
    pub gray_90: String,
    pub orange_50: String,
    pub blue_70: String,
    pub yellow_50: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            green_50: "#30AF5B".to_string(),
            green_90: "#292C27".to_string(),
            gray_10: "#D5EFFA".to_string(),
            gray_20: "#E7E7E7".to_string(),
            gray_30: "#7B7B7B".to_string(),
            gray_50: "#585858".to_string(),
            gray_90: "#141414".to_string(),
            orange_50: "#FF814C".to_string(),
            blue_70: "#021639".to_string(),
            yellow_50: "#FEC601".to_string(),
        }
    }
}

impl Palette {
    /// `(config key, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("green_50", self.green_50.as_str()),
            ("green_90", self.green_90.as_str()),
            ("gray_10", self.gray_10.as_str()),
            ("gray_20", self.gray_20.as_str()),
            ("gray_30", self.gray_30.as_str()),
            ("gray_50", self.gray_50.as_str()),
            ("gray_90", self.gray_90.as_str()),
            ("orange_50", self.orange_50.as_str()),
            ("blue_70", self.blue_70.as_str()),
            ("yellow_50", self.yellow_50.as_str()),
        ]
    }
}

/// Preview server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    pub interface: String,
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the stock defaults. Keys absent from the file keep
/// their defaults, section by section; the result is validated either way.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config: SiteConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Hilink Site Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Static assets directory, relative to the source directory.
# Its contents are copied verbatim into the output root.
assets_dir = "public"

# ---------------------------------------------------------------------------
# Publication
# ---------------------------------------------------------------------------
[site]
# Absolute origin of the deployed page. Used for the canonical link and to
# turn preview image paths into absolute URLs.
base_url = "https://travel-camping-ui.vercel.app"

# Open Graph locale.
locale = "en_US"

# Browser UI tint on mobile.
theme_color = "#30AF5B"

# ---------------------------------------------------------------------------
# Palette (CSS custom properties, e.g. var(--green-50))
# ---------------------------------------------------------------------------
[colors]
green_50 = "#30AF5B"
green_90 = "#292C27"
gray_10 = "#D5EFFA"
gray_20 = "#E7E7E7"
gray_30 = "#7B7B7B"
gray_50 = "#585858"
gray_90 = "#141414"
orange_50 = "#FF814C"
blue_70 = "#021639"
yellow_50 = "#FEC601"

# ---------------------------------------------------------------------------
# Preview server (hilink serve)
# ---------------------------------------------------------------------------
[serve]
interface = "127.0.0.1"
# Next free port is tried when this one is taken.
port = 3000
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors.entries() {
        css.push_str(&format!("    --{}: {};\n", name.replace('_', "-"), value));
    }
    css.push('}');
    css
}
