//! Site generation.
//!
//! Renders the landing page to a static directory:
//!
//! ```text
//! dist/
//! ├── index.html        # the whole page, CSS inlined
//! ├── hilink-logo.svg   # everything under <source>/public/, copied as-is
//! └── ...
//! ```
//!
//! ## Steps
//!
//! 1. Load and validate `config.toml` from the source directory.
//! 2. Validate the content registry (unique list identifiers).
//! 3. Build the stylesheet: palette custom properties + `static/style.css`.
//! 4. Render the page and write `index.html`.
//! 5. Copy the assets directory, if there is one.
//!
//! Nothing is written before steps 1 and 2 pass.

use crate::config::{self, ServeConfig, SiteConfig};
use crate::content::{self, Registry};
use crate::document::{self, DocumentMeta};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One rendered page region and how many list items it showed.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    pub name: &'static str,
    pub items: Option<(usize, &'static str)>,
}

/// What a build produced, for CLI output.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub page: PathBuf,
    pub page_bytes: usize,
    pub sections: Vec<SectionSummary>,
    pub frame: Vec<SectionSummary>,
    pub assets_dir: Option<PathBuf>,
    pub assets_copied: usize,
    /// Preview server settings from the config the page was built with.
    pub serve: ServeConfig,
}

/// Full stylesheet: palette variables followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Body sections in page order, with item counts for the data-driven ones.
pub fn section_summaries(registry: &Registry) -> Vec<SectionSummary> {
    vec![
        SectionSummary {
            name: "Hero",
            items: None,
        },
        SectionSummary {
            name: "Camp",
            items: Some((registry.camp_sites.len(), "sites")),
        },
        SectionSummary {
            name: "Guide",
            items: None,
        },
        SectionSummary {
            name: "Features",
            items: Some((registry.features.len(), "features")),
        },
        SectionSummary {
            name: "Get App",
            items: None,
        },
    ]
}

/// Navbar and footer, which frame every page.
pub fn frame_summaries(registry: &Registry) -> Vec<SectionSummary> {
    // link groups + contact + socials
    let footer_columns = registry.footer_links.len() + 2;
    vec![
        SectionSummary {
            name: "Navbar",
            items: Some((registry.nav_links.len(), "links")),
        },
        SectionSummary {
            name: "Footer",
            items: Some((footer_columns, "columns")),
        },
    ]
}

/// Build the site from `source` into `output_dir` using the built-in content.
pub fn generate(source: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let config = config::load_config(source)?;
    generate_with(
        &config,
        content::registry(),
        &document::HILINK_META,
        source,
        output_dir,
    )
}

/// Build with an explicit config, registry and metadata.
pub fn generate_with(
    config: &SiteConfig,
    registry: &Registry,
    meta: &DocumentMeta,
    source: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    registry.validate()?;
    debug!(base_url = %config.site.base_url, "config and content validated");

    let css = site_css(config);
    let html = document::render_page(meta, &config.site, &css, registry).into_string();

    fs::create_dir_all(output_dir)?;
    let page = output_dir.join("index.html");
    fs::write(&page, &html)?;
    info!(path = %page.display(), bytes = html.len(), "wrote page");

    let assets = source.join(&config.assets_dir);
    let (assets_dir, assets_copied) = if assets.is_dir() {
        let copied = copy_assets(&assets, output_dir)?;
        info!(from = %assets.display(), files = copied, "copied assets");
        (Some(assets), copied)
    } else {
        warn!(path = %assets.display(), "assets directory not found, page images will 404");
        (None, 0)
    };

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        page,
        page_bytes: html.len(),
        sections: section_summaries(registry),
        frame: frame_summaries(registry),
        assets_dir,
        assets_copied,
        serve: config.serve.clone(),
    })
}

/// Copy every file under `src` into `dst`, keeping relative paths.
///
/// When `dst` lies inside `src` (e.g. `assets_dir = "."` with `--output dist`)
/// its subtree is skipped, so the copy never reads what it writes.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let dst_real = dst.canonicalize()?;
    let walker = WalkDir::new(src)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            let inside_output = entry
                .path()
                .canonicalize()
                .is_ok_and(|real| real.starts_with(&dst_real));
            if inside_output {
                debug!(path = %entry.path().display(), "skipping output directory");
            }
            !inside_output
        });
    let mut copied = 0;
    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            // index.html is always the generated page
            if relative == Path::new("index.html") {
                warn!("skipping {} from assets", relative.display());
                continue;
            }
            fs::copy(entry.path(), &target)?;
            debug!(file = %relative.display(), "copied");
            copied += 1;
        }
    }
    Ok(copied)
}
