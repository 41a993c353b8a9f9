//! CLI output formatting.
//!
//! Output is **information-first**: each page region leads with its
//! positional index and name, with list sizes as the detail. Paths are
//! secondary context on indented lines.
//!
//! ## Build
//!
//! ```text
//! Page
//! 001 Hero
//! 002 Camp (2 sites)
//! 003 Guide
//! 004 Features (4 features)
//! 005 Get App
//!
//! Frame
//!     Navbar (5 links)
//!     Footer (4 columns)
//!
//! Assets
//!     public/ → 31 files
//!
//! Generated index.html (48213 bytes) → dist/index.html
//! ```
//!
//! ## Check
//!
//! ```text
//! Content
//!     nav_links: 5
//!     ...
//! Config
//!     config.toml
//! ```
//!
//! Each `format_*` function is pure (returns `Vec<String>`); the `print_*`
//! wrappers write to stdout.

use crate::content::Registry;
use crate::generate::{GenerateReport, SectionSummary};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `Camp (2 sites)` or just `Hero`.
fn section_label(section: &SectionSummary) -> String {
    match section.items {
        Some((n, unit)) => format!("{} ({} {})", section.name, n, unit),
        None => section.name.to_string(),
    }
}

/// Format the result of a build.
pub fn format_build_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Page".to_string()];
    for (i, section) in report.sections.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), section_label(section)));
    }

    lines.push(String::new());
    lines.push("Frame".to_string());
    for section in &report.frame {
        lines.push(format!("    {}", section_label(section)));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    match &report.assets_dir {
        Some(dir) => {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.display().to_string());
            lines.push(format!(
                "    {}/ \u{2192} {} files",
                name, report.assets_copied
            ));
        }
        None => lines.push("    (none)".to_string()),
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated index.html ({} bytes) \u{2192} {}",
        report.page_bytes,
        report.page.display()
    ));
    lines
}

pub fn print_build_output(report: &GenerateReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

/// Format a content and config inventory for `check`.
pub fn format_check_output(registry: &Registry, source_root: &Path, assets_dir: &str) -> Vec<String> {
    let footer_links: usize = registry.footer_links.iter().map(|g| g.links.len()).sum();
    let mut lines = vec![
        "Content".to_string(),
        format!("    nav_links: {}", registry.nav_links.len()),
        format!("    people: {}", registry.people.len()),
        format!("    features: {}", registry.features.len()),
        format!("    camp_sites: {}", registry.camp_sites.len()),
        format!(
            "    footer_links: {} groups, {} links",
            registry.footer_links.len(),
            footer_links
        ),
        format!("    contact: {}", registry.contact.links.len()),
        format!("    socials: {}", registry.socials.links.len()),
        String::new(),
        "Config".to_string(),
    ];

    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (stock defaults)".to_string());
    }
    if source_root.join(assets_dir).is_dir() {
        lines.push(format!("    {}/", assets_dir));
    }
    lines
}

pub fn print_check_output(registry: &Registry, source_root: &Path, assets_dir: &str) {
    for line in format_check_output(registry, source_root, assets_dir) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServeConfig;
    use crate::content::HILINK;
    use crate::generate::{frame_summaries, section_summaries};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn report(assets_dir: Option<PathBuf>, assets_copied: usize) -> GenerateReport {
        GenerateReport {
            output_dir: PathBuf::from("dist"),
            page: PathBuf::from("dist/index.html"),
            page_bytes: 1234,
            sections: section_summaries(&HILINK),
            frame: frame_summaries(&HILINK),
            assets_dir,
            assets_copied,
            serve: ServeConfig::default(),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(12), "012");
    }

    #[test]
    fn build_output_lists_sections_in_order() {
        let lines = format_build_output(&report(None, 0));
        assert_eq!(
            &lines[..6],
            &[
                "Page",
                "001 Hero",
                "002 Camp (2 sites)",
                "003 Guide",
                "004 Features (4 features)",
                "005 Get App",
            ]
        );
        assert!(lines.contains(&"    Navbar (5 links)".to_string()));
        assert!(lines.contains(&"    Footer (4 columns)".to_string()));
        assert!(lines.contains(&"    (none)".to_string()));
    }

    #[test]
    fn build_output_reports_assets_and_page() {
        let lines = format_build_output(&report(Some(PathBuf::from("site/public")), 31));
        assert!(lines.contains(&"    public/ \u{2192} 31 files".to_string()));
        let last = lines.last().unwrap();
        assert!(last.starts_with("Generated index.html (1234 bytes)"));
        assert!(last.ends_with("index.html"));
    }

    #[test]
    fn check_output_counts_content() {
        let tmp = TempDir::new().unwrap();
        let lines = format_check_output(&HILINK, tmp.path(), "public");
        assert!(lines.contains(&"    footer_links: 2 groups, 9 links".to_string()));
        assert!(lines.contains(&"    socials: 5".to_string()));
        assert!(lines.contains(&"    (stock defaults)".to_string()));
        assert!(!lines.contains(&"    public/".to_string()));
    }

    #[test]
    fn check_output_lists_config_and_assets() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "").unwrap();
        std::fs::create_dir(tmp.path().join("public")).unwrap();
        let lines = format_check_output(&HILINK, tmp.path(), "public");
        assert!(lines.contains(&"    config.toml".to_string()));
        assert!(lines.contains(&"    public/".to_string()));
    }
}
