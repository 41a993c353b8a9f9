//! # Hilink
//!
//! The Hilink camping-app landing page, rendered to a single static
//! `index.html`. Every piece of copy on the page lives in one typed content
//! registry; the page is a pure function of that registry, the document
//! metadata and the site config.
//!
//! # Pipeline
//!
//! ```text
//! config.toml + content registry  →  render  →  dist/index.html
//!                     public/     →  copy    →  dist/
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Static content registry: nav links, features, camp sites, footer lists |
//! | [`components`] | Reusable markup: button, lazy image, footer column |
//! | [`sections`] | Page sections: navbar, hero, camp, guide, features, get app, footer |
//! | [`document`] | Document metadata and the `<html>` shell around the sections |
//! | [`config`] | `config.toml` loading, validation, and palette CSS |
//! | [`generate`] | Writes `index.html` and copies the assets directory |
//! | [`output`] | CLI output formatting for `build` and `check` |
//! | [`serve`] | Local preview server for the generated directory |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a compile error, interpolation is escaped, and there is no template
//! directory to ship alongside the binary.
//!
//! ## Content as Data
//!
//! Sections never hard-code list content. Navigation, features, camp sites
//! and footer columns are iterated from [`content::Registry`], so tests can
//! render the page against a swapped registry and the `content` command can
//! dump exactly what the page shows.
//!
//! ## One Page, Inlined CSS
//!
//! The output is one HTML file with its stylesheet inlined plus whatever
//! static assets sit next to it. It can be dropped on any file server.

pub mod components;
pub mod config;
pub mod content;
pub mod document;
pub mod generate;
pub mod output;
pub mod sections;
pub mod serve;

#[cfg(test)]
pub(crate) mod test_helpers;
