//! Document shell and page composition.
//!
//! The shell owns everything outside the page body: the `<head>` with all
//! document metadata, and the fixed navbar/footer frame around `<main>`. The
//! page composer decides which sections go inside `<main>` and in what order.
//!
//! ```text
//! html
//! ├── head      title, description, canonical, Open Graph, Twitter, icons, hints
//! └── body
//!     ├── navbar
//!     ├── main  hero → camp → guide → features → get_app
//!     └── footer
//! ```
//!
//! Everything here is a pure function of its arguments: the same registry,
//! metadata, settings and stylesheet always produce the same bytes.

use crate::config::SiteSettings;
use crate::content::Registry;
use crate::sections;
use maud::{DOCTYPE, Markup, PreEscaped, html};

#[derive(Debug, Clone, Copy)]
pub struct Author {
    pub name: &'static str,
    pub url: &'static str,
}

/// An icon `<link>`.
#[derive(Debug, Clone, Copy)]
pub struct IconRef {
    pub rel: &'static str,
    pub href: &'static str,
    pub sizes: &'static str,
    pub mime: Option<&'static str>,
}

/// Social preview image. Dimensions are declared, never measured.
#[derive(Debug, Clone, Copy)]
pub struct PreviewImage {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
    pub mime: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub site_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [PreviewImage],
}

#[derive(Debug, Clone, Copy)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub creator: &'static str,
    pub site: &'static str,
}

/// Literal document metadata, set once per page.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta {
    pub default_title: &'static str,
    /// `%s` is replaced by the page title.
    pub title_template: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: Author,
    pub creator: &'static str,
    pub publisher: &'static str,
    pub application_name: &'static str,
    pub category: &'static str,
    pub classification: &'static str,
    pub referrer: &'static str,
    /// `format-detection` content.
    pub format_detection: &'static str,
    pub robots: &'static str,
    pub googlebot: &'static str,
    pub icons: &'static [IconRef],
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// Extra `<meta name=... content=...>` platform hints.
    pub platform_hints: &'static [(&'static str, &'static str)],
}

impl DocumentMeta {
    /// Title for a named page, or the default title for the landing page.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(name) if !name.is_empty() => self.title_template.replace("%s", name),
            _ => self.default_title.to_string(),
        }
    }
}

pub const HILINK_META: DocumentMeta = DocumentMeta {
    default_title: "Hilink - Your Ultimate Camping & Adventure Companion | Offline Maps & AR Navigation",
    title_template: "%s | Hilink - Camping & Adventure App",
    description: "Discover amazing camping destinations, plan adventures with friends, and never get lost again with Hilink. Featuring offline maps, augmented reality navigation, adventure scheduling, and a global community of outdoor enthusiasts. Available on iOS and Android.",
    keywords: &[
        "camping app",
        "hiking app",
        "outdoor adventure",
        "offline maps",
        "augmented reality navigation",
        "camping destinations",
        "hiking trails",
        "adventure planning",
        "outdoor activities",
        "nature exploration",
        "camping guide",
        "hiking guide",
        "travel app",
        "adventure companion",
        "mountain climbing",
        "wilderness exploration",
        "camping community",
        "outdoor navigation",
        "AR navigation",
        "offline GPS",
        "camping spots",
        "hiking routes",
        "adventure scheduling",
        "outdoor recreation",
        "nature travel",
        "camping tips",
        "hiking tips",
        "Next.js",
        "React",
        "Tailwind CSS",
        "TypeScript",
        "Arnob Mahmud",
    ],
    author: Author {
        name: "Arnob Mahmud",
        url: "https://arnob-mahmud.vercel.app/",
    },
    creator: "Arnob Mahmud",
    publisher: "Arnob Mahmud",
    application_name: "Hilink",
    category: "Travel & Outdoor",
    classification: "Travel Application",
    referrer: "origin-when-cross-origin",
    format_detection: "telephone=no, address=no, email=no",
    robots: "index, follow",
    googlebot: "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
    icons: &[
        IconRef {
            rel: "icon",
            href: "/favicon.ico",
            sizes: "any",
            mime: None,
        },
        IconRef {
            rel: "apple-touch-icon",
            href: "/apple.svg",
            sizes: "180x180",
            mime: Some("image/svg+xml"),
        },
    ],
    open_graph: OpenGraph {
        kind: "website",
        site_name: "Hilink - Camping & Adventure App",
        title: "Hilink - Your Ultimate Camping & Adventure Companion",
        description: "Discover amazing camping destinations, plan adventures with friends, and never get lost again with Hilink. Featuring offline maps, augmented reality navigation, and a global community of outdoor enthusiasts.",
        images: &[
            PreviewImage {
                url: "/hero.png",
                width: 1200,
                height: 630,
                alt: "Hilink - Camping and Adventure App Hero Image showing beautiful outdoor destinations",
                mime: "image/png",
            },
            PreviewImage {
                url: "/phones.png",
                width: 1100,
                height: 1740,
                alt: "Hilink mobile app available on iOS and Android",
                mime: "image/png",
            },
        ],
    },
    twitter: TwitterCard {
        card: "summary_large_image",
        title: "Hilink - Your Ultimate Camping & Adventure Companion",
        description: "Discover amazing camping destinations, plan adventures with friends, and never get lost again with Hilink. Offline maps, AR navigation, and more!",
        images: &["/hero.png"],
        creator: "@arnob_mahmud",
        site: "@arnob_mahmud",
    },
    platform_hints: &[
        ("apple-mobile-web-app-capable", "yes"),
        ("apple-mobile-web-app-status-bar-style", "black-translucent"),
        ("apple-mobile-web-app-title", "Hilink"),
        ("mobile-web-app-capable", "yes"),
    ],
};

/// Renders the `<head>` contents.
fn document_head(meta: &DocumentMeta, site: &SiteSettings, title: &str, css: &str) -> Markup {
    let og = &meta.open_graph;
    let tw = &meta.twitter;
    html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (title) }
        meta name="description" content=(meta.description);
        meta name="keywords" content=(meta.keywords.join(","));
        meta name="author" content=(meta.author.name);
        link rel="author" href=(meta.author.url);
        meta name="creator" content=(meta.creator);
        meta name="publisher" content=(meta.publisher);
        meta name="application-name" content=(meta.application_name);
        meta name="category" content=(meta.category);
        meta name="classification" content=(meta.classification);
        meta name="referrer" content=(meta.referrer);
        meta name="format-detection" content=(meta.format_detection);
        meta name="robots" content=(meta.robots);
        meta name="googlebot" content=(meta.googlebot);
        link rel="canonical" href=(site.base_url);
        @for icon in meta.icons {
            link rel=(icon.rel) href=(icon.href) sizes=(icon.sizes) type=[icon.mime];
        }
        meta property="og:type" content=(og.kind);
        meta property="og:locale" content=(site.locale);
        meta property="og:url" content=(site.base_url);
        meta property="og:site_name" content=(og.site_name);
        meta property="og:title" content=(og.title);
        meta property="og:description" content=(og.description);
        @for image in og.images {
            meta property="og:image" content=(site.absolute_url(image.url));
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
            meta property="og:image:type" content=(image.mime);
        }
        meta name="twitter:card" content=(tw.card);
        meta name="twitter:site" content=(tw.site);
        meta name="twitter:creator" content=(tw.creator);
        meta name="twitter:title" content=(tw.title);
        meta name="twitter:description" content=(tw.description);
        @for image in tw.images {
            meta name="twitter:image" content=(site.absolute_url(image));
        }
        @for (name, content) in meta.platform_hints {
            meta name=(name) content=(content);
        }
        meta name="theme-color" content=(site.theme_color);
        style { (PreEscaped(css)) }
    }
}

/// Renders the full HTML document: head, then navbar, `main`, footer.
pub fn render_document(
    meta: &DocumentMeta,
    site: &SiteSettings,
    css: &str,
    registry: &Registry,
    content: Markup,
) -> Markup {
    let title = meta.page_title(None);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (document_head(meta, site, &title, css))
            }
            body {
                (sections::navbar(registry))
                main class="relative overflow-hidden" {
                    (content)
                }
                (sections::footer(registry))
            }
        }
    }
}

/// The landing page body, in its fixed section order.
pub fn render_home(registry: &Registry) -> Markup {
    html! {
        (sections::hero())
        (sections::camp(registry))
        (sections::guide())
        (sections::features(registry))
        (sections::get_app())
    }
}

/// The complete landing page.
pub fn render_page(
    meta: &DocumentMeta,
    site: &SiteSettings,
    css: &str,
    registry: &Registry,
) -> Markup {
    render_document(meta, site, css, registry, render_home(registry))
}
