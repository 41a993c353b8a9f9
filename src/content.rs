//! Content registry: every piece of data-bound copy on the landing page.
//!
//! The registry is a single immutable value, [`HILINK`], built at compile time
//! and handed to section renderers by reference. Nothing in this module can
//! mutate it; section components only read from it.
//!
//! ## Collections
//!
//! | Field | Rendered by | List identifier |
//! |-------|-------------|-----------------|
//! | `nav_links` | navbar | `key` |
//! | `people` | camp site avatar cluster | `path-index` |
//! | `features` | features grid | `title` |
//! | `camp_sites` | camp strip | `title` |
//! | `footer_links` | footer link columns | `title-index` |
//! | `contact` | footer contact column | `label-index` |
//! | `socials` | footer social column | `path-index` |
//!
//! Iteration order is declaration order and is the order things appear on the
//! page. Identifiers must be unique within their list; [`Registry::validate`]
//! enforces that before a build writes anything.

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Destination of every link that has no real target yet.
pub const ROOT_HREF: &str = "/";

#[derive(Error, Debug, PartialEq)]
pub enum ContentError {
    #[error("duplicate key {key:?} in {list}")]
    DuplicateKey { list: &'static str, key: String },
    #[error("empty entry at position {index} in {list}")]
    Empty { list: &'static str, index: usize },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub href: &'static str,
    pub key: &'static str,
    pub label: &'static str,
}

/// Visual treatment of a feature badge. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureVariant {
    Green,
    Orange,
}

impl FeatureVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            FeatureVariant::Green => "bg-green-50",
            FeatureVariant::Orange => "bg-orange-50",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub icon: &'static str,
    pub variant: FeatureVariant,
    pub description: &'static str,
}

/// Background artwork of a camp site card, resolved by the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CampBackground {
    One,
    Two,
}

impl CampBackground {
    pub fn css_class(self) -> &'static str {
        match self {
            CampBackground::One => "bg-bg-img-1",
            CampBackground::Two => "bg-bg-img-2",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CampSiteDescriptor {
    pub background: CampBackground,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub people_joined: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FooterLinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactGroup {
    pub title: &'static str,
    pub links: &'static [ContactEntry],
}

/// Icon-only links; each entry is an image path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

/// The full set of records behind the page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Registry {
    pub nav_links: &'static [NavLink],
    pub people: &'static [&'static str],
    pub features: &'static [Feature],
    pub camp_sites: &'static [CampSiteDescriptor],
    pub footer_links: &'static [FooterLinkGroup],
    pub contact: ContactGroup,
    pub socials: SocialGroup,
}

/// Identifier of the `index`-th entry of a list whose labels may repeat.
pub fn list_key(label: &str, index: usize) -> String {
    format!("{label}-{index}")
}

impl Registry {
    /// Check that every list has non-empty entries with pairwise unique identifiers.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_list("nav_links", self.nav_links.iter().map(|l| l.key.to_string()))?;
        check_non_empty("nav_links", self.nav_links.iter().map(|l| l.label))?;
        check_list(
            "people",
            self.people
                .iter()
                .enumerate()
                .map(|(idx, p)| list_key(p, idx)),
        )?;
        check_non_empty("people", self.people.iter().copied())?;
        check_list("features", self.features.iter().map(|f| f.title.to_string()))?;
        check_non_empty("features", self.features.iter().map(|f| f.icon))?;
        check_list(
            "camp_sites",
            self.camp_sites.iter().map(|c| c.title.to_string()),
        )?;
        check_list(
            "footer_links",
            self.footer_links
                .iter()
                .enumerate()
                .map(|(idx, g)| list_key(g.title, idx)),
        )?;
        check_non_empty("footer_links", self.footer_links.iter().map(|g| g.title))?;
        for group in self.footer_links {
            check_list(
                "footer_links.links",
                group
                    .links
                    .iter()
                    .enumerate()
                    .map(|(idx, link)| list_key(link, idx)),
            )?;
            check_non_empty("footer_links.links", group.links.iter().copied())?;
        }
        check_list(
            "contact",
            self.contact
                .links
                .iter()
                .enumerate()
                .map(|(idx, c)| list_key(c.label, idx)),
        )?;
        check_non_empty("contact", self.contact.links.iter().map(|c| c.value))?;
        check_list(
            "socials",
            self.socials
                .links
                .iter()
                .enumerate()
                .map(|(idx, s)| list_key(s, idx)),
        )?;
        check_non_empty("socials", self.socials.links.iter().copied())?;
        Ok(())
    }
}

fn check_list(
    list: &'static str,
    keys: impl Iterator<Item = String>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for (index, key) in keys.enumerate() {
        if key.trim().is_empty() {
            return Err(ContentError::Empty { list, index });
        }
        if !seen.insert(key.clone()) {
            return Err(ContentError::DuplicateKey { list, key });
        }
    }
    Ok(())
}

fn check_non_empty<'a>(
    list: &'static str,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    match values.enumerate().find(|(_, v)| v.trim().is_empty()) {
        Some((index, _)) => Err(ContentError::Empty { list, index }),
        None => Ok(()),
    }
}

/// The registry the site is built from.
pub fn registry() -> &'static Registry {
    &HILINK
}

pub static HILINK: Registry = Registry {
    nav_links: &[
        NavLink {
            href: "/",
            key: "home",
            label: "Home",
        },
        NavLink {
            href: "/",
            key: "how_hilink_work",
            label: "How Hilink Work?",
        },
        NavLink {
            href: "/",
            key: "services",
            label: "Services",
        },
        NavLink {
            href: "/",
            key: "pricing ",
            label: "Pricing ",
        },
        NavLink {
            href: "/",
            key: "contact_us",
            label: "Contact Us",
        },
    ],
    people: &[
        "/person-1.png",
        "/person-2.png",
        "/person-3.png",
        "/person-4.png",
    ],
    features: &[
        Feature {
            title: "Real maps can be offline",
            icon: "/map.svg",
            variant: FeatureVariant::Green,
            description: "We provide a solution for you to be able to use our application when climbing, yes offline maps you can use at any time there is no signal at the location",
        },
        Feature {
            title: "Set an adventure schedule",
            icon: "/calendar.svg",
            variant: FeatureVariant::Green,
            description: "Schedule an adventure with friends. On holidays, there are many interesting offers from Hilink. That way, there's no more discussion",
        },
        Feature {
            title: "Technology using augment reality",
            icon: "/tech.svg",
            variant: FeatureVariant::Green,
            description: "Technology uses augmented reality as a guide to your hiking trail in the forest to the top of the mountain. Already supported by the latest technology without an internet connection",
        },
        Feature {
            title: "Many new locations every month",
            icon: "/location.svg",
            variant: FeatureVariant::Orange,
            description: "Lots of new locations every month, because we have a worldwide community of climbers who share their best experiences with climbing",
        },
    ],
    camp_sites: &[
        CampSiteDescriptor {
            background: CampBackground::One,
            title: "Putuk Truno Camp",
            subtitle: "Prigen, Pasuruan",
            people_joined: "50+ Joined",
        },
        CampSiteDescriptor {
            background: CampBackground::Two,
            title: "Mountain View Camp",
            subtitle: "Somewhere in the Wilderness",
            people_joined: "50+ Joined",
        },
    ],
    footer_links: &[
        FooterLinkGroup {
            title: "Learn More",
            links: &[
                "About Hilink",
                "Press Releases",
                "Environment",
                "Jobs",
                "Privacy Policy",
                "Contact Us",
            ],
        },
        FooterLinkGroup {
            title: "Our Community",
            links: &["Climbing xixixi", "Hiking hilink", "Hilink kinthill"],
        },
    ],
    contact: ContactGroup {
        title: "Contact Us",
        links: &[
            ContactEntry {
                label: "Admin Officer",
                value: "123-456-7890",
            },
            ContactEntry {
                label: "Email Officer",
                value: "arnob_t78@yahoo.com",
            },
        ],
    },
    socials: SocialGroup {
        title: "Social",
        links: &[
            "/facebook.svg",
            "/instagram.svg",
            "/twitter.svg",
            "/youtube.svg",
            "/wordpress.svg",
        ],
    },
};
