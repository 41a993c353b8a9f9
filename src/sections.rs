//! Page sections.
//!
//! Each function renders one top-level region of the landing page. Sections
//! that show list data take the [`Registry`] and map over it in declaration
//! order; the rest are fixed copy.

use crate::components::{Button, footer_column, image, image_with_class};
use crate::content::{CampSiteDescriptor, Feature, ROOT_HREF, Registry};
use maud::{Markup, html};

const RATING_STARS: usize = 5;

/// Logo, primary links, login button and the mobile menu icon.
pub fn navbar(registry: &Registry) -> Markup {
    html! {
        nav class="flexBetween max-container padding-container relative z-30 py-5" {
            a href=(ROOT_HREF) {
                (image("/hilink-logo.svg", "logo", 74, 29))
            }
            ul class="hidden h-full gap-12 lg:flex" {
                @for link in registry.nav_links {
                    li {
                        a class="regular-16 text-gray-50 flexCenter cursor-pointer pb-1.5 transition-all hover:font-bold"
                            href=(link.href) { (link.label) }
                    }
                }
            }
            div class="lg:flexCenter hidden" {
                (Button::new("Login", "btn_dark_green").icon("/user.svg"))
            }
            (image_with_class("/menu.svg", "menu", 32, 32, "inline-block cursor-pointer lg:hidden"))
        }
    }
}

pub fn hero() -> Markup {
    html! {
        section class="max-container padding-container flex flex-col gap-20 py-10 pb-32 md:gap-28 lg:py-20 xl:flex-row" {
            div.hero-map {}
            div class="relative z-20 flex flex-1 flex-col xl:w-1/2" {
                (image_with_class("/camp.svg", "camp", 50, 50, "absolute left-[-5px] top-[-30px] w-10 lg:w-[50px]"))
                h1 class="bold-52 lg:bold-88" { "Putuk Truno Camp Area" }
                p class="regular-16 mt-6 text-gray-30 xl:max-w-[520px]" {
                    "We want to be on each of your journeys seeking the satisfaction of seeing the incorruptible beauty of nature. We can help you on an adventure around the world in just one app"
                }
                div class="my-11 flex flex-wrap gap-5" {
                    div class="flex items-center gap-2" {
                        @for _ in 0..RATING_STARS {
                            (image("/star.svg", "star", 24, 24))
                        }
                    }
                    p class="bold-16 lg:bold-20 text-blue-70" {
                        "198k"
                        span class="regular-16 lg:regular-20 ml-1" { "Excellent Reviews" }
                    }
                }
                div class="flex flex-col w-full gap-3 sm:flex-row" {
                    (Button::new("Download App", "btn_green"))
                    (Button::new("How we work?", "btn_white_text").icon("/play.svg"))
                }
            }
            div class="relative flex flex-1 items-start" {
                div class="relative z-20 flex w-[268px] flex-col gap-8 rounded-3xl bg-green-90 px-7 py-8" {
                    div class="flex flex-col" {
                        div.flexBetween {
                            p class="regular-16 text-gray-20" { "Location" }
                            (image("/close.svg", "close", 24, 24))
                        }
                        p class="bold-20 text-white" { "Aguas Calientes" }
                    }
                    div.flexBetween {
                        div class="flex flex-col" {
                            p class="regular-16 block text-gray-20" { "Distance" }
                            p class="bold-20 text-white" { "173.28 mi" }
                        }
                        div class="flex flex-col" {
                            p class="regular-16 block text-gray-20" { "Elevation" }
                            p class="bold-20 text-white" { "2.040 km" }
                        }
                    }
                }
            }
        }
    }
}

/// One destination card. The avatar cluster comes from `registry.people`.
pub fn camp_site(registry: &Registry, site: &CampSiteDescriptor) -> Markup {
    let card_class = format!(
        "camp-site h-full w-full min-w-[1100px] {} bg-cover bg-no-repeat lg:rounded-r-5xl 2xl:rounded-5xl",
        site.background.css_class()
    );
    html! {
        div class=(card_class) {
            div class="flex h-full flex-col items-start justify-between p-6 lg:px-20 lg:py-10" {
                div class="flexCenter gap-4" {
                    div class="rounded-full bg-green-50 p-4" {
                        (image("/folded-map.svg", "map", 28, 28))
                    }
                    div class="flex flex-col gap-1" {
                        h4 class="bold-18 text-white" { (site.title) }
                        p class="regular-14 text-white" { (site.subtitle) }
                    }
                }
                div class="flexCenter gap-6" {
                    span class="flex -space-x-4 overflow-hidden" {
                        @for url in registry.people {
                            (image_with_class(url, "person", 52, 52, "inline-block h-10 w-10 rounded-full"))
                        }
                    }
                    p class="bold-16 md:bold-20 text-white" { (site.people_joined) }
                }
            }
        }
    }
}

/// Horizontally scrolling destination strip followed by the call-to-action panel.
pub fn camp(registry: &Registry) -> Markup {
    html! {
        section class="2xl:max-container relative flex flex-col py-10 lg:mb-10 lg:py-20 xl:mb-20" {
            div class="hide-scrollbar flex h-[340px] w-full items-start justify-start gap-8 overflow-x-auto lg:h-[400px] xl:h-[640px]" {
                @for site in registry.camp_sites {
                    (camp_site(registry, site))
                }
            }
            div class="flexEnd mt-10 px-6 lg:-mt-60 lg:mr-6" {
                div class="bg-green-50 p-8 lg:max-w-[500px] xl:max-w-[734px] xl:rounded-5xl xl:px-16 xl:py-20 relative w-full overflow-hidden rounded-3xl" {
                    h2 class="regular-24 md:regular-32 2xl:regular-64 capitalize text-white" {
                        strong { "Feeling Lost" }
                        " And Not Knowing The Way?"
                    }
                    p class="regular-14 xl:regular-16 mt-5 text-white" {
                        "Starting from the anxiety of the climbers when visiting a new climbing location, the possibility of getting lost is very large. That's why we are here for those of you who want to start an adventure"
                    }
                    (image_with_class("/quote.svg", "camp-2", 186, 219, "camp-quote"))
                }
            }
        }
    }
}

pub fn guide() -> Markup {
    html! {
        section class="flexCenter flex-col" {
            div class="padding-container max-container w-full pb-24" {
                (image("/camp.svg", "camp", 50, 50))
                p class="uppercase regular-18 -mt-1 mb-3 text-green-50" { "We are here for you" }
                div class="flex flex-wrap justify-between gap-5 lg:gap-10" {
                    h2 class="bold-40 lg:bold-64 xl:max-w-[390px]" { "Guide You to Easy Path" }
                    p class="regular-16 text-gray-30 xl:max-w-[520px]" {
                        "Only with the hilink application you will no longer get lost and get lost again, because we already support offline maps when there is no internet connection in the field. Invite your friends, relatives and friends to have fun in the wilderness through the valley and reach the top of the mountain"
                    }
                }
            }
            div class="flexCenter max-container relative w-full" {
                (image_with_class("/boat.png", "boat", 1440, 580, "w-full object-cover object-center 2xl:rounded-5xl"))
                div class="guide-card absolute flex bg-white py-8 pl-5 pr-7 gap-3 rounded-3xl border shadow-md md:left-[5%] lg:top-20" {
                    (image_with_class("/meter.svg", "meter", 16, 158, "h-full w-auto"))
                    div class="flexBetween flex-col" {
                        div class="flex w-full flex-col" {
                            div class="flexBetween w-full" {
                                p class="regular-16 text-gray-20" { "Destination" }
                                p class="bold-16 text-green-50" { "48 min" }
                            }
                            p class="bold-20 mt-2" { "Aguas Calientes" }
                        }
                        div class="flex w-full flex-col" {
                            p class="regular-16 text-gray-20" { "Start track" }
                            h4 class="bold-20 mt-2 whitespace-nowrap" { "Wonorejo Pasuruan" }
                        }
                    }
                }
            }
        }
    }
}

/// One grid cell. The variant only picks the badge colour.
pub fn feature_item(feature: &Feature) -> Markup {
    let badge_class = format!("rounded-full p-4 lg:p-7 {}", feature.variant.css_class());
    html! {
        li class="feature-item flex w-full flex-1 flex-col items-start" {
            div class=(badge_class) {
                (image(feature.icon, "map", 28, 28))
            }
            h2 class="bold-20 lg:bold-32 mt-5 capitalize" { (feature.title) }
            p class="regular-16 mt-5 bg-white/80 text-gray-30 lg:mt-[30px] lg:bg-none" {
                (feature.description)
            }
        }
    }
}

/// Phone artwork beside a one-column grid that becomes two columns at `md`.
pub fn features(registry: &Registry) -> Markup {
    html! {
        section class="flex-col flexCenter overflow-hidden bg-feature-bg bg-center bg-no-repeat py-24" {
            div class="max-container padding-container relative w-full flex justify-end" {
                div class="flex flex-1 lg:min-h-[900px]" {
                    (image_with_class("/phone.png", "phone", 440, 1000, "feature-phone"))
                }
                div class="z-20 flex w-full flex-col lg:w-[60%]" {
                    div.relative {
                        (image_with_class("/camp.svg", "camp", 50, 50, "absolute left-[-5px] top-[-28px] w-10 lg:w-[50px]"))
                        h2 class="bold-40 lg:bold-64" { "Our Features" }
                    }
                    ul class="mt-10 grid gap-10 md:grid-cols-2 lg:mt-20 lg:gap-20" {
                        @for feature in registry.features {
                            (feature_item(feature))
                        }
                    }
                }
            }
        }
    }
}

pub fn get_app() -> Markup {
    html! {
        section class="flexCenter w-full flex-col pb-[100px]" {
            div.get-app {
                div class="z-20 flex w-full flex-1 flex-col items-start justify-center gap-12" {
                    h2 class="bold-40 lg:bold-64 xl:max-w-[320px]" { "Get for free now!" }
                    p class="regular-16 text-gray-10" { "Available on iOS and Android" }
                    div class="flex w-full flex-col gap-3 whitespace-nowrap xl:flex-row" {
                        (Button::new("App Store", "btn_white").icon("/apple.svg").full())
                        (Button::new("Play Store", "btn_dark_green_outline").icon("/android.svg").full())
                    }
                }
                div class="flex flex-1 items-center justify-end" {
                    (image("/phones.png", "phones", 550, 870))
                }
            }
        }
    }
}

/// Branding, one column per link group, contact and social columns, copyright.
pub fn footer(registry: &Registry) -> Markup {
    html! {
        footer class="flexCenter mb-24" {
            div class="padding-container max-container flex w-full flex-col gap-14" {
                div class="flex flex-col items-start justify-center gap-[10%] md:flex-row" {
                    a class="mb-10" href=(ROOT_HREF) {
                        (image("/hilink-logo.svg", "logo", 74, 29))
                    }
                    div class="flex flex-wrap gap-10 sm:justify-between md:flex-1" {
                        @for group in registry.footer_links {
                            (footer_column(group.title, html! {
                                ul class="footer-links regular-14 flex flex-col gap-4 text-gray-30" {
                                    @for link in group.links {
                                        li { a href=(ROOT_HREF) { (link) } }
                                    }
                                }
                            }))
                        }
                        div class="footer-contact flex flex-col gap-5" {
                            (footer_column(registry.contact.title, html! {
                                @for entry in registry.contact.links {
                                    a class="flex gap-4 md:flex-col lg:flex-row" href=(ROOT_HREF) {
                                        p.whitespace-nowrap { (entry.label) ":" }
                                        p class="medium-14 whitespace-nowrap text-blue-70" { (entry.value) }
                                    }
                                }
                            }))
                        }
                        div class="footer-socials flex flex-col gap-5" {
                            (footer_column(registry.socials.title, html! {
                                ul class="regular-14 flex gap-4 text-gray-30" {
                                    @for icon in registry.socials.links {
                                        li { a href=(ROOT_HREF) { (image(icon, "logo", 24, 24)) } }
                                    }
                                }
                            }))
                        }
                    }
                }
                div class="border bg-gray-20" {}
                p class="regular-14 w-full text-center text-gray-30" { "2025 Hilink | All rights reserved" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FeatureVariant, HILINK, NavLink};
    use crate::test_helpers::{assert_in_order, count, positions, slice_between};

    #[test]
    fn navbar_links_in_declared_order() {
        let html = navbar(&HILINK).into_string();
        let labels: Vec<&str> = HILINK.nav_links.iter().map(|l| l.label).collect();
        assert_in_order(&html, &labels);
        assert!(html.contains("Login"));
        assert!(html.contains("/menu.svg"));
    }

    #[test]
    fn navbar_renders_one_item_per_link() {
        let html = navbar(&HILINK).into_string();
        assert_eq!(count(&html, "<li>"), HILINK.nav_links.len());
    }

    #[test]
    fn navbar_escapes_labels() {
        let registry = Registry {
            nav_links: &[NavLink {
                href: "/",
                key: "xss",
                label: "<script>alert('x')</script>",
            }],
            ..HILINK
        };
        let html = navbar(&registry).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn hero_has_five_stars_and_two_buttons() {
        let html = hero().into_string();
        assert_eq!(count(&html, "/star.svg"), RATING_STARS);
        assert_eq!(count(&html, "<button"), 2);
        assert!(html.contains("Putuk Truno Camp Area"));
        assert!(html.contains("198k"));
    }

    #[test]
    fn camp_maps_every_site() {
        let html = camp(&HILINK).into_string();
        assert_eq!(count(&html, "min-w-[1100px]"), HILINK.camp_sites.len());
        assert_in_order(&html, &["Putuk Truno Camp", "Mountain View Camp"]);
        assert!(html.contains("bg-bg-img-1"));
        assert!(html.contains("bg-bg-img-2"));
    }

    #[test]
    fn camp_strip_scrolls_horizontally() {
        let html = camp(&HILINK).into_string();
        assert!(html.contains("overflow-x-auto"));
        assert!(html.contains("Feeling Lost"));
    }

    #[test]
    fn camp_site_avatars_follow_people_order() {
        let html = camp_site(&HILINK, &HILINK.camp_sites[0]).into_string();
        assert_eq!(count(&html, r#"alt="person""#), HILINK.people.len());
        let found = positions(&html, HILINK.people);
        assert!(found.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("50+ Joined"));
    }

    #[test]
    fn guide_overlay_copy() {
        let html = guide().into_string();
        for text in [
            "Destination",
            "48 min",
            "Aguas Calientes",
            "Start track",
            "Wonorejo Pasuruan",
        ] {
            assert!(html.contains(text), "missing {text}");
        }
    }

    #[test]
    fn features_renders_one_item_per_record() {
        let html = features(&HILINK).into_string();
        assert_eq!(count(&html, "feature-item"), 4);
        let titles: Vec<&str> = HILINK.features.iter().map(|f| f.title).collect();
        assert_in_order(&html, &titles);
    }

    #[test]
    fn fourth_feature_is_orange() {
        let fourth = &HILINK.features[3];
        assert_eq!(fourth.variant, FeatureVariant::Orange);
        let html = feature_item(fourth).into_string();
        assert!(html.contains("bg-orange-50"));
        assert!(html.contains("Many new locations every month"));

        let all = features(&HILINK).into_string();
        let items: Vec<&str> = all.split("<li class=\"feature-item").skip(1).collect();
        assert_eq!(items.len(), 4);
        assert!(items[3].contains("bg-orange-50"));
        assert!(items[3].contains("Many new locations every month"));
        assert!(items[..3].iter().all(|i| i.contains("bg-green-50")));
    }

    #[test]
    fn features_grid_has_single_breakpoint() {
        let html = features(&HILINK).into_string();
        assert!(html.contains("md:grid-cols-2"));
        assert!(!html.contains("lg:grid-cols"));
        assert!(!html.contains("xl:grid-cols"));
    }

    #[test]
    fn get_app_buttons_are_full_width() {
        let html = get_app().into_string();
        assert_eq!(count(&html, "<button"), 2);
        assert_eq!(count(&html, " w-full\""), 2);
        assert!(html.contains("btn_white w-full"));
        assert!(html.contains("btn_dark_green_outline w-full"));
        assert!(html.contains("/apple.svg"));
        assert!(html.contains("/android.svg"));
    }

    #[test]
    fn footer_columns_and_link_counts() {
        let html = footer(&HILINK).into_string();
        let groups: Vec<&str> = html
            .split("<ul class=\"footer-links")
            .skip(1)
            .map(|s| s.split("</ul>").next().unwrap())
            .collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(count(groups[0], "<a "), 6);
        assert_eq!(count(groups[1], "<a "), 3);

        let contact = slice_between(&html, "footer-contact", "footer-socials");
        assert_eq!(count(contact, "<a "), 2);
        assert!(contact.contains("Admin Officer:"));

        let socials = slice_between(&html, "footer-socials", "</ul>");
        assert_eq!(count(socials, "<img"), 5);

        // 2 link groups + contact + social
        assert_eq!(count(&html, "<h4"), 4);
        assert!(html.contains("2025 Hilink | All rights reserved"));
    }

    #[test]
    fn footer_links_point_at_root() {
        let html = footer(&HILINK).into_string();
        assert_eq!(count(&html, "href=\"/\""), count(&html, "<a "));
    }
}
