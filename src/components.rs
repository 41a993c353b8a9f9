//! Primitive components shared by the page sections.
//!
//! These never read the content registry. They take literals from the caller
//! and turn them into markup.

use maud::{Markup, Render, html};

/// HTML `type` of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
}

impl ButtonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
        }
    }
}

/// A rounded call-to-action button with an optional leading icon.
///
/// `variant` is an opaque stylesheet class (`btn_green`, `btn_white`, ...)
/// and is passed through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub kind: ButtonKind,
    pub title: &'a str,
    pub icon: Option<&'a str>,
    pub variant: &'a str,
    pub full: bool,
}

impl<'a> Button<'a> {
    pub fn new(title: &'a str, variant: &'a str) -> Self {
        Self {
            kind: ButtonKind::Button,
            title,
            icon: None,
            variant,
            full: false,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn full(mut self) -> Self {
        self.full = true;
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    fn class(&self) -> String {
        let mut class = format!("flexCenter gap-3 rounded-full border {}", self.variant);
        if self.full {
            class.push_str(" w-full");
        }
        class
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let icon = self.icon.filter(|i| !i.is_empty());
        html! {
            button class=(self.class()) type=(self.kind.as_str()) {
                @if let Some(icon) = icon {
                    (image(icon, self.title, 24, 24))
                }
                label."bold-16".whitespace-nowrap.cursor-pointer { (self.title) }
            }
        }
    }
}

/// An `<img>` with its intrinsic size. The file is not checked for existence.
pub fn image(src: &str, alt: &str, width: u32, height: u32) -> Markup {
    html! {
        img src=(src) alt=(alt) width=(width) height=(height) loading="lazy";
    }
}

/// Like [`image`], with extra classes.
pub fn image_with_class(src: &str, alt: &str, width: u32, height: u32, class: &str) -> Markup {
    html! {
        img class=(class) src=(src) alt=(alt) width=(width) height=(height) loading="lazy";
    }
}

/// Heading plus arbitrary content, stacked vertically.
///
/// Every footer column (link groups, contact, socials) is framed by this.
pub fn footer_column(title: &str, children: Markup) -> Markup {
    html! {
        div.flex.flex-col."gap-5" {
            h4."bold-18".whitespace-nowrap { (title) }
            (children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_full_width() {
        let html = Button::new("App Store", "btn_white").full().render().into_string();
        assert!(html.contains(r#"class="flexCenter gap-3 rounded-full border btn_white w-full""#));
    }

    #[test]
    fn button_intrinsic_width_by_default() {
        let html = Button::new("Download App", "btn_green").render().into_string();
        assert!(html.contains(r#"class="flexCenter gap-3 rounded-full border btn_green""#));
        assert!(!html.contains("w-full"));
    }

    #[test]
    fn button_renders_icon_before_title() {
        let html = Button::new("Login", "btn_dark_green")
            .icon("/user.svg")
            .render()
            .into_string();
        let icon_pos = html.find("/user.svg").unwrap();
        let title_pos = html.find("Login</label>").unwrap();
        assert!(icon_pos < title_pos);
        assert!(html.contains(r#"alt="Login""#));
    }

    #[test]
    fn button_without_icon_has_no_img() {
        let html = Button::new("Download App", "btn_green").render().into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn button_with_empty_icon_has_no_img() {
        let html = Button::new("Download App", "btn_green")
            .icon("")
            .render()
            .into_string();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn button_kind_attribute() {
        let plain = Button::new("Go", "btn_green").render().into_string();
        assert!(plain.contains(r#"type="button""#));
        let submit = Button::new("Go", "btn_green")
            .kind(ButtonKind::Submit)
            .render()
            .into_string();
        assert!(submit.contains(r#"type="submit""#));
    }

    #[test]
    fn unknown_variant_passes_through() {
        let html = Button::new("Go", "not-a-real-class").render().into_string();
        assert!(html.contains("not-a-real-class"));
    }

    #[test]
    fn image_keeps_declared_size() {
        let html = image("/phones.png", "phones", 550, 870).into_string();
        assert!(html.contains(r#"width="550""#));
        assert!(html.contains(r#"height="870""#));
    }

    #[test]
    fn footer_column_wraps_children_under_heading() {
        let html = footer_column("Social", html! { ul { li { "x" } } }).into_string();
        let heading = html.find("<h4").unwrap();
        let list = html.find("<ul>").unwrap();
        assert!(heading < list);
        assert!(html.contains(">Social</h4>"));
    }

    #[test]
    fn footer_column_escapes_title() {
        let html = footer_column("<b>", html! {}).into_string();
        assert!(html.contains("&lt;b&gt;"));
    }
}
