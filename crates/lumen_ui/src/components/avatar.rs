//! Avatar
//!
//! Shows an image when one loads, otherwise the initials of `name`, and
//! finally a generic person glyph.

use lumen_core::{el, event_types, px, Color, Element, State};
use lumen_theme::Palette;

use super::image::{ImageLoad, ImageStatus};
use super::shared::{self, class, modifier, part, svg_icon, ComponentSize};
use crate::context::{BuildContext, Child, ElementBuilder};

const PERSON_PATH: &str = "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarVariant {
    #[default]
    Circular,
    Rounded,
    Square,
}

impl AvatarVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            AvatarVariant::Circular => "circular",
            AvatarVariant::Rounded => "rounded",
            AvatarVariant::Square => "square",
        }
    }
}

/// Up to two uppercase initials from a display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn diameter(size: ComponentSize) -> f32 {
    match size {
        ComponentSize::Small => 32.0,
        ComponentSize::Medium => 40.0,
        ComponentSize::Large => 56.0,
    }
}

#[derive(Clone, Default)]
pub struct Avatar {
    id: Option<String>,
    src: Option<String>,
    alt: Option<String>,
    name: Option<String>,
    content: Option<Child>,
    variant: AvatarVariant,
    size: ComponentSize,
    color: Option<Palette>,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id; keys the image load state
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Display name used for initials and the default alt text
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Custom content instead of initials
    pub fn child(mut self, content: impl Into<Child>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn variant(mut self, variant: AvatarVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    /// Background palette for the fallback content
    pub fn color(mut self, color: Palette) -> Self {
        self.color = Some(color);
        self
    }

    fn load_state(&self, src: &str, cx: &BuildContext) -> State<ImageLoad> {
        let fresh = || ImageLoad::new(src, None);
        let state = match &self.id {
            Some(id) => cx.use_state_keyed(&format!("avatar:{id}"), fresh),
            None => State::new(fresh()),
        };
        state.update(|load| {
            if !load.tracks(src, None) {
                *load = fresh();
            }
            load.start();
        });
        state
    }
}

impl ElementBuilder for Avatar {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let size = diameter(self.size);
        let radius = match self.variant {
            AvatarVariant::Circular => "50%".to_string(),
            AvatarVariant::Rounded => px(shared::radius(&theme, "md")),
            AvatarVariant::Square => "0".to_string(),
        };
        let alt = self.alt.clone().or_else(|| self.name.clone()).unwrap_or_default();

        let root = el("div")
            .class(class("avatar"))
            .class(modifier("avatar", self.variant.as_str()))
            .class(modifier("avatar", self.size.as_str()))
            .attr_opt("id", self.id.clone())
            .style("position", "relative")
            .style("display", "inline-flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("flex-shrink", "0")
            .style("overflow", "hidden")
            .style("width", px(size))
            .style("height", px(size))
            .style("border-radius", radius)
            .style("font-size", px(size * 0.45))
            .style("line-height", "1")
            .style("user-select", "none");

        if let Some(src) = self.src.as_deref().filter(|src| !src.is_empty()) {
            let state = self.load_state(src, cx);
            if state.with(|load| load.status()) != ImageStatus::Error {
                let on_load = state.clone();
                let on_error = state;
                return root.child(
                    el("img")
                        .class(part("avatar", "img"))
                        .attr("src", src)
                        .attr("alt", alt)
                        .style("width", "100%")
                        .style("height", "100%")
                        .style("object-fit", "cover")
                        .on(event_types::LOAD, move |_| on_load.update(ImageLoad::loaded))
                        .on(event_types::ERROR, move |_| {
                            on_error.update(|load| {
                                load.failed();
                            })
                        }),
                );
            }
        }

        let background = match self.color {
            Some(palette) => shared::palette(&theme, palette, "main"),
            None => shared::color(&theme, "grey.400"),
        };
        let foreground = match self.color {
            Some(palette) => shared::palette(&theme, palette, "contrastText"),
            None => Color::WHITE,
        };
        let root = root
            .class(part("avatar", "fallback"))
            .style("background-color", background.to_css())
            .style("color", foreground.to_css());

        match (&self.content, self.name.as_deref().map(initials)) {
            (Some(content), _) => root.child(content.build(cx)),
            (None, Some(letters)) if !letters.is_empty() => {
                root.attr("role", "img").attr("aria-label", alt).child(letters)
            }
            _ => root.child(svg_icon(PERSON_PATH, size * 0.75)),
        }
    }
}

pub fn avatar() -> Avatar {
    Avatar::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Event;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("  Grace  Brewster Hopper "), "GB");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_falls_back_to_initials_on_error() {
        let cx = cx();
        let av = avatar().id("me").src("me.png").name("Ada Lovelace");
        let el = av.build(&cx);
        el.find_by_class("lumen-avatar__img").unwrap().dispatch(&Event::error());

        let el = av.build(&cx);
        assert!(el.find_by_class("lumen-avatar__img").is_none());
        assert_eq!(el.text_content(), "AL");
        assert_eq!(el.get_attr("aria-label"), Some("Ada Lovelace"));
    }

    #[test]
    fn test_glyph_without_name() {
        let el = avatar().variant(AvatarVariant::Square).build(&cx());
        assert!(el.find(|e| e.tag() == "svg").is_some());
        assert_eq!(el.style_value("border-radius"), Some("0"));
    }
}
