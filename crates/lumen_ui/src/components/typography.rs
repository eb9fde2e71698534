//! Text components
//!
//! [`Typography`] renders text in one of the theme's typography variants and
//! picks a semantic tag for it; [`Link`] is an anchor colored from the
//! palette with configurable underline behavior.

use std::sync::Arc;

use lumen_core::{el, Element, Event, Style};
use lumen_theme::TextVariant;

use super::shared::{self, class, modifier, ColorProp};
use crate::context::{build_children, BuildContext, Child, ElementBuilder};

/// Default element tag of a variant
pub fn variant_tag(variant: TextVariant) -> &'static str {
    match variant {
        TextVariant::H1 => "h1",
        TextVariant::H2 => "h2",
        TextVariant::H3 => "h3",
        TextVariant::H4 => "h4",
        TextVariant::H5 => "h5",
        TextVariant::H6 => "h6",
        TextVariant::Subtitle1 | TextVariant::Subtitle2 => "h6",
        TextVariant::Body1 | TextVariant::Body2 => "p",
        TextVariant::Caption | TextVariant::Overline | TextVariant::Button => "span",
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Inherit,
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

// ========== Typography ==========

/// Themed text block
#[derive(Clone, Debug, Default)]
pub struct Typography {
    variant: TextVariant,
    component: Option<String>,
    color: Option<ColorProp>,
    align: TextAlign,
    gutter_bottom: bool,
    no_wrap: bool,
    children: Vec<Child>,
}

impl Typography {
    pub fn new(content: impl Into<Child>) -> Self {
        Self::default().child(content)
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the tag chosen from the variant
    pub fn component(mut self, tag: &str) -> Self {
        self.component = Some(tag.to_string());
        self
    }

    pub fn color(mut self, color: impl Into<ColorProp>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn gutter_bottom(mut self, gutter: bool) -> Self {
        self.gutter_bottom = gutter;
        self
    }

    /// Single line, truncated with an ellipsis
    pub fn no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn tag(&self) -> &str {
        self.component
            .as_deref()
            .unwrap_or_else(|| variant_tag(self.variant))
    }
}

impl ElementBuilder for Typography {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let mut style = Style::new().set("margin", "0");
        style.merge(&shared::text_style(&theme, self.variant));
        if let Some(color) = &self.color {
            style.insert("color", color.resolve(&theme).to_css());
        }
        if self.align != TextAlign::Inherit {
            style.insert("text-align", self.align.as_css());
        }
        if self.gutter_bottom {
            style.insert("margin-bottom", "0.35em");
        }
        if self.no_wrap {
            style.insert("overflow", "hidden");
            style.insert("text-overflow", "ellipsis");
            style.insert("white-space", "nowrap");
        }

        el(self.tag())
            .class(class("typography"))
            .class(modifier("typography", self.variant.key()))
            .styles(&style)
            .children(build_children(&self.children, cx))
    }
}

pub fn typography(content: impl Into<Child>) -> Typography {
    Typography::new(content)
}

/// Shorthand for `typography(..).variant(variant)`
pub fn text_variant(variant: TextVariant, content: impl Into<Child>) -> Typography {
    Typography::new(content).variant(variant)
}

// ========== Link ==========

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Underline {
    #[default]
    Always,
    Hover,
    None,
}

impl Underline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hover => "hover",
            Self::None => "none",
        }
    }
}

/// Themed anchor
#[derive(Clone, Default)]
pub struct Link {
    href: String,
    underline: Underline,
    color: Option<ColorProp>,
    variant: Option<TextVariant>,
    external: bool,
    children: Vec<Child>,
    on_click: Option<Arc<dyn Fn(&Event) + Send + Sync>>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Default::default()
        }
    }

    pub fn underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    pub fn color(mut self, color: impl Into<ColorProp>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Open in a new browsing context
    pub fn external(mut self, external: bool) -> Self {
        self.external = external;
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for Link {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let color = self
            .color
            .as_ref()
            .map(|color| color.resolve(&theme))
            .unwrap_or_else(|| shared::color(&theme, "primary.main"));

        let mut style = Style::new().set("color", color.to_css()).set("cursor", "pointer");
        if let Some(variant) = self.variant {
            style.merge(&shared::text_style(&theme, variant));
        }
        style.insert(
            "text-decoration",
            match self.underline {
                Underline::Always => "underline",
                Underline::Hover | Underline::None => "none",
            },
        );
        if self.underline == Underline::Always {
            style.insert("text-decoration-color", color.with_alpha(0.4).to_css());
        }

        let mut link = el("a")
            .class(class("link"))
            .class(modifier("link", &format!("underline-{}", self.underline.as_str())))
            .attr("href", self.href.as_str())
            .when(self.external, |e| {
                e.attr("target", "_blank").attr("rel", "noopener noreferrer")
            })
            .styles(&style)
            .children(build_children(&self.children, cx));
        if let Some(handler) = &self.on_click {
            let handler = Arc::clone(handler);
            link = link.on_click(move |event| handler(event));
        }
        link
    }
}

pub fn link(href: impl Into<String>) -> Link {
    Link::new(href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_variant_tags() {
        assert_eq!(typography("x").variant(TextVariant::H2).build(&cx()).tag(), "h2");
        assert_eq!(typography("x").variant(TextVariant::Subtitle1).build(&cx()).tag(), "h6");
        assert_eq!(typography("x").build(&cx()).tag(), "p");
        assert_eq!(typography("x").variant(TextVariant::Caption).build(&cx()).tag(), "span");
        assert_eq!(
            typography("x").variant(TextVariant::H1).component("div").build(&cx()).tag(),
            "div"
        );
    }

    #[test]
    fn test_variant_style_from_theme() {
        let el = typography("Title").variant(TextVariant::H1).build(&cx());
        assert_eq!(el.style_value("font-size"), Some("96px"));
        assert_eq!(el.style_value("font-weight"), Some("300"));
        assert!(el.has_class("lumen-typography--h1"));
    }

    #[test]
    fn test_no_wrap_and_gutter() {
        let el = typography("long").no_wrap(true).gutter_bottom(true).build(&cx());
        assert_eq!(el.style_value("white-space"), Some("nowrap"));
        assert_eq!(el.style_value("margin-bottom"), Some("0.35em"));
    }

    #[test]
    fn test_overline_is_uppercase() {
        let el = typography("tag").variant(TextVariant::Overline).build(&cx());
        assert_eq!(el.style_value("text-transform"), Some("uppercase"));
    }

    #[test]
    fn test_link_underline_modes() {
        let always = link("/a").child("a").build(&cx());
        assert_eq!(always.style_value("text-decoration"), Some("underline"));
        let hover = link("/a").underline(Underline::Hover).build(&cx());
        assert_eq!(hover.style_value("text-decoration"), Some("none"));
        assert!(hover.has_class("lumen-link--underline-hover"));
    }

    #[test]
    fn test_external_link() {
        let el = link("https://example.com").external(true).build(&cx());
        assert_eq!(el.get_attr("target"), Some("_blank"));
        assert_eq!(el.get_attr("rel"), Some("noopener noreferrer"));
    }
}
