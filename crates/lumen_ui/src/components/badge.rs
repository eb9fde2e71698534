//! Badge
//!
//! A small count or dot anchored to the corner of its child.

use lumen_core::{el, px, Element};
use lumen_theme::Palette;

use super::shared::{self, class, modifier, part};
use crate::context::{BuildContext, Child, ElementBuilder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Standard,
    Dot,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeAnchor {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl BadgeAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeAnchor::TopRight => "top-right",
            BadgeAnchor::TopLeft => "top-left",
            BadgeAnchor::BottomRight => "bottom-right",
            BadgeAnchor::BottomLeft => "bottom-left",
        }
    }

    fn edges(self) -> (&'static str, &'static str) {
        match self {
            BadgeAnchor::TopRight => ("top", "right"),
            BadgeAnchor::TopLeft => ("top", "left"),
            BadgeAnchor::BottomRight => ("bottom", "right"),
            BadgeAnchor::BottomLeft => ("bottom", "left"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeContent {
    Count(u32),
    Text(String),
}

impl From<u32> for BadgeContent {
    fn from(count: u32) -> Self {
        BadgeContent::Count(count)
    }
}

impl From<&str> for BadgeContent {
    fn from(text: &str) -> Self {
        BadgeContent::Text(text.to_string())
    }
}

impl From<String> for BadgeContent {
    fn from(text: String) -> Self {
        BadgeContent::Text(text)
    }
}

/// Text shown for `content`, `None` when the badge is hidden
pub fn badge_label(content: Option<&BadgeContent>, max: u32, show_zero: bool) -> Option<String> {
    match content? {
        BadgeContent::Count(0) if !show_zero => None,
        BadgeContent::Count(count) if *count > max => Some(format!("{max}+")),
        BadgeContent::Count(count) => Some(count.to_string()),
        BadgeContent::Text(text) if text.is_empty() => None,
        BadgeContent::Text(text) => Some(text.clone()),
    }
}

#[derive(Clone)]
pub struct Badge {
    content: Option<BadgeContent>,
    child: Option<Child>,
    max: u32,
    show_zero: bool,
    invisible: bool,
    variant: BadgeVariant,
    anchor: BadgeAnchor,
    color: Palette,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            content: None,
            child: None,
            max: 99,
            show_zero: false,
            invisible: false,
            variant: BadgeVariant::default(),
            anchor: BadgeAnchor::default(),
            color: Palette::Primary,
        }
    }
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<BadgeContent>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Element the badge is anchored to
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Counts above `max` show as `"{max}+"`
    pub fn max(mut self, max: u32) -> Self {
        self.max = max;
        self
    }

    pub fn show_zero(mut self, show: bool) -> Self {
        self.show_zero = show;
        self
    }

    pub fn invisible(mut self, invisible: bool) -> Self {
        self.invisible = invisible;
        self
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dot(self) -> Self {
        self.variant(BadgeVariant::Dot)
    }

    pub fn anchor(mut self, anchor: BadgeAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }
}

impl ElementBuilder for Badge {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let label = badge_label(self.content.as_ref(), self.max, self.show_zero);
        let hidden = self.invisible
            || (self.variant == BadgeVariant::Standard && label.is_none());
        let (vertical, horizontal) = self.anchor.edges();
        let (size, padding) = match self.variant {
            BadgeVariant::Standard => (20.0, "0 6px"),
            BadgeVariant::Dot => (8.0, "0"),
        };

        let indicator = el("span")
            .class(part("badge", "badge"))
            .class_if(modifier("badge", "dot"), self.variant == BadgeVariant::Dot)
            .class_if(modifier("badge", "invisible"), hidden)
            .style("position", "absolute")
            .style(vertical, "0")
            .style(horizontal, "0")
            .style(
                "transform",
                format!(
                    "scale({}) translate({}50%, {}50%)",
                    if hidden { 0 } else { 1 },
                    if horizontal == "right" { "" } else { "-" },
                    if vertical == "top" { "-" } else { "" },
                ),
            )
            .style("display", "flex")
            .style("align-items", "center")
            .style("justify-content", "center")
            .style("box-sizing", "border-box")
            .style("min-width", px(size))
            .style("height", px(size))
            .style("padding", padding)
            .style("border-radius", px(size / 2.0))
            .style("font-size", px(12.0))
            .style("font-weight", "500")
            .style("line-height", "1")
            .style("background-color", shared::palette(&theme, self.color, "main").to_css())
            .style("color", shared::palette(&theme, self.color, "contrastText").to_css())
            .style("transition", "transform 225ms cubic-bezier(0.4, 0, 0.2, 1)")
            .when(self.variant == BadgeVariant::Standard, |e| {
                e.child_opt(label.clone())
            });

        el("span")
            .class(class("badge"))
            .class(modifier("badge", self.anchor.as_str()))
            .style("position", "relative")
            .style("display", "inline-flex")
            .style("vertical-align", "middle")
            .style("flex-shrink", "0")
            .child_opt(self.child.as_ref().map(|child| child.build(cx)))
            .child(indicator)
    }
}

pub fn badge() -> Badge {
    Badge::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(Some(&BadgeContent::Count(7)), 99, false).as_deref(), Some("7"));
        assert_eq!(badge_label(Some(&BadgeContent::Count(120)), 99, false).as_deref(), Some("99+"));
        assert_eq!(badge_label(Some(&BadgeContent::Count(0)), 99, false), None);
        assert_eq!(badge_label(Some(&BadgeContent::Count(0)), 99, true).as_deref(), Some("0"));
        assert_eq!(badge_label(Some(&BadgeContent::from("new")), 99, false).as_deref(), Some("new"));
        assert_eq!(badge_label(None, 99, false), None);
    }

    #[test]
    fn test_zero_count_hides_badge() {
        let cx = BuildContext::new().with_theme(Theme::light());
        let el = badge().content(0u32).child("Inbox").build(&cx);
        assert!(el.find_by_class("lumen-badge--invisible").is_some());

        let el = badge().content(3u32).child("Inbox").build(&cx);
        let indicator = el.find_by_class("lumen-badge__badge").unwrap();
        assert_eq!(indicator.text_content(), "3");
    }

    #[test]
    fn test_dot_has_no_text() {
        let cx = BuildContext::new().with_theme(Theme::light());
        let el = badge().dot().content(5u32).build(&cx);
        let indicator = el.find_by_class("lumen-badge__badge").unwrap();
        assert!(indicator.has_class("lumen-badge--dot"));
        assert_eq!(indicator.text_content(), "");
    }
}
