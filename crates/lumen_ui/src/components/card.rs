//! Card surface with header, content and actions sections

use lumen_core::{el, px, Element};
use lumen_theme::TextVariant;

use super::shared::{self, class, modifier, part};
use crate::context::{build_children, BuildContext, Child, ElementBuilder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Elevation,
    Outlined,
}

impl CardVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            CardVariant::Elevation => "elevation",
            CardVariant::Outlined => "outlined",
        }
    }
}

// ========== Card ==========

#[derive(Clone)]
pub struct Card {
    variant: CardVariant,
    elevation: String,
    radius: String,
    children: Vec<Child>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            variant: CardVariant::default(),
            elevation: "sm".to_string(),
            radius: "md".to_string(),
            children: Vec::new(),
        }
    }
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn outlined(self) -> Self {
        self.variant(CardVariant::Outlined)
    }

    /// Shadow token key used by the elevation variant
    pub fn elevation(mut self, key: impl Into<String>) -> Self {
        self.elevation = key.into();
        self
    }

    pub fn radius(mut self, key: impl Into<String>) -> Self {
        self.radius = key.into();
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl ElementBuilder for Card {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        el("div")
            .class(class("card"))
            .class(modifier("card", self.variant.as_str()))
            .style("overflow", "hidden")
            .style("background-color", shared::color(&theme, "background.paper").to_css())
            .style("color", shared::color(&theme, "text.primary").to_css())
            .style("border-radius", shared::radius_css(&theme, &self.radius))
            .map(|e| match self.variant {
                CardVariant::Elevation => e.style("box-shadow", shared::shadow_css(&theme, &self.elevation)),
                CardVariant::Outlined => e.style(
                    "border",
                    format!("1px solid {}", shared::color(&theme, "divider").to_css()),
                ),
            })
            .children(build_children(&self.children, cx))
    }
}

pub fn card() -> Card {
    Card::new()
}

// ========== CardHeader ==========

#[derive(Clone, Default)]
pub struct CardHeader {
    title: Option<Child>,
    subheader: Option<Child>,
    avatar: Option<Child>,
    action: Option<Child>,
}

impl CardHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Child>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subheader(mut self, subheader: impl Into<Child>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    pub fn avatar(mut self, avatar: impl Into<Child>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Trailing slot, typically an icon button
    pub fn action(mut self, action: impl Into<Child>) -> Self {
        self.action = Some(action.into());
        self
    }
}

impl ElementBuilder for CardHeader {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let text = el("div")
            .class(part("card-header", "content"))
            .style("flex", "1 1 auto")
            .style("min-width", "0")
            .child_opt(self.title.as_ref().map(|title| {
                el("span")
                    .class(part("card-header", "title"))
                    .styles(&shared::text_style(&theme, TextVariant::H6))
                    .style("display", "block")
                    .child(title.build(cx))
            }))
            .child_opt(self.subheader.as_ref().map(|subheader| {
                el("span")
                    .class(part("card-header", "subheader"))
                    .styles(&shared::text_style(&theme, TextVariant::Body2))
                    .style("display", "block")
                    .style("color", shared::color(&theme, "text.secondary").to_css())
                    .child(subheader.build(cx))
            }));

        el("div")
            .class(class("card-header"))
            .style("display", "flex")
            .style("align-items", "center")
            .style("padding", px(shared::spacing(&theme, "md")))
            .child_opt(self.avatar.as_ref().map(|avatar| {
                el("div")
                    .class(part("card-header", "avatar"))
                    .style("display", "flex")
                    .style("flex", "0 0 auto")
                    .style("margin-right", px(shared::spacing(&theme, "md")))
                    .child(avatar.build(cx))
            }))
            .child(text)
            .child_opt(self.action.as_ref().map(|action| {
                el("div")
                    .class(part("card-header", "action"))
                    .style("flex", "0 0 auto")
                    .style("align-self", "flex-start")
                    .style("margin", "-4px -8px -4px 0")
                    .child(action.build(cx))
            }))
    }
}

pub fn card_header() -> CardHeader {
    CardHeader::new()
}

// ========== CardContent ==========

#[derive(Clone, Default)]
pub struct CardContent {
    children: Vec<Child>,
}

impl CardContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl ElementBuilder for CardContent {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let padding = shared::spacing(&theme, "md");
        el("div")
            .class(class("card-content"))
            .styles(&shared::text_style(&theme, TextVariant::Body2))
            .style("padding", px(padding))
            .style("padding-bottom", px(padding * 1.5))
            .children(build_children(&self.children, cx))
    }
}

pub fn card_content() -> CardContent {
    CardContent::new()
}

// ========== CardActions ==========

#[derive(Clone, Default)]
pub struct CardActions {
    disable_spacing: bool,
    children: Vec<Child>,
}

impl CardActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the gap between actions
    pub fn disable_spacing(mut self, disable: bool) -> Self {
        self.disable_spacing = disable;
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl ElementBuilder for CardActions {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        el("div")
            .class(class("card-actions"))
            .class_if(modifier("card-actions", "spacing"), !self.disable_spacing)
            .style("display", "flex")
            .style("align-items", "center")
            .style("padding", px(shared::spacing(&theme, "sm")))
            .when(!self.disable_spacing, |e| {
                e.style("gap", px(shared::spacing(&theme, "sm")))
            })
            .children(build_children(&self.children, cx))
    }
}

pub fn card_actions() -> CardActions {
    CardActions::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_card_sections_in_order() {
        let el = card()
            .child(card_header().title("Title").subheader("Sub"))
            .child(card_content().child("Body"))
            .child(card_actions().child("OK"))
            .build(&cx());

        let classes: Vec<_> = el
            .child_elements()
            .map(|child| child.classes()[0].clone())
            .collect();
        assert_eq!(classes, ["lumen-card-header", "lumen-card-content", "lumen-card-actions"]);
        assert_eq!(el.text_content(), "TitleSubBodyOK");
    }

    #[test]
    fn test_outlined_card_has_border_not_shadow() {
        let el = card().outlined().build(&cx());
        assert!(el.style_value("border").is_some());
        assert!(el.style_value("box-shadow").is_none());
    }

    #[test]
    fn test_actions_spacing() {
        let el = card_actions().disable_spacing(true).build(&cx());
        assert!(el.style_value("gap").is_none());
    }
}
