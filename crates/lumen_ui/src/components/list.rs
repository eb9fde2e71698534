//! List and ListItem

use std::sync::Arc;

use lumen_core::{el, px, Element, Event};
use lumen_theme::{Palette, TextVariant};

use super::button::ClickHandler;
use super::shared::{self, class, modifier, part};
use crate::context::{build_children, BuildContext, Child, ElementBuilder};

// ========== List ==========

#[derive(Clone, Default)]
pub struct List {
    dense: bool,
    disable_padding: bool,
    subheader: Option<String>,
    items: Vec<Child>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = dense;
        self
    }

    pub fn disable_padding(mut self, disable: bool) -> Self {
        self.disable_padding = disable;
        self
    }

    pub fn subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    pub fn item(mut self, item: impl Into<Child>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn items<I, C>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }
}

impl ElementBuilder for List {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let padding = px(shared::spacing(&theme, "sm"));

        el("ul")
            .class(class("list"))
            .class_if(modifier("list", "dense"), self.dense)
            .style("list-style", "none")
            .style("margin", "0")
            .style("padding", "0")
            .style("position", "relative")
            .when(!self.disable_padding, |e| {
                e.style("padding-top", padding.clone())
                    .style("padding-bottom", padding.clone())
            })
            .child_opt(self.subheader.as_ref().map(|subheader| {
                el("li")
                    .class(part("list", "subheader"))
                    .styles(&shared::text_style(&theme, TextVariant::Body2))
                    .style("font-weight", "500")
                    .style("line-height", "48px")
                    .style("padding", format!("0 {}", px(shared::spacing(&theme, "md"))))
                    .style("color", shared::color(&theme, "text.secondary").to_css())
                    .child(subheader.as_str())
            }))
            .children(build_children(&self.items, cx).into_iter().map(|node| {
                match node.as_element() {
                    Some(item) if self.dense && item.has_class("lumen-list-item") => {
                        item.clone()
                            .class(modifier("list-item", "dense"))
                            .style("padding-top", "4px")
                            .style("padding-bottom", "4px")
                            .into()
                    }
                    _ => node,
                }
            }))
    }
}

pub fn list() -> List {
    List::new()
}

// ========== ListItem ==========

#[derive(Clone, Default)]
pub struct ListItem {
    primary: Option<Child>,
    secondary: Option<Child>,
    icon: Option<Child>,
    secondary_action: Option<Child>,
    children: Vec<Child>,
    selected: bool,
    disabled: bool,
    divider: bool,
    on_click: Option<ClickHandler>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(mut self, primary: impl Into<Child>) -> Self {
        self.primary = Some(primary.into());
        self
    }

    pub fn secondary(mut self, secondary: impl Into<Child>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Leading icon or avatar
    pub fn icon(mut self, icon: impl Into<Child>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Trailing slot outside the clickable area
    pub fn secondary_action(mut self, action: impl Into<Child>) -> Self {
        self.secondary_action = Some(action.into());
        self
    }

    /// Free-form content after the text block
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Bottom border
    pub fn divider(mut self, divider: bool) -> Self {
        self.divider = divider;
        self
    }

    /// Makes the item a button
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for ListItem {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let spacing = shared::spacing(&theme, "md");
        let clickable = self.on_click.is_some();

        let text = (self.primary.is_some() || self.secondary.is_some()).then(|| {
            el("div")
                .class(part("list-item", "text"))
                .style("flex", "1 1 auto")
                .style("min-width", "0")
                .style("margin", "4px 0")
                .child_opt(self.primary.as_ref().map(|primary| {
                    el("span")
                        .class(part("list-item", "primary"))
                        .styles(&shared::text_style(&theme, TextVariant::Body1))
                        .style("display", "block")
                        .child(primary.build(cx))
                }))
                .child_opt(self.secondary.as_ref().map(|secondary| {
                    el("span")
                        .class(part("list-item", "secondary"))
                        .styles(&shared::text_style(&theme, TextVariant::Body2))
                        .style("display", "block")
                        .style("color", shared::color(&theme, "text.secondary").to_css())
                        .child(secondary.build(cx))
                }))
        });

        let mut item = el("li")
            .class(class("list-item"))
            .class_if(modifier("list-item", "button"), clickable)
            .class_if(modifier("list-item", "selected"), self.selected)
            .class_if(modifier("list-item", "disabled"), self.disabled)
            .style("display", "flex")
            .style("align-items", "center")
            .style("position", "relative")
            .style("box-sizing", "border-box")
            .style("width", "100%")
            .style("padding", format!("8px {}", px(spacing)))
            .style("text-align", "left")
            .when(self.divider, |e| {
                e.style(
                    "border-bottom",
                    format!("1px solid {}", shared::color(&theme, "divider").to_css()),
                )
                .style("background-clip", "padding-box")
            })
            .when(self.selected, |e| {
                e.attr("aria-selected", "true").style(
                    "background-color",
                    shared::palette(&theme, Palette::Primary, "main")
                        .with_alpha(0.08)
                        .to_css(),
                )
            })
            .when(self.disabled, |e| {
                e.attr("aria-disabled", "true").style("opacity", "0.38")
            })
            .when(clickable, |e| {
                e.attr("role", "button")
                    .attr("tabindex", if self.disabled { "-1" } else { "0" })
                    .style("cursor", "pointer")
            })
            .when(self.secondary_action.is_some(), |e| {
                e.style("padding-right", px(spacing * 3.0))
            })
            .child_opt(self.icon.as_ref().map(|icon| {
                el("div")
                    .class(part("list-item", "icon"))
                    .style("display", "inline-flex")
                    .style("flex-shrink", "0")
                    .style("min-width", "56px")
                    .style("color", shared::color(&theme, "text.secondary").to_css())
                    .child(icon.build(cx))
            }))
            .child_opt(text)
            .children(build_children(&self.children, cx))
            .child_opt(self.secondary_action.as_ref().map(|action| {
                el("div")
                    .class(part("list-item", "action"))
                    .style("position", "absolute")
                    .style("right", px(spacing))
                    .style("top", "50%")
                    .style("transform", "translateY(-50%)")
                    .child(action.build(cx))
            }));

        if let (false, Some(on_click)) = (self.disabled, &self.on_click) {
            let on_click = Arc::clone(on_click);
            item = item.on_click(move |event| on_click(event));
        }
        item
    }
}

pub fn list_item() -> ListItem {
    ListItem::new()
}
