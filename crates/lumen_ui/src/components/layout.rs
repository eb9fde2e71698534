//! Layout primitives
//!
//! [`Block`] is the generic styled box: spacing shorthands resolved against
//! the theme's spacing scale, theme colors, radius and shadow. [`Flex`] wraps
//! a block with flexbox props, [`Stack`] wraps a flex with a single spacing
//! value and optional dividers, [`Grid`] lays children on equal columns and
//! [`Container`] centers content at a breakpoint width.
//!
//! ```rust
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let card = block().p("md").bg("background.paper").radius("md").child("Hello");
//! let el = card.build(&cx);
//! assert_eq!(el.style_value("padding-top"), Some("16px"));
//! assert_eq!(el.style_value("border-radius"), Some("4px"));
//! ```

use lumen_core::{el, px, Element, Style};
use lumen_theme::{Breakpoint, Theme};

use super::shared::{self, class, modifier, ColorProp, Spacing};
use crate::context::{build_children, BuildContext, Child, ElementBuilder};

/// Generates the box prop setters on a wrapper that holds its inner builder
/// in `self.inner`.
macro_rules! forward_box_props {
    ($($name:ident: $arg:ty),* $(,)?) => {
        $(
            pub fn $name(mut self, value: $arg) -> Self {
                self.inner = self.inner.$name(value);
                self
            }
        )*
    };
}

macro_rules! box_props {
    () => {
        forward_box_props! {
            m: impl Into<Spacing>,
            mx: impl Into<Spacing>,
            my: impl Into<Spacing>,
            mt: impl Into<Spacing>,
            mr: impl Into<Spacing>,
            mb: impl Into<Spacing>,
            ml: impl Into<Spacing>,
            p: impl Into<Spacing>,
            px: impl Into<Spacing>,
            py: impl Into<Spacing>,
            pt: impl Into<Spacing>,
            pr: impl Into<Spacing>,
            pb: impl Into<Spacing>,
            pl: impl Into<Spacing>,
            bg: impl Into<ColorProp>,
            color: impl Into<ColorProp>,
            radius: &str,
            shadow: &str,
            width: &str,
            height: &str,
            tag: &str,
            class: &str,
            test_id: &str,
        }

        pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
            self.inner = self.inner.style(property, value);
            self
        }

        pub fn child(mut self, child: impl Into<Child>) -> Self {
            self.inner = self.inner.child(child);
            self
        }

        pub fn children<I, C>(mut self, children: I) -> Self
        where
            I: IntoIterator<Item = C>,
            C: Into<Child>,
        {
            self.inner = self.inner.children(children);
            self
        }
    };
}

// ========== Block ==========

#[derive(Clone, Debug, Default)]
struct SideSpacing {
    all: Option<Spacing>,
    x: Option<Spacing>,
    y: Option<Spacing>,
    top: Option<Spacing>,
    right: Option<Spacing>,
    bottom: Option<Spacing>,
    left: Option<Spacing>,
}

impl SideSpacing {
    /// Most specific side wins: `mt` over `my` over `m`
    fn apply(&self, property: &str, theme: &Theme, style: &mut Style) {
        let sides = [
            ("top", &self.top, &self.y),
            ("right", &self.right, &self.x),
            ("bottom", &self.bottom, &self.y),
            ("left", &self.left, &self.x),
        ];
        for (side, exact, axis) in sides {
            if let Some(value) = exact.as_ref().or(axis.as_ref()).or(self.all.as_ref()) {
                style.insert(format!("{property}-{side}"), value.css(theme));
            }
        }
    }
}

/// Generic styled box
#[derive(Clone, Debug)]
pub struct Block {
    tag: String,
    margin: SideSpacing,
    padding: SideSpacing,
    bg: Option<ColorProp>,
    color: Option<ColorProp>,
    radius: Option<String>,
    shadow: Option<String>,
    width: Option<String>,
    height: Option<String>,
    classes: Vec<String>,
    test_id: Option<String>,
    extra: Style,
    children: Vec<Child>,
}

impl Default for Block {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            margin: SideSpacing::default(),
            padding: SideSpacing::default(),
            bg: None,
            color: None,
            radius: None,
            shadow: None,
            width: None,
            height: None,
            classes: Vec::new(),
            test_id: None,
            extra: Style::new(),
            children: Vec::new(),
        }
    }
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.all = Some(value.into());
        self
    }

    pub fn mx(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.x = Some(value.into());
        self
    }

    pub fn my(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.y = Some(value.into());
        self
    }

    pub fn mt(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.top = Some(value.into());
        self
    }

    pub fn mr(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.right = Some(value.into());
        self
    }

    pub fn mb(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.bottom = Some(value.into());
        self
    }

    pub fn ml(mut self, value: impl Into<Spacing>) -> Self {
        self.margin.left = Some(value.into());
        self
    }

    pub fn p(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.all = Some(value.into());
        self
    }

    pub fn px(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.x = Some(value.into());
        self
    }

    pub fn py(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.y = Some(value.into());
        self
    }

    pub fn pt(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.top = Some(value.into());
        self
    }

    pub fn pr(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.right = Some(value.into());
        self
    }

    pub fn pb(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.bottom = Some(value.into());
        self
    }

    pub fn pl(mut self, value: impl Into<Spacing>) -> Self {
        self.padding.left = Some(value.into());
        self
    }

    /// Background: a theme color path (`"background.paper"`) or a color
    pub fn bg(mut self, value: impl Into<ColorProp>) -> Self {
        self.bg = Some(value.into());
        self
    }

    /// Text color: a theme color path (`"text.secondary"`) or a color
    pub fn color(mut self, value: impl Into<ColorProp>) -> Self {
        self.color = Some(value.into());
        self
    }

    /// Border radius key (`"md"`) or raw CSS length
    pub fn radius(mut self, key: &str) -> Self {
        self.radius = Some(key.to_string());
        self
    }

    /// Shadow key (`"sm"`) or raw `box-shadow` value
    pub fn shadow(mut self, key: &str) -> Self {
        self.shadow = Some(key.to_string());
        self
    }

    pub fn width(mut self, value: &str) -> Self {
        self.width = Some(value.to_string());
        self
    }

    pub fn height(mut self, value: &str) -> Self {
        self.height = Some(value.to_string());
        self
    }

    /// Element tag (defaults to `div`)
    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn test_id(mut self, id: &str) -> Self {
        self.test_id = Some(id.to_string());
        self
    }

    /// Raw declaration applied after the themed ones
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.extra.insert(property, value);
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

    pub(crate) fn set_children(&mut self, children: Vec<Child>) {
        self.children = children;
    }

    pub(crate) fn take_children(&mut self) -> Vec<Child> {
        std::mem::take(&mut self.children)
    }

    /// Themed declarations of this block
    fn box_style(&self, theme: &Theme) -> Style {
        let mut style = Style::new();
        self.margin.apply("margin", theme, &mut style);
        self.padding.apply("padding", theme, &mut style);
        if let Some(bg) = &self.bg {
            style.insert("background-color", bg.resolve(theme).to_css());
        }
        if let Some(color) = &self.color {
            style.insert("color", color.resolve(theme).to_css());
        }
        if let Some(key) = &self.radius {
            style.insert("border-radius", shared::radius_css(theme, key));
        }
        if let Some(key) = &self.shadow {
            style.insert("box-shadow", shared::shadow_css(theme, key));
        }
        if let Some(width) = &self.width {
            style.insert("width", width.clone());
        }
        if let Some(height) = &self.height {
            style.insert("height", height.clone());
        }
        style
    }

    /// Build with a component class and layout declarations placed before
    /// the box declarations
    pub(crate) fn build_with(&self, cx: &BuildContext, component: &str, layout: &Style) -> Element {
        let theme = cx.theme();
        let mut style = layout.clone();
        style.merge(&self.box_style(&theme));
        style.merge(&self.extra);

        let mut element = el(self.tag.as_str()).class(class(component));
        for extra in &self.classes {
            element = element.class(extra.as_str());
        }
        element
            .attr_opt("data-testid", self.test_id.clone())
            .styles(&style)
            .children(build_children(&self.children, cx))
    }
}

impl ElementBuilder for Block {
    fn build(&self, cx: &BuildContext) -> Element {
        self.build_with(cx, "box", &Style::new())
    }
}

/// Create a generic box
pub fn block() -> Block {
    Block::new()
}

// ========== Flex ==========

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }

    fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }
}

/// Cross/main axis alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Stretch => "stretch",
            Self::Baseline => "baseline",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

/// Flexbox container
#[derive(Clone, Debug, Default)]
pub struct Flex {
    inner: Block,
    direction: FlexDirection,
    align: Option<Align>,
    justify: Option<Align>,
    wrap: bool,
    gap: Option<Spacing>,
    inline: bool,
}

impl Flex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn row(self) -> Self {
        self.direction(FlexDirection::Row)
    }

    pub fn column(self) -> Self {
        self.direction(FlexDirection::Column)
    }

    /// `align-items`
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// `justify-content`
    pub fn justify(mut self, justify: Align) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn gap(mut self, gap: impl Into<Spacing>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    box_props!();

    fn layout_style(&self, theme: &Theme) -> Style {
        let mut style = Style::new()
            .set("display", if self.inline { "inline-flex" } else { "flex" })
            .set("flex-direction", self.direction.as_css());
        if let Some(align) = self.align {
            style.insert("align-items", align.as_css());
        }
        if let Some(justify) = self.justify {
            style.insert("justify-content", justify.as_css());
        }
        if self.wrap {
            style.insert("flex-wrap", "wrap");
        }
        if let Some(gap) = &self.gap {
            style.insert("gap", gap.css(theme));
        }
        style
    }

    fn build_as(&self, cx: &BuildContext, component: &str) -> Element {
        let layout = self.layout_style(&cx.theme());
        self.inner.build_with(cx, component, &layout)
    }
}

impl ElementBuilder for Flex {
    fn build(&self, cx: &BuildContext) -> Element {
        self.build_as(cx, "flex")
    }
}

pub fn flex() -> Flex {
    Flex::new()
}

// ========== Stack ==========

/// One-dimensional stack with uniform spacing and optional dividers
#[derive(Clone, Debug)]
pub struct Stack {
    inner: Flex,
    divider: Option<Child>,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            inner: Flex::new().column(),
            divider: None,
        }
    }
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.inner = self.inner.direction(direction);
        self
    }

    /// Gap between children
    pub fn spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.inner = self.inner.gap(spacing);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.inner = self.inner.align(align);
        self
    }

    pub fn justify(mut self, justify: Align) -> Self {
        self.inner = self.inner.justify(justify);
        self
    }

    /// Element placed between every pair of children
    pub fn divider(mut self, divider: impl Into<Child>) -> Self {
        self.divider = Some(divider.into());
        self
    }

    box_props!();
}

impl ElementBuilder for Stack {
    fn build(&self, cx: &BuildContext) -> Element {
        let mut flex = self.inner.clone();
        if let Some(divider) = &self.divider {
            let children = flex.inner.take_children();
            let mut interleaved = Vec::with_capacity(children.len() * 2);
            for (index, child) in children.into_iter().enumerate() {
                if index > 0 {
                    interleaved.push(divider.clone());
                }
                interleaved.push(child);
            }
            flex.inner.set_children(interleaved);
        }
        flex.build_as(cx, "stack")
    }
}

pub fn stack() -> Stack {
    Stack::new()
}

/// Horizontal stack
pub fn hstack() -> Stack {
    Stack::new().direction(FlexDirection::Row)
}

// ========== Grid ==========

/// Equal-column grid
#[derive(Clone, Debug)]
pub struct Grid {
    inner: Block,
    columns: usize,
    gap: Option<Spacing>,
    row_gap: Option<Spacing>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            inner: Block::new(),
            columns: 12,
            gap: None,
            row_gap: None,
        }
    }
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column count (at least 1)
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn gap(mut self, gap: impl Into<Spacing>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn row_gap(mut self, gap: impl Into<Spacing>) -> Self {
        self.row_gap = Some(gap.into());
        self
    }

    box_props!();
}

impl ElementBuilder for Grid {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let mut layout = Style::new().set("display", "grid").set(
            "grid-template-columns",
            format!("repeat({}, minmax(0, 1fr))", self.columns),
        );
        if let Some(gap) = &self.gap {
            layout.insert("column-gap", gap.css(&theme));
            layout.insert("row-gap", self.row_gap.as_ref().unwrap_or(gap).css(&theme));
        } else if let Some(row_gap) = &self.row_gap {
            layout.insert("row-gap", row_gap.css(&theme));
        }
        self.inner.build_with(cx, "grid", &layout)
    }
}

pub fn grid() -> Grid {
    Grid::new()
}

// ========== Container ==========

/// Horizontally centered content column
#[derive(Clone, Debug, Default)]
pub struct Container {
    inner: Block,
    max_width: Option<Breakpoint>,
    fluid: bool,
    disable_gutters: bool,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the width at a breakpoint (defaults to `lg`)
    pub fn max_width(mut self, breakpoint: Breakpoint) -> Self {
        self.max_width = Some(breakpoint);
        self
    }

    /// No maximum width
    pub fn fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    pub fn disable_gutters(mut self, disable: bool) -> Self {
        self.disable_gutters = disable;
        self
    }

    box_props!();
}

impl ElementBuilder for Container {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let mut layout = Style::new()
            .set("width", "100%")
            .set("box-sizing", "border-box")
            .set("margin-left", "auto")
            .set("margin-right", "auto");
        if !self.fluid {
            let breakpoint = self.max_width.unwrap_or_default();
            layout.insert("max-width", px(shared::breakpoint(&theme, breakpoint.key())));
        }
        if !self.disable_gutters {
            let gutter = px(shared::spacing(&theme, "md"));
            layout.insert("padding-left", gutter.clone());
            layout.insert("padding-right", gutter);
        }
        self.inner.build_with(cx, "container", &layout)
    }
}

pub fn container() -> Container {
    Container::new()
}

// ========== Divider ==========

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Thin rule, optionally with a centered label
#[derive(Clone, Debug, Default)]
pub struct Divider {
    orientation: Orientation,
    label: Option<String>,
    inset: bool,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Indent the start of a horizontal divider
    pub fn inset(mut self, inset: bool) -> Self {
        self.inset = inset;
        self
    }
}

impl ElementBuilder for Divider {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let line = format!("1px solid {}", shared::color(&theme, "divider").to_css());
        let vertical = self.orientation == Orientation::Vertical;

        let root = match &self.label {
            None => el(if vertical { "div" } else { "hr" })
                .style("margin", "0")
                .style("border", "none")
                .style(if vertical { "border-left" } else { "border-bottom" }, line)
                .when(vertical, |e| e.style("align-self", "stretch")),
            Some(label) => {
                let rule = |line: &str| {
                    el("span")
                        .style("flex", "1")
                        .style(if vertical { "border-left" } else { "border-top" }, line.to_string())
                };
                el("div")
                    .style("display", "flex")
                    .style("flex-direction", if vertical { "column" } else { "row" })
                    .style("align-items", "center")
                    .style("gap", px(shared::spacing(&theme, "sm")))
                    .style("color", shared::color(&theme, "text.secondary").to_css())
                    .child(rule(&line))
                    .child(el("span").class(shared::part("divider", "label")).child(label.as_str()))
                    .child(rule(&line))
            }
        };

        root.class(class("divider"))
            .class(modifier("divider", self.orientation.as_str()))
            .class_if(modifier("divider", "inset"), self.inset)
            .attr("role", "separator")
            .attr("aria-orientation", self.orientation.as_str())
            .when(self.inset && !vertical, |e| {
                e.style("margin-left", px(shared::spacing(&theme, "3xl")))
            })
    }
}

pub fn divider() -> Divider {
    Divider::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_specific_side_wins() {
        let el = block().m("sm").mx(2).ml("lg").build(&cx());
        assert_eq!(el.style_value("margin-top"), Some("8px"));
        assert_eq!(el.style_value("margin-right"), Some("2px"));
        assert_eq!(el.style_value("margin-left"), Some("24px"));
    }

    #[test]
    fn test_radius_and_shadow_raw_values() {
        let el = block().radius("50%").shadow("inset 0 0 1px red").build(&cx());
        assert_eq!(el.style_value("border-radius"), Some("50%"));
        assert_eq!(el.style_value("box-shadow"), Some("inset 0 0 1px red"));
    }

    #[test]
    fn test_flex_props() {
        let el = flex()
            .column()
            .align(Align::Center)
            .justify(Align::SpaceBetween)
            .gap("sm")
            .p(4)
            .build(&cx());
        assert!(el.has_class("lumen-flex"));
        assert_eq!(el.style_value("display"), Some("flex"));
        assert_eq!(el.style_value("flex-direction"), Some("column"));
        assert_eq!(el.style_value("justify-content"), Some("space-between"));
        assert_eq!(el.style_value("gap"), Some("8px"));
        assert_eq!(el.style_value("padding-left"), Some("4px"));
    }

    #[test]
    fn test_stack_interleaves_dividers() {
        let el = stack()
            .spacing("md")
            .divider(divider())
            .children(["a", "b", "c"])
            .build(&cx());
        assert!(el.has_class("lumen-stack"));
        assert_eq!(el.child_nodes().len(), 5);
        let separators = el.find_all(|e| e.get_attr("role") == Some("separator"));
        assert_eq!(separators.len(), 2);
        assert_eq!(el.style_value("gap"), Some("16px"));
    }

    #[test]
    fn test_grid_columns() {
        let el = grid().columns(3).gap("sm").build(&cx());
        assert_eq!(
            el.style_value("grid-template-columns"),
            Some("repeat(3, minmax(0, 1fr))")
        );
        assert_eq!(el.style_value("row-gap"), Some("8px"));
    }

    #[test]
    fn test_container_width() {
        let el = container().max_width(Breakpoint::Sm).build(&cx());
        assert_eq!(el.style_value("max-width"), Some("600px"));
        assert_eq!(el.style_value("padding-left"), Some("16px"));
        let fluid = container().fluid(true).disable_gutters(true).build(&cx());
        assert_eq!(fluid.style_value("max-width"), None);
        assert_eq!(fluid.style_value("padding-left"), None);
    }

    #[test]
    fn test_divider_label() {
        let el = divider().label("OR").build(&cx());
        assert_eq!(el.tag(), "div");
        assert_eq!(el.text_content(), "OR");
        assert_eq!(divider().build(&cx()).tag(), "hr");
    }
}
