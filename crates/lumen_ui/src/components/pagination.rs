//! Pagination
//!
//! [`pagination_items`] computes the item sequence: optional first/previous
//! buttons, `boundary_count` pages at each end, `sibling_count` pages around
//! the current one, ellipsis markers for collapsed gaps and optional
//! next/last buttons. A gap of exactly one page shows that page instead of
//! an ellipsis.
//!
//! [`Pagination`] renders the sequence. The current page is controlled
//! (`page` plus `on_change`) or kept in keyed hook state under the
//! pagination id; navigation always lands inside `1..=count`.
//!
//! ```rust
//! use lumen_ui::components::pagination::{pagination_items, PaginationConfig, PaginationItem::*};
//!
//! let items = pagination_items(&PaginationConfig::new(10, 1));
//! assert_eq!(
//!     items,
//!     vec![Previous, Page(1), Page(2), Page(3), Page(4), Page(5), EndEllipsis, Page(10), Next]
//! );
//! ```

use std::sync::Arc;

use lumen_core::{el, px, Element};
use lumen_theme::{Palette, TextVariant};

use super::shared::{self, class, modifier, part, svg_icon, ComponentSize};
use crate::context::{BuildContext, ElementBuilder};
use crate::hooks::use_controlled;

const FIRST_PATH: &str = "M18.41 16.59L13.82 12l4.59-4.59L17 6l-6 6 6 6zM6 6h2v12H6z";
const PREVIOUS_PATH: &str = "M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z";
const NEXT_PATH: &str = "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";
const LAST_PATH: &str = "M5.59 7.41L10.18 12l-4.59 4.59L7 18l6-6-6-6zM16 6h2v12h-2z";

/// One entry of the pagination sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaginationItem {
    First,
    Previous,
    Page(usize),
    StartEllipsis,
    EndEllipsis,
    Next,
    Last,
}

impl PaginationItem {
    pub fn is_ellipsis(self) -> bool {
        matches!(self, Self::StartEllipsis | Self::EndEllipsis)
    }

    /// Page this item navigates to from `page`, clamped to `1..=count`
    pub fn target(self, page: usize, count: usize) -> Option<usize> {
        let last = count.max(1);
        let target = match self {
            Self::First => 1,
            Self::Previous => page.saturating_sub(1),
            Self::Page(n) => n,
            Self::Next => page + 1,
            Self::Last => last,
            Self::StartEllipsis | Self::EndEllipsis => return None,
        };
        Some(target.clamp(1, last))
    }

    /// Whether the item can't be used from `page`
    pub fn is_disabled(self, page: usize, count: usize) -> bool {
        match self {
            Self::First | Self::Previous => page <= 1,
            Self::Next | Self::Last => page >= count,
            Self::Page(_) | Self::StartEllipsis | Self::EndEllipsis => false,
        }
    }

    fn key(self) -> String {
        match self {
            Self::First => "first".into(),
            Self::Previous => "previous".into(),
            Self::Page(n) => format!("page-{n}"),
            Self::StartEllipsis => "start-ellipsis".into(),
            Self::EndEllipsis => "end-ellipsis".into(),
            Self::Next => "next".into(),
            Self::Last => "last".into(),
        }
    }
}

/// Inputs of the item sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub count: usize,
    pub page: usize,
    pub boundary_count: usize,
    pub sibling_count: usize,
    pub show_first_button: bool,
    pub show_last_button: bool,
    pub hide_prev_button: bool,
    pub hide_next_button: bool,
}

impl PaginationConfig {
    pub fn new(count: usize, page: usize) -> Self {
        Self {
            count,
            page,
            boundary_count: 1,
            sibling_count: 1,
            show_first_button: false,
            show_last_button: false,
            hide_prev_button: false,
            hide_next_button: false,
        }
    }
}

/// Inclusive range of pages as items; empty when `end < start`
fn pages(start: i64, end: i64) -> impl Iterator<Item = PaginationItem> {
    (start..=end).map(|n| PaginationItem::Page(n as usize))
}

/// Compute the pagination item sequence
pub fn pagination_items(config: &PaginationConfig) -> Vec<PaginationItem> {
    let count = config.count as i64;
    let page = config.page as i64;
    let boundary = config.boundary_count as i64;
    let siblings = config.sibling_count as i64;

    let start_end = boundary.min(count);
    let end_start = (count - boundary + 1).max(boundary + 1);

    let siblings_start = (page - siblings)
        .min(count - boundary - siblings * 2 - 1)
        .max(boundary + 2);
    let siblings_end = (page + siblings)
        .max(boundary + siblings * 2 + 2)
        .min(if end_start <= count { end_start - 2 } else { count - 1 });

    let mut items = Vec::new();
    if config.show_first_button {
        items.push(PaginationItem::First);
    }
    if !config.hide_prev_button {
        items.push(PaginationItem::Previous);
    }

    items.extend(pages(1, start_end));

    if siblings_start > boundary + 2 {
        items.push(PaginationItem::StartEllipsis);
    } else if boundary + 1 < count - boundary {
        items.push(PaginationItem::Page((boundary + 1) as usize));
    }

    items.extend(pages(siblings_start, siblings_end));

    if siblings_end < count - boundary - 1 {
        items.push(PaginationItem::EndEllipsis);
    } else if count - boundary > boundary {
        items.push(PaginationItem::Page((count - boundary) as usize));
    }

    items.extend(pages(end_start, count));

    if !config.hide_next_button {
        items.push(PaginationItem::Next);
    }
    if config.show_last_button {
        items.push(PaginationItem::Last);
    }
    items
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationVariant {
    #[default]
    Text,
    Outlined,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationShape {
    #[default]
    Circular,
    Rounded,
}

/// Page navigation
#[derive(Clone)]
pub struct Pagination {
    id: String,
    config: PaginationConfig,
    page: Option<usize>,
    default_page: usize,
    disabled: bool,
    color: Palette,
    size: ComponentSize,
    variant: PaginationVariant,
    shape: PaginationShape,
    on_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
}

impl Pagination {
    /// `id` keys the uncontrolled page
    pub fn new(id: impl Into<String>, count: usize) -> Self {
        Self {
            id: id.into(),
            config: PaginationConfig::new(count, 1),
            page: None,
            default_page: 1,
            disabled: false,
            color: Palette::Primary,
            size: ComponentSize::default(),
            variant: PaginationVariant::default(),
            shape: PaginationShape::default(),
            on_change: None,
        }
    }

    /// Controlled current page
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn default_page(mut self, page: usize) -> Self {
        self.default_page = page;
        self
    }

    pub fn boundary_count(mut self, count: usize) -> Self {
        self.config.boundary_count = count;
        self
    }

    pub fn sibling_count(mut self, count: usize) -> Self {
        self.config.sibling_count = count;
        self
    }

    pub fn show_first_button(mut self, show: bool) -> Self {
        self.config.show_first_button = show;
        self
    }

    pub fn show_last_button(mut self, show: bool) -> Self {
        self.config.show_last_button = show;
        self
    }

    pub fn hide_prev_button(mut self, hide: bool) -> Self {
        self.config.hide_prev_button = hide;
        self
    }

    pub fn hide_next_button(mut self, hide: bool) -> Self {
        self.config.hide_next_button = hide;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: ComponentSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: PaginationVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn shape(mut self, shape: PaginationShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Item sequence at the current page
    pub fn items(&self, cx: &BuildContext) -> Vec<PaginationItem> {
        let page = self.current_page(cx);
        pagination_items(&PaginationConfig { page, ..self.config })
    }

    fn current_page(&self, cx: &BuildContext) -> usize {
        use_controlled(cx, &format!("pagination:{}", self.id), self.page, self.default_page).get()
    }

    fn item_label(item: PaginationItem, selected: bool) -> String {
        match item {
            PaginationItem::First => "Go to first page".into(),
            PaginationItem::Previous => "Go to previous page".into(),
            PaginationItem::Next => "Go to next page".into(),
            PaginationItem::Last => "Go to last page".into(),
            PaginationItem::Page(n) if selected => format!("page {n}"),
            PaginationItem::Page(n) => format!("Go to page {n}"),
            PaginationItem::StartEllipsis | PaginationItem::EndEllipsis => String::new(),
        }
    }
}

impl ElementBuilder for Pagination {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let count = self.config.count;
        let page_state = use_controlled(cx, &format!("pagination:{}", self.id), self.page, self.default_page);
        let page = page_state.get();
        let items = pagination_items(&PaginationConfig { page, ..self.config });

        let (min_size, font) = match self.size {
            ComponentSize::Small => (26.0, 13.0),
            ComponentSize::Medium => (32.0, 14.0),
            ComponentSize::Large => (40.0, 15.0),
        };
        let radius = match self.shape {
            PaginationShape::Circular => px(min_size / 2.0),
            PaginationShape::Rounded => px(shared::radius(&theme, "md")),
        };
        let main = shared::palette(&theme, self.color, "main");

        let entries = items.iter().map(|&item| {
            let content = if item.is_ellipsis() {
                el("div")
                    .class(part("pagination", "ellipsis"))
                    .style("min-width", px(min_size))
                    .style("text-align", "center")
                    .style("color", shared::color(&theme, "text.primary").to_css())
                    .child("\u{2026}")
            } else {
                let selected = item == PaginationItem::Page(page);
                let disabled = self.disabled || item.is_disabled(page, count);
                let (bg, fg) = if disabled {
                    (None, shared::color(&theme, "text.disabled"))
                } else if selected {
                    match self.variant {
                        PaginationVariant::Text => {
                            (Some(main), shared::palette(&theme, self.color, "contrastText"))
                        }
                        PaginationVariant::Outlined => (Some(main.with_alpha(0.12)), main),
                    }
                } else {
                    (None, shared::color(&theme, "text.primary"))
                };

                let inner = match item {
                    PaginationItem::Page(n) => el("span").child(n.to_string()),
                    PaginationItem::First => svg_icon(FIRST_PATH, font + 6.0),
                    PaginationItem::Previous => svg_icon(PREVIOUS_PATH, font + 6.0),
                    PaginationItem::Next => svg_icon(NEXT_PATH, font + 6.0),
                    _ => svg_icon(LAST_PATH, font + 6.0),
                };

                let mut button = el("button")
                    .class(part("pagination", "item"))
                    .class(modifier("pagination", &item.key()))
                    .class_if(modifier("pagination", "selected"), selected)
                    .attr("type", "button")
                    .attr("data-item", item.key())
                    .attr("aria-label", Self::item_label(item, selected))
                    .when(selected, |e| e.attr("aria-current", "true"))
                    .flag("disabled", disabled)
                    .styles(&shared::text_style(&theme, TextVariant::Body2))
                    .style("display", "inline-flex")
                    .style("align-items", "center")
                    .style("justify-content", "center")
                    .style("box-sizing", "border-box")
                    .style("min-width", px(min_size))
                    .style("height", px(min_size))
                    .style("padding", "0 6px")
                    .style("font-size", px(font))
                    .style("border-radius", radius.clone())
                    .style(
                        "border",
                        match self.variant {
                            PaginationVariant::Text => "none".to_string(),
                            PaginationVariant::Outlined => format!(
                                "1px solid {}",
                                (if selected { main.with_alpha(0.5) } else { shared::color(&theme, "divider") })
                                    .to_css()
                            ),
                        },
                    )
                    .style("background-color", bg.map_or_else(|| "transparent".to_string(), |c| c.to_css()))
                    .style("color", fg.to_css())
                    .style("cursor", if disabled { "default" } else { "pointer" })
                    .child(inner);

                if !disabled {
                    if let Some(target) = item.target(page, count) {
                        let page_state = page_state.clone();
                        let on_change = self.on_change.clone();
                        button = button.on_click(move |_| {
                            if target == page {
                                return;
                            }
                            page_state.set(target);
                            if let Some(on_change) = &on_change {
                                on_change(target);
                            }
                        });
                    }
                }
                button
            };
            el("li").child(content)
        });

        el("nav")
            .class(class("pagination"))
            .class(modifier("pagination", self.size.as_str()))
            .attr("aria-label", "pagination navigation")
            .child(
                el("ul")
                    .class(part("pagination", "list"))
                    .style("display", "flex")
                    .style("flex-wrap", "wrap")
                    .style("align-items", "center")
                    .style("gap", px(shared::spacing(&theme, "xs")))
                    .style("padding", "0")
                    .style("margin", "0")
                    .style("list-style", "none")
                    .children(entries),
            )
    }
}

pub fn pagination(id: impl Into<String>, count: usize) -> Pagination {
    Pagination::new(id, count)
}

#[cfg(test)]
mod tests {
    use super::PaginationItem::*;
    use super::*;

    fn items(count: usize, page: usize) -> Vec<PaginationItem> {
        pagination_items(&PaginationConfig::new(count, page))
    }

    #[test]
    fn test_middle_page_has_both_ellipses() {
        assert_eq!(
            items(10, 5),
            vec![Previous, Page(1), StartEllipsis, Page(4), Page(5), Page(6), EndEllipsis, Page(10), Next]
        );
    }

    #[test]
    fn test_last_page_window() {
        assert_eq!(
            items(10, 10),
            vec![Previous, Page(1), StartEllipsis, Page(6), Page(7), Page(8), Page(9), Page(10), Next]
        );
    }

    #[test]
    fn test_one_page_gap_shows_page() {
        // Page 4 sits between the boundary and the window: shown, not elided
        assert_eq!(
            items(10, 4),
            vec![Previous, Page(1), Page(2), Page(3), Page(4), Page(5), EndEllipsis, Page(10), Next]
        );
    }

    #[test]
    fn test_small_counts() {
        assert_eq!(items(1, 1), vec![Previous, Page(1), Next]);
        assert_eq!(items(3, 2), vec![Previous, Page(1), Page(2), Page(3), Next]);
        assert_eq!(items(0, 1), vec![Previous, Next]);
    }

    #[test]
    fn test_first_last_buttons_and_hidden_arrows() {
        let config = PaginationConfig {
            show_first_button: true,
            show_last_button: true,
            hide_prev_button: true,
            hide_next_button: true,
            ..PaginationConfig::new(2, 1)
        };
        assert_eq!(pagination_items(&config), vec![First, Page(1), Page(2), Last]);
    }

    #[test]
    fn test_boundary_and_sibling_counts() {
        let config = PaginationConfig {
            boundary_count: 2,
            sibling_count: 0,
            ..PaginationConfig::new(20, 10)
        };
        assert_eq!(
            pagination_items(&config),
            vec![Previous, Page(1), Page(2), StartEllipsis, Page(10), EndEllipsis, Page(19), Page(20), Next]
        );
    }

    #[test]
    fn test_targets_clamp() {
        assert_eq!(Previous.target(1, 10), Some(1));
        assert_eq!(Next.target(10, 10), Some(10));
        assert_eq!(Last.target(3, 10), Some(10));
        assert_eq!(Page(99).target(1, 10), Some(10));
        assert_eq!(StartEllipsis.target(5, 10), None);
        assert!(Previous.is_disabled(1, 10));
        assert!(Last.is_disabled(10, 10));
        assert!(!Next.is_disabled(9, 10));
    }
}
