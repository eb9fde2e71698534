//! Breadcrumbs
//!
//! A separated trail of links. When there are more items than `max_items`
//! (default 8) the trail collapses to the first item, a collapse marker and
//! the last item. Clicking the marker expands the trail; `expanded(true)`
//! shows every item up front.

use std::sync::Arc;

use lumen_core::{el, px, Element};
use lumen_theme::TextVariant;

use super::shared::{self, class, part};
use crate::context::{BuildContext, Child, ElementBuilder};
use crate::hooks::use_controlled_id;

/// Items kept before the collapse marker
pub const ITEMS_BEFORE_COLLAPSE: usize = 1;
/// Items kept after the collapse marker
pub const ITEMS_AFTER_COLLAPSE: usize = 1;

/// One visible entry of the trail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreadcrumbEntry {
    Item(usize),
    Collapsed,
}

/// Visible entries for `len` items
pub fn breadcrumb_entries(len: usize, max_items: usize, expanded: bool) -> Vec<BreadcrumbEntry> {
    let all = || (0..len).map(BreadcrumbEntry::Item).collect();
    if expanded || len <= max_items {
        return all();
    }
    if ITEMS_BEFORE_COLLAPSE + ITEMS_AFTER_COLLAPSE >= len {
        tracing::debug!("Breadcrumbs: nothing left to collapse for {len} items");
        return all();
    }

    let mut entries: Vec<_> = (0..ITEMS_BEFORE_COLLAPSE).map(BreadcrumbEntry::Item).collect();
    entries.push(BreadcrumbEntry::Collapsed);
    entries.extend((len - ITEMS_AFTER_COLLAPSE..len).map(BreadcrumbEntry::Item));
    entries
}

#[derive(Clone)]
pub struct Breadcrumbs {
    id: Option<String>,
    items: Vec<Child>,
    max_items: usize,
    expanded: Option<bool>,
    separator: Child,
    on_expand: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self {
            id: None,
            items: Vec::new(),
            max_items: 8,
            expanded: None,
            separator: Child::from("/"),
            on_expand: None,
        }
    }
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys the expanded state across rebuilds
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
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

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Show every item regardless of `max_items`
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn separator(mut self, separator: impl Into<Child>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Called when the collapse marker is clicked
    pub fn on_expand<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_expand = Some(Arc::new(handler));
        self
    }
}

impl ElementBuilder for Breadcrumbs {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let expanded = use_controlled_id(cx, "breadcrumbs", self.id.as_deref(), self.expanded, false);
        let entries = breadcrumb_entries(self.items.len(), self.max_items, expanded.get());
        let gap = px(shared::spacing(&theme, "sm"));

        let mut list = Vec::with_capacity(entries.len() * 2);
        for (position, entry) in entries.iter().enumerate() {
            if position > 0 {
                list.push(
                    el("li")
                        .class(part("breadcrumbs", "separator"))
                        .attr("aria-hidden", "true")
                        .style("display", "flex")
                        .style("margin", format!("0 {gap}"))
                        .style("user-select", "none")
                        .child(self.separator.build(cx)),
                );
            }
            let entry = match *entry {
                BreadcrumbEntry::Item(index) => el("li")
                    .class(part("breadcrumbs", "item"))
                    .attr("data-index", index.to_string())
                    .when(index + 1 == self.items.len(), |e| e.attr("aria-current", "page"))
                    .child(self.items[index].build(cx)),
                BreadcrumbEntry::Collapsed => {
                    let expanded = expanded.clone();
                    let on_expand = self.on_expand.clone();
                    el("li").class(part("breadcrumbs", "collapsed")).child(
                        el("button")
                            .class(part("breadcrumbs", "expand"))
                            .attr("type", "button")
                            .attr("aria-label", "Show path")
                            .style("display", "flex")
                            .style("padding", "0 4px")
                            .style("border", "none")
                            .style("border-radius", px(shared::radius(&theme, "sm")))
                            .style("cursor", "pointer")
                            .style(
                                "background-color",
                                shared::color(&theme, "grey.100").to_css(),
                            )
                            .style("color", shared::color(&theme, "grey.700").to_css())
                            .child("\u{2026}")
                            .on_click(move |_| {
                                expanded.set(true);
                                if let Some(on_expand) = &on_expand {
                                    on_expand();
                                }
                            }),
                    )
                }
            };
            list.push(entry);
        }

        el("nav")
            .class(class("breadcrumbs"))
            .attr("aria-label", "breadcrumb")
            .styles(&shared::text_style(&theme, TextVariant::Body1))
            .style("color", shared::color(&theme, "text.secondary").to_css())
            .child(
                el("ol")
                    .class(part("breadcrumbs", "list"))
                    .style("display", "flex")
                    .style("flex-wrap", "wrap")
                    .style("align-items", "center")
                    .style("padding", "0")
                    .style("margin", "0")
                    .style("list-style", "none")
                    .children(list),
            )
    }
}

pub fn breadcrumbs() -> Breadcrumbs {
    Breadcrumbs::new()
}

#[cfg(test)]
mod tests {
    use super::BreadcrumbEntry::*;
    use super::*;

    #[test]
    fn test_entries_within_limit() {
        assert_eq!(breadcrumb_entries(3, 8, false), vec![Item(0), Item(1), Item(2)]);
        assert_eq!(breadcrumb_entries(3, 3, false), vec![Item(0), Item(1), Item(2)]);
    }

    #[test]
    fn test_entries_collapse() {
        assert_eq!(breadcrumb_entries(9, 8, false), vec![Item(0), Collapsed, Item(8)]);
        assert_eq!(breadcrumb_entries(5, 3, true).len(), 5);
    }

    #[test]
    fn test_nothing_to_collapse() {
        assert_eq!(breadcrumb_entries(2, 1, false), vec![Item(0), Item(1)]);
        assert!(breadcrumb_entries(0, 0, false).is_empty());
    }
}
