//! Tabs
//!
//! A tab list with a selection indicator and optional panels. The selected
//! index is controlled (`value` plus `on_change`) or kept in keyed hook state
//! under the tabs id. Clicking a disabled tab does nothing: no state change
//! and no callback.
//!
//! The indicator is positioned from the bounds of the selected tab as
//! measured by the host after layout and passed back through
//! [`Tabs::report_layout`]. Until the selected tab has been measured, no
//! indicator is rendered.
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{Event, Rect};
//! use lumen_ui::prelude::*;
//!
//! let cx = BuildContext::new().with_theme(Theme::light());
//! let settings = tabs("settings")
//!     .tab(tab("General"))
//!     .tab(tab("Privacy"))
//!     .tab(tab("Billing").disabled(true));
//!
//! // Select the second tab
//! let el = settings.build(&cx);
//! el.find_by_attr("id", "settings-tab-1").unwrap().dispatch(&Event::click());
//!
//! // The host reports where it laid the tab out
//! settings.report_layout(&cx, 1, Rect::new(90.0, 0.0, 80.0, 48.0));
//!
//! let el = settings.build(&cx);
//! let indicator = el.find_by_class("lumen-tabs__indicator").unwrap();
//! assert_eq!(indicator.style_value("left"), Some("90px"));
//! assert_eq!(indicator.style_value("width"), Some("80px"));
//! ```

use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, KeyCode, Rect, State};
use lumen_theme::{Palette, TextVariant};
use smallvec::SmallVec;

use super::layout::Orientation;
use super::shared::{self, class, modifier, part};
use crate::context::{BuildContext, Child, ElementBuilder};
use crate::hooks::use_controlled;

/// Measured tab bounds, indexed by tab position
type TabLayout = SmallVec<[Option<Rect>; 8]>;

// ========== Tab ==========

/// One tab: a label, an optional panel and a disabled flag
#[derive(Clone, Debug)]
pub struct Tab {
    label: Child,
    icon: Option<Child>,
    panel: Option<Child>,
    disabled: bool,
}

impl Tab {
    pub fn new(label: impl Into<Child>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            panel: None,
            disabled: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<Child>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Content shown while this tab is selected
    pub fn panel(mut self, panel: impl Into<Child>) -> Self {
        self.panel = Some(panel.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

pub fn tab(label: impl Into<Child>) -> Tab {
    Tab::new(label)
}

// ========== Tabs ==========

#[derive(Clone)]
pub struct Tabs {
    id: String,
    tabs: Vec<Tab>,
    value: Option<usize>,
    default_value: usize,
    orientation: Orientation,
    color: Palette,
    full_width: bool,
    on_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
}

impl Tabs {
    /// `id` prefixes element ids and keys the uncontrolled selection and the
    /// reported layout
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tabs: Vec::new(),
            value: None,
            default_value: 0,
            orientation: Orientation::Horizontal,
            color: Palette::Primary,
            full_width: false,
            on_change: None,
        }
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn tabs(mut self, tabs: impl IntoIterator<Item = Tab>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    /// Controlled selected index
    pub fn value(mut self, index: usize) -> Self {
        self.value = Some(index);
        self
    }

    /// Initially selected index when uncontrolled
    pub fn default_value(mut self, index: usize) -> Self {
        self.default_value = index;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    /// Indicator and selected label color
    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    /// Stretch tabs to fill the list
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(handler));
        self
    }

    fn layout_state(&self, cx: &BuildContext) -> State<TabLayout> {
        cx.use_state_keyed(&format!("tabs:{}#layout", self.id), TabLayout::new)
    }

    /// Record the measured bounds of the tab at `index`, relative to the tab
    /// list
    pub fn report_layout(&self, cx: &BuildContext, index: usize, bounds: Rect) {
        if index >= self.tabs.len() {
            tracing::debug!("Tabs {:?}: ignoring layout for missing tab {index}", self.id);
            return;
        }
        self.layout_state(cx).update(|layout| {
            if layout.len() <= index {
                layout.resize(index + 1, None);
            }
            layout[index] = Some(bounds);
        });
    }

    /// Forget every measurement, e.g. after a resize
    pub fn clear_layout(&self, cx: &BuildContext) {
        self.layout_state(cx).set(TabLayout::new());
    }

    /// Next enabled tab from `from` in direction `step`, wrapping
    fn step_enabled(&self, from: usize, step: isize) -> Option<usize> {
        let len = self.tabs.len() as isize;
        (1..=len)
            .map(|offset| (from as isize + step * offset).rem_euclid(len) as usize)
            .find(|&index| !self.tabs[index].disabled)
    }

    fn first_enabled(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| !tab.disabled)
    }

    fn last_enabled(&self) -> Option<usize> {
        self.tabs.iter().rposition(|tab| !tab.disabled)
    }

    fn indicator(&self, cx: &BuildContext, selected: usize, layout: &TabLayout) -> Option<Element> {
        let bounds = layout.get(selected).copied().flatten()?;
        let theme = cx.theme();
        let indicator = el("span")
            .class(part("tabs", "indicator"))
            .style("position", "absolute")
            .style("background-color", shared::palette(&theme, self.color, "main").to_css())
            .style("transition", "all 300ms cubic-bezier(0.4, 0, 0.2, 1)");
        Some(match self.orientation {
            Orientation::Horizontal => indicator
                .style("bottom", "0")
                .style("height", "2px")
                .style("left", px(bounds.x()))
                .style("width", px(bounds.width())),
            Orientation::Vertical => indicator
                .style("right", "0")
                .style("width", "2px")
                .style("top", px(bounds.y()))
                .style("height", px(bounds.height())),
        })
    }
}

impl ElementBuilder for Tabs {
    fn build(&self, cx: &BuildContext) -> Element {
        tracing::trace!("Tabs::build {:?} ({} tabs)", self.id, self.tabs.len());
        let theme = cx.theme();
        let selection = use_controlled(cx, &format!("tabs:{}", self.id), self.value, self.default_value);
        let selected = selection.get();
        let selected = (selected < self.tabs.len()).then_some(selected);
        if selected.is_none() && !self.tabs.is_empty() {
            tracing::warn!(
                "Tabs {:?}: value {} is out of range for {} tabs",
                self.id,
                selection.get(),
                self.tabs.len()
            );
        }

        let select = {
            let selection = selection.clone();
            let on_change = self.on_change.clone();
            move |index: usize| {
                if selected == Some(index) {
                    return;
                }
                selection.set(index);
                if let Some(on_change) = &on_change {
                    on_change(index);
                }
            }
        };

        let vertical = self.orientation == Orientation::Vertical;
        let buttons = self.tabs.iter().enumerate().map(|(index, tab)| {
            let is_selected = selected == Some(index);
            let color = if tab.disabled {
                shared::color(&theme, "text.disabled")
            } else if is_selected {
                shared::palette(&theme, self.color, "main")
            } else {
                shared::color(&theme, "text.secondary")
            };

            let mut button = el("button")
                .class(part("tabs", "tab"))
                .class_if(modifier("tabs", "tab-selected"), is_selected)
                .class_if(modifier("tabs", "tab-disabled"), tab.disabled)
                .attr("id", format!("{}-tab-{index}", self.id))
                .attr("type", "button")
                .attr("role", "tab")
                .attr("aria-selected", if is_selected { "true" } else { "false" })
                .attr("aria-controls", format!("{}-panel-{index}", self.id))
                .attr("tabindex", if is_selected { "0" } else { "-1" })
                .flag("disabled", tab.disabled)
                .styles(&shared::text_style(&theme, TextVariant::Button))
                .style("display", "inline-flex")
                .style("align-items", "center")
                .style("justify-content", "center")
                .style("gap", px(shared::spacing(&theme, "sm")))
                .style("min-height", "48px")
                .style("min-width", "90px")
                .style("padding", "12px 16px")
                .style("border", "none")
                .style("background", "none")
                .style("color", color.to_css())
                .style("cursor", if tab.disabled { "default" } else { "pointer" })
                .when(self.full_width && !vertical, |e| e.style("flex", "1"))
                .child_opt(tab.icon.as_ref().map(|icon| icon.build(cx)))
                .child(tab.label.build(cx));

            if !tab.disabled {
                let select = select.clone();
                button = button.on_click(move |_| select(index));
            }
            button
        });

        let (back, forward) = if vertical {
            (KeyCode::UP, KeyCode::DOWN)
        } else {
            (KeyCode::LEFT, KeyCode::RIGHT)
        };
        let current = selected.unwrap_or(0);
        let targets = (
            self.step_enabled(current, -1),
            self.step_enabled(current, 1),
            self.first_enabled(),
            self.last_enabled(),
        );
        let on_key = select.clone();

        let layout = self.layout_state(cx).get();
        let list = el("div")
            .class(part("tabs", "list"))
            .attr("role", "tablist")
            .attr("aria-orientation", self.orientation.as_str())
            .style("position", "relative")
            .style("display", "flex")
            .style("flex-direction", if vertical { "column" } else { "row" })
            .style(
                if vertical { "border-right" } else { "border-bottom" },
                format!("1px solid {}", shared::color(&theme, "divider").to_css()),
            )
            .children(buttons)
            .child_opt(selected.and_then(|index| self.indicator(cx, index, &layout)))
            .on(event_types::KEY_DOWN, move |event| {
                let Some((key, _)) = event.key() else {
                    return;
                };
                let (prev, next, first, last) = targets;
                let target = match key {
                    k if k == back => prev,
                    k if k == forward => next,
                    KeyCode::HOME => first,
                    KeyCode::END => last,
                    _ => None,
                };
                if let Some(index) = target {
                    on_key(index);
                }
            });

        let panel = selected.and_then(|index| {
            let panel = self.tabs[index].panel.as_ref()?;
            Some(
                el("div")
                    .class(part("tabs", "panel"))
                    .attr("role", "tabpanel")
                    .attr("id", format!("{}-panel-{index}", self.id))
                    .attr("aria-labelledby", format!("{}-tab-{index}", self.id))
                    .style("padding", px(shared::spacing(&theme, "lg")))
                    .child(panel.build(cx)),
            )
        });

        el("div")
            .class(class("tabs"))
            .class(modifier("tabs", self.orientation.as_str()))
            .attr("id", self.id.as_str())
            .style("display", "flex")
            .style("flex-direction", if vertical { "row" } else { "column" })
            .child(list)
            .child_opt(panel)
    }
}

pub fn tabs(id: impl Into<String>) -> Tabs {
    Tabs::new(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Event, Modifiers};
    use lumen_theme::Theme;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    fn three() -> Tabs {
        tabs("t")
            .tab(tab("One").panel("first"))
            .tab(tab("Two").disabled(true).panel("second"))
            .tab(tab("Three").panel("third"))
    }

    fn selected_tab(el: &Element) -> Option<String> {
        el.find(|e| e.get_attr("aria-selected") == Some("true"))
            .map(|e| e.text_content())
    }

    #[test]
    fn test_default_selection_and_panel() {
        let el = three().build(&cx());
        assert_eq!(selected_tab(&el).as_deref(), Some("One"));
        let panel = el.find_by_attr("role", "tabpanel").unwrap();
        assert_eq!(panel.text_content(), "first");
        assert_eq!(panel.get_attr("aria-labelledby"), Some("t-tab-0"));
    }

    #[test]
    fn test_keyboard_skips_disabled() {
        let cx = cx();
        let t = three();
        let el = t.build(&cx);
        el.find_by_attr("role", "tablist")
            .unwrap()
            .dispatch(&Event::key_down(KeyCode::RIGHT, Modifiers::NONE));
        assert_eq!(selected_tab(&t.build(&cx)).as_deref(), Some("Three"));

        t.build(&cx)
            .find_by_attr("role", "tablist")
            .unwrap()
            .dispatch(&Event::key_down(KeyCode::RIGHT, Modifiers::NONE));
        assert_eq!(selected_tab(&t.build(&cx)).as_deref(), Some("One"));
    }

    #[test]
    fn test_clicking_selected_tab_is_silent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let el = three()
            .on_change(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&cx());
        el.find_by_attr("id", "t-tab-0").unwrap().dispatch(&Event::click());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_vertical_indicator_uses_height() {
        let cx = cx();
        let t = three().vertical();
        t.report_layout(&cx, 0, Rect::new(0.0, 10.0, 120.0, 48.0));
        let el = t.build(&cx);
        let indicator = el.find_by_class("lumen-tabs__indicator").unwrap();
        assert_eq!(indicator.style_value("top"), Some("10px"));
        assert_eq!(indicator.style_value("height"), Some("48px"));
        assert_eq!(indicator.style_value("width"), Some("2px"));
    }

    #[test]
    fn test_out_of_range_value_selects_nothing() {
        let el = three().value(7).build(&cx());
        assert_eq!(selected_tab(&el), None);
        assert!(el.find_by_attr("role", "tabpanel").is_none());
    }

    #[test]
    fn test_report_layout_ignores_missing_tab() {
        let cx = cx();
        let t = three();
        t.report_layout(&cx, 9, Rect::new(0.0, 0.0, 10.0, 10.0));
        t.report_layout(&cx, 0, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(t.build(&cx).find_by_class("lumen-tabs__indicator").is_some());
        t.clear_layout(&cx);
        assert!(t.build(&cx).find_by_class("lumen-tabs__indicator").is_none());
    }
}
