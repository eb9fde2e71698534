//! Progress indicators
//!
//! [`Progress`] is a linear bar, determinate when a value is set and
//! indeterminate otherwise. [`Spinner`] is the circular variant. [`Skeleton`]
//! is a placeholder shape shown while content loads.

use lumen_core::{el, px, Element, Style};
use lumen_theme::Palette;

use super::shared::{self, class, modifier, part};
use crate::context::{BuildContext, ElementBuilder};

// ========== Linear ==========

/// Linear progress bar
#[derive(Clone, Debug)]
pub struct Progress {
    value: Option<f32>,
    color: Palette,
    height: f32,
    label: Option<String>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            value: None,
            color: Palette::Primary,
            height: 4.0,
            label: None,
        }
    }
}

impl Progress {
    /// Indeterminate bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Determinate bar at `value` percent, clamped to `0..=100`
    pub fn value(mut self, value: f32) -> Self {
        self.value = Some(value.clamp(0.0, 100.0));
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = color;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Accessible label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn is_determinate(&self) -> bool {
        self.value.is_some()
    }
}

impl ElementBuilder for Progress {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let main = shared::palette(&theme, self.color, "main");
        let kind = if self.is_determinate() { "determinate" } else { "indeterminate" };

        let bar = el("span")
            .class(part("progress", "bar"))
            .style("position", "absolute")
            .style("left", "0")
            .style("top", "0")
            .style("bottom", "0")
            .style("background-color", main.to_css())
            .map(|bar| match self.value {
                Some(value) => bar
                    .style("width", format!("{value}%"))
                    .style("transition", "width 0.4s linear"),
                None => bar
                    .style("width", "40%")
                    .style("animation", "lumen-progress-indeterminate 2s ease-in-out infinite"),
            });

        el("div")
            .class(class("progress"))
            .class(modifier("progress", kind))
            .attr("role", "progressbar")
            .attr("aria-valuemin", "0")
            .attr("aria-valuemax", "100")
            .attr_opt("aria-valuenow", self.value.map(|v| format!("{}", v.round())))
            .attr_opt("aria-label", self.label.clone())
            .style("position", "relative")
            .style("overflow", "hidden")
            .style("height", px(self.height))
            .style("border-radius", px(self.height / 2.0))
            .style("background-color", main.with_alpha(0.25).to_css())
            .child(bar)
    }
}

pub fn progress() -> Progress {
    Progress::new()
}

// ========== Spinner ==========

/// Circular indeterminate indicator
#[derive(Clone, Debug)]
pub struct Spinner {
    size: f32,
    thickness: f32,
    color: Option<Palette>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            size: 40.0,
            thickness: 3.6,
            color: Some(Palette::Primary),
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn color(mut self, color: Palette) -> Self {
        self.color = Some(color);
        self
    }

    /// Use the surrounding text color
    pub fn inherit_color(mut self) -> Self {
        self.color = None;
        self
    }
}

impl ElementBuilder for Spinner {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let color = self
            .color
            .map(|palette| shared::palette(&theme, palette, "main").to_css())
            .unwrap_or_else(|| "currentColor".to_string());

        el("span")
            .class(class("spinner"))
            .attr("role", "progressbar")
            .style("display", "inline-block")
            .style("box-sizing", "border-box")
            .style("width", px(self.size))
            .style("height", px(self.size))
            .style("border-radius", "50%")
            .style("border", format!("{} solid transparent", px(self.thickness)))
            .style("border-top-color", color)
            .style("animation", "lumen-spin 1.4s linear infinite")
    }
}

pub fn spinner() -> Spinner {
    Spinner::new()
}

// ========== Skeleton ==========

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonVariant {
    #[default]
    Text,
    Rectangular,
    Circular,
}

impl SkeletonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rectangular => "rectangular",
            Self::Circular => "circular",
        }
    }
}

/// Loading placeholder
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    variant: SkeletonVariant,
    width: Option<f32>,
    height: Option<f32>,
    animate: bool,
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            animate: true,
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: SkeletonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}

impl ElementBuilder for Skeleton {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let fill = shared::color(&theme, "text.primary").with_alpha(if theme.mode().is_dark() {
            0.13
        } else {
            0.11
        });

        let mut style = Style::new()
            .set("display", "block")
            .set("background-color", fill.to_css());
        match self.variant {
            SkeletonVariant::Text => {
                style.insert("height", self.height.map(px).unwrap_or_else(|| "1.2em".into()));
                style.insert("border-radius", px(shared::radius(&theme, "md")));
                style.insert("transform", "scale(1, 0.6)");
            }
            SkeletonVariant::Rectangular => {
                style.insert("height", self.height.map(px).unwrap_or_else(|| "auto".into()));
            }
            SkeletonVariant::Circular => {
                style.insert("height", self.height.map(px).unwrap_or_else(|| "40px".into()));
                style.insert("border-radius", "50%");
            }
        }
        let width = match (self.width, self.variant) {
            (Some(width), _) => px(width),
            (None, SkeletonVariant::Circular) => "40px".to_string(),
            (None, _) => "100%".to_string(),
        };
        style.insert("width", width);
        if self.animate {
            style.insert("animation", "lumen-pulse 1.5s ease-in-out 0.5s infinite");
        }

        el("span")
            .class(class("skeleton"))
            .class(modifier("skeleton", self.variant.as_str()))
            .attr("aria-hidden", "true")
            .styles(&style)
    }
}

pub fn skeleton() -> Skeleton {
    Skeleton::new()
}
