//! Image with load tracking
//!
//! The load status runs `Idle -> Loading -> Loaded | Error`. A failed load
//! substitutes the fallback source at most once; after that the image shows
//! an error overlay. `Loaded` and `Error` stay put until the source changes.
//!
//! The host reports load results by dispatching [`Event::load`] or
//! [`Event::error`] on the `img` element.
//!
//! [`Event::load`]: lumen_core::Event::load
//! [`Event::error`]: lumen_core::Event::error

use std::fmt;
use std::sync::Arc;

use lumen_core::{el, event_types, px, Element, Event, State};
use lumen_theme::TextVariant;

use super::shared::{self, class, modifier, part, svg_icon};
use crate::context::{BuildContext, ElementBuilder};

const BROKEN_IMAGE_PATH: &str = "M21 5v6.59l-3-3.01-4 4.01-4-4-4 4-3-3.01V5c0-1.1.9-2 2-2h14c1.1 0 2 .9 2 2zm-3 6.42 3 3.01V19c0 1.1-.9 2-2 2H5c-1.1 0-2-.9-2-2v-6.58l3 2.99 4-4 4 4 4-3.99z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

impl ImageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageStatus::Idle => "idle",
            ImageStatus::Loading => "loading",
            ImageStatus::Loaded => "loaded",
            ImageStatus::Error => "error",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ImageStatus::Loaded | ImageStatus::Error)
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state machine for one source (plus its fallback)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoad {
    source: String,
    fallback: Option<String>,
    current: String,
    fallback_tried: bool,
    status: ImageStatus,
}

impl ImageLoad {
    pub fn new(source: impl Into<String>, fallback: Option<String>) -> Self {
        let source = source.into();
        Self {
            current: source.clone(),
            source,
            fallback,
            fallback_tried: false,
            status: ImageStatus::Idle,
        }
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }

    /// The source actually requested, the fallback after a substitution
    pub fn current_src(&self) -> &str {
        &self.current
    }

    pub fn fallback_tried(&self) -> bool {
        self.fallback_tried
    }

    /// Whether this state tracks `source` with `fallback`
    pub fn tracks(&self, source: &str, fallback: Option<&str>) -> bool {
        self.source == source && self.fallback.as_deref() == fallback
    }

    /// `Idle -> Loading`. An empty source goes straight to the fallback, or
    /// to `Error` without one.
    pub fn start(&mut self) {
        if self.status != ImageStatus::Idle {
            return;
        }
        if self.current.is_empty() {
            self.failed();
        } else {
            self.status = ImageStatus::Loading;
        }
    }

    /// `Loading -> Loaded`
    pub fn loaded(&mut self) {
        if self.status == ImageStatus::Loading {
            self.status = ImageStatus::Loaded;
        }
    }

    /// A load failure. Returns true when the fallback was substituted.
    pub fn failed(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        match self.fallback.as_deref() {
            Some(fallback)
                if !self.fallback_tried && !fallback.is_empty() && fallback != self.current =>
            {
                tracing::debug!("image {:?} failed, trying fallback {fallback:?}", self.current);
                self.current = fallback.to_string();
                self.fallback_tried = true;
                self.status = ImageStatus::Loading;
                true
            }
            _ => {
                tracing::debug!("image {:?} failed", self.current);
                self.status = ImageStatus::Error;
                false
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

type StatusHandler = Arc<dyn Fn(ImageStatus) + Send + Sync>;

#[derive(Clone)]
pub struct Image {
    id: Option<String>,
    src: String,
    fallback_src: Option<String>,
    alt: String,
    width: Option<String>,
    height: Option<String>,
    fit: ObjectFit,
    radius: Option<String>,
    lazy: bool,
    error_text: String,
    on_status: Option<StatusHandler>,
}

impl Image {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            id: None,
            src: src.into(),
            fallback_src: None,
            alt: String::new(),
            width: None,
            height: None,
            fit: ObjectFit::default(),
            radius: None,
            lazy: true,
            error_text: "Failed to load image".to_string(),
            on_status: None,
        }
    }

    /// Element id; also keys the load state across rebuilds
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn fallback_src(mut self, src: impl Into<String>) -> Self {
        self.fallback_src = Some(src.into());
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(px(width));
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(px(height));
        self
    }

    /// Any CSS length, e.g. `"100%"`
    pub fn width_css(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height_css(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn fit(mut self, fit: ObjectFit) -> Self {
        self.fit = fit;
        self
    }

    /// Radius token key (`"md"`) or a CSS value
    pub fn radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Called with the new status after every load or error event
    pub fn on_status<F>(mut self, handler: F) -> Self
    where
        F: Fn(ImageStatus) + Send + Sync + 'static,
    {
        self.on_status = Some(Arc::new(handler));
        self
    }

    fn load_state(&self, cx: &BuildContext) -> State<ImageLoad> {
        let fresh = || ImageLoad::new(self.src.clone(), self.fallback_src.clone());
        let state = match &self.id {
            Some(id) => cx.use_state_keyed(&format!("image:{id}"), fresh),
            None => State::new(fresh()),
        };
        state.update(|load| {
            if !load.tracks(&self.src, self.fallback_src.as_deref()) {
                *load = fresh();
            }
            load.start();
        });
        state
    }
}

impl ElementBuilder for Image {
    fn build(&self, cx: &BuildContext) -> Element {
        let theme = cx.theme();
        let state = self.load_state(cx);
        let load = state.get();
        let status = load.status();
        tracing::trace!("Image build: {status} {:?}", load.current_src());

        let radius = self
            .radius
            .as_deref()
            .map(|radius| shared::radius_css(&theme, radius));

        let mut root = el("div")
            .class(class("image"))
            .class(modifier("image", status.as_str()))
            .attr("data-status", status.as_str())
            .style("position", "relative")
            .style("display", "inline-block")
            .style("overflow", "hidden")
            .style("background-color", shared::color(&theme, "grey.100").to_css())
            .when_some(self.width.clone(), |e, width| e.style("width", width))
            .when_some(self.height.clone(), |e, height| e.style("height", height))
            .when_some(radius, |e, radius| e.style("border-radius", radius));

        if status != ImageStatus::Error && !load.current_src().is_empty() {
            let on_load = {
                let state = state.clone();
                let on_status = self.on_status.clone();
                move |_: &Event| {
                    let status = state.update(|load| {
                        load.loaded();
                        load.status()
                    });
                    if let Some(on_status) = &on_status {
                        on_status(status);
                    }
                }
            };
            let on_error = {
                let state = state.clone();
                let on_status = self.on_status.clone();
                move |_: &Event| {
                    let status = state.update(|load| {
                        load.failed();
                        load.status()
                    });
                    if let Some(on_status) = &on_status {
                        on_status(status);
                    }
                }
            };

            root = root.child(
                el("img")
                    .class(part("image", "img"))
                    .attr("src", load.current_src())
                    .attr("alt", self.alt.as_str())
                    .when(self.lazy, |e| e.attr("loading", "lazy"))
                    .style("display", "block")
                    .style("width", "100%")
                    .style("height", "100%")
                    .style("object-fit", self.fit.as_css())
                    .style(
                        "opacity",
                        if status == ImageStatus::Loaded { "1" } else { "0" },
                    )
                    .style("transition", "opacity 200ms ease-in-out")
                    .on(event_types::LOAD, on_load)
                    .on(event_types::ERROR, on_error),
            );
        }

        if status == ImageStatus::Error {
            root = root.child(
                el("div")
                    .class(part("image", "error"))
                    .attr("role", "img")
                    .attr(
                        "aria-label",
                        if self.alt.is_empty() { self.error_text.as_str() } else { self.alt.as_str() },
                    )
                    .style("position", "absolute")
                    .style("inset", "0")
                    .style("display", "flex")
                    .style("flex-direction", "column")
                    .style("align-items", "center")
                    .style("justify-content", "center")
                    .style("gap", px(shared::spacing(&theme, "xs")))
                    .style("color", shared::color(&theme, "text.secondary").to_css())
                    .child(svg_icon(BROKEN_IMAGE_PATH, 32.0))
                    .child(
                        el("span")
                            .styles(&shared::text_style(&theme, TextVariant::Caption))
                            .child(self.error_text.as_str()),
                    ),
            );
        }

        root
    }
}

pub fn image(src: impl Into<String>) -> Image {
    Image::new(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_theme::Theme;

    fn cx() -> BuildContext {
        BuildContext::new().with_theme(Theme::light())
    }

    #[test]
    fn test_load_success() {
        let mut load = ImageLoad::new("a.png", None);
        assert_eq!(load.status(), ImageStatus::Idle);
        load.start();
        assert_eq!(load.status(), ImageStatus::Loading);
        load.loaded();
        assert_eq!(load.status(), ImageStatus::Loaded);
        assert!(!load.failed());
        assert_eq!(load.status(), ImageStatus::Loaded);
    }

    #[test]
    fn test_single_fallback_substitution() {
        let mut load = ImageLoad::new("a.png", Some("b.png".into()));
        load.start();
        assert!(load.failed());
        assert_eq!(load.current_src(), "b.png");
        assert_eq!(load.status(), ImageStatus::Loading);
        assert!(!load.failed());
        assert_eq!(load.status(), ImageStatus::Error);
        assert_eq!(load.current_src(), "b.png");
    }

    #[test]
    fn test_fallback_equal_to_source_is_not_retried() {
        let mut load = ImageLoad::new("a.png", Some("a.png".into()));
        load.start();
        assert!(!load.failed());
        assert_eq!(load.status(), ImageStatus::Error);
    }

    #[test]
    fn test_empty_source_uses_fallback() {
        let mut load = ImageLoad::new("", Some("b.png".into()));
        load.start();
        assert_eq!(load.status(), ImageStatus::Loading);
        assert_eq!(load.current_src(), "b.png");

        let mut bare = ImageLoad::new("", None);
        bare.start();
        assert_eq!(bare.status(), ImageStatus::Error);
    }

    #[test]
    fn test_error_overlay_after_events() {
        let cx = cx();
        let img = image("missing.png").id("hero").fallback_src("also-missing.png");
        img.build(&cx)
            .find_by_class("lumen-image__img")
            .unwrap()
            .dispatch(&Event::error());

        let el = img.build(&cx);
        let tag = el.find_by_class("lumen-image__img").unwrap();
        assert_eq!(tag.get_attr("src"), Some("also-missing.png"));
        tag.dispatch(&Event::error());

        let el = img.build(&cx);
        assert_eq!(el.get_attr("data-status"), Some("error"));
        assert!(el.find_by_class("lumen-image__img").is_none());
        assert!(el.find_by_class("lumen-image__error").is_some());
    }

    #[test]
    fn test_source_change_resets() {
        let cx = cx();
        let first = image("a.png").id("pic");
        first.build(&cx).find_by_class("lumen-image__img").unwrap().dispatch(&Event::error());
        assert_eq!(first.build(&cx).get_attr("data-status"), Some("error"));

        let second = image("b.png").id("pic");
        assert_eq!(second.build(&cx).get_attr("data-status"), Some("loading"));
    }
}
