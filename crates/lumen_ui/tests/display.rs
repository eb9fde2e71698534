use std::sync::{Arc, Mutex};

use lumen_ui::prelude::*;
use pretty_assertions::assert_eq;

fn cx() -> BuildContext {
    BuildContext::new().with_theme(Theme::light())
}

fn status(el: &Element) -> Option<&str> {
    el.get_attr("data-status")
}

fn img_src(el: &Element) -> Option<String> {
    el.find_by_class("lumen-image__img")
        .and_then(|img| img.get_attr("src"))
        .map(str::to_string)
}

fn fire(el: &Element, event: Event) {
    let img = el.find_by_class("lumen-image__img").unwrap();
    assert!(img.dispatch(&event));
}

// ========== Image ==========

#[test]
fn image_loads_primary_source() {
    let cx = cx();
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let log = statuses.clone();
    let photo = image("a.png")
        .id("photo")
        .on_status(move |status| log.lock().unwrap().push(status));

    let el = photo.build(&cx);
    assert_eq!(status(&el), Some("loading"));
    fire(&el, Event::load());

    let el = photo.build(&cx);
    assert_eq!(status(&el), Some("loaded"));
    assert_eq!(img_src(&el).as_deref(), Some("a.png"));
    assert_eq!(*statuses.lock().unwrap(), [ImageStatus::Loaded]);
}

#[test]
fn fallback_is_substituted_exactly_once() {
    let cx = cx();
    let photo = image("broken.png").id("fb").fallback_src("spare.png");

    fire(&photo.build(&cx), Event::error());
    let el = photo.build(&cx);
    assert_eq!(status(&el), Some("loading"));
    assert_eq!(img_src(&el).as_deref(), Some("spare.png"));

    fire(&el, Event::error());
    let el = photo.build(&cx);
    assert_eq!(status(&el), Some("error"));
    assert!(el.find_by_class("lumen-image__img").is_none());
    let overlay = el.find_by_class("lumen-image__error").unwrap();
    assert_eq!(overlay.get_attr("role"), Some("img"));
    assert!(overlay.text_content().contains("Failed to load image"));
}

#[test]
fn fallback_that_loads_ends_loaded() {
    let cx = cx();
    let photo = image("broken.png").id("ok").fallback_src("spare.png");
    fire(&photo.build(&cx), Event::error());
    fire(&photo.build(&cx), Event::load());

    let el = photo.build(&cx);
    assert_eq!(status(&el), Some("loaded"));
    assert_eq!(img_src(&el).as_deref(), Some("spare.png"));
}

#[test]
fn changing_the_source_restarts_loading() {
    let cx = cx();
    fire(&image("one.png").id("swap").build(&cx), Event::error());
    assert_eq!(status(&image("one.png").id("swap").build(&cx)), Some("error"));

    let el = image("two.png").id("swap").build(&cx);
    assert_eq!(status(&el), Some("loading"));
    assert_eq!(img_src(&el).as_deref(), Some("two.png"));
}

#[test]
fn custom_error_text_and_alt() {
    let cx = cx();
    let photo = image("x.png").id("alt").alt("Team photo").error_text("Unavailable");
    fire(&photo.build(&cx), Event::error());
    let el = photo.build(&cx);
    let overlay = el.find_by_class("lumen-image__error").unwrap();
    assert_eq!(overlay.get_attr("aria-label"), Some("Team photo"));
    assert!(overlay.text_content().contains("Unavailable"));
}

// ========== Checkbox ==========

#[test]
fn indeterminate_checkbox_reports_mixed_and_checks_on_click() {
    let cx = cx();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let log = changes.clone();
    let select_all = checkbox()
        .id("all")
        .label("Select all")
        .indeterminate(true)
        .on_change(move |checked| log.lock().unwrap().push(checked));

    let el = select_all.build(&cx);
    let control = el.find_by_attr("role", "checkbox").unwrap();
    assert_eq!(control.get_attr("aria-checked"), Some("mixed"));
    assert!(el.find_by_class("lumen-checkbox__dash").is_some());

    el.dispatch(&Event::click());
    assert_eq!(*changes.lock().unwrap(), [true]);

    let el = checkbox().id("all").build(&cx);
    assert_eq!(
        el.find_by_attr("role", "checkbox").unwrap().get_attr("aria-checked"),
        Some("true")
    );
}

#[test]
fn uncontrolled_checkbox_toggles_with_space() {
    let cx = cx();
    let terms = checkbox().id("terms");
    terms
        .build(&cx)
        .find_by_attr("role", "checkbox")
        .unwrap()
        .dispatch(&Event::key_down(KeyCode::SPACE, Modifiers::NONE));
    assert!(terms.build(&cx).has_class("lumen-checkbox--checked"));
}

// ========== Badge ==========

#[test]
fn badge_caps_large_counts() {
    let el = badge().content(1000u32).child(avatar().name("Grace")).build(&cx());
    assert_eq!(el.find_by_class("lumen-badge__badge").unwrap().text_content(), "99+");
}
