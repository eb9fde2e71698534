//! Component gallery
//!
//! One page showing every component in its common configurations. The CLI
//! renders it to HTML; tests use it as a smoke test for the whole library.

use lumen_theme::{Palette, TextVariant};

use crate::components::*;
use crate::context::{BuildContext, ElementBuilder};
use lumen_core::Element;

fn section(title: &str, body: impl Into<crate::Child>) -> Stack {
    stack()
        .spacing("sm")
        .class("lumen-gallery__section")
        .child(text_variant(TextVariant::H5, title.to_string()).gutter_bottom(true))
        .child(body)
}

fn layout_section() -> Stack {
    section(
        "Layout",
        stack()
            .spacing("md")
            .divider(divider())
            .child(
                hstack()
                    .spacing("sm")
                    .children((1..=3).map(|n| block().p("sm").bg("grey.100").radius("sm").child(format!("Item {n}")))),
            )
            .child(
                grid()
                    .columns(3)
                    .gap("sm")
                    .children((1..=6).map(|n| block().p("xs").bg("grey.200").child(format!("Cell {n}")))),
            )
            .child(divider().label("Labelled divider")),
    )
}

fn typography_section() -> Stack {
    section(
        "Typography",
        stack()
            .child(text_variant(TextVariant::H1, "Heading 1"))
            .child(text_variant(TextVariant::H3, "Heading 3"))
            .child(text_variant(TextVariant::Subtitle1, "Subtitle"))
            .child(typography("Body text with a ").child(link("https://example.com").child("link")))
            .child(text_variant(TextVariant::Caption, "Caption").color("text.secondary"))
            .child(text_variant(TextVariant::Overline, "Overline")),
    )
}

fn inputs_section() -> Stack {
    section(
        "Inputs",
        stack()
            .spacing("md")
            .child(
                hstack()
                    .spacing("sm")
                    .child(button("Contained").contained().id("gallery-contained"))
                    .child(button("Outlined").outlined().color(Palette::Secondary))
                    .child(button("Text"))
                    .child(button("Loading").contained().loading(true))
                    .child(button("Disabled").contained().disabled(true)),
            )
            .child(
                form_control()
                    .id("gallery-email")
                    .label("Email")
                    .helper_text("We never share it")
                    .required(true)
                    .control(|field| input().placeholder("you@example.com").field(field).into()),
            )
            .child(
                form_control()
                    .id("gallery-bio")
                    .label("Bio")
                    .error(true)
                    .helper_text("Too short")
                    .control(|field| textarea().rows(3).max_rows(6).field(field).into()),
            )
            .child(
                hstack()
                    .spacing("md")
                    .child(checkbox().id("gallery-check").label("Checked").default_checked(true))
                    .child(checkbox().label("Indeterminate").indeterminate(true))
                    .child(switch().id("gallery-switch").label("Switch")),
            )
            .child(
                radio_group("gallery-size")
                    .row(true)
                    .option("s", "Small")
                    .option("m", "Medium")
                    .option("l", "Large")
                    .default_value("m"),
            )
            .child(
                select()
                    .id("gallery-select")
                    .placeholder("Pick a fruit")
                    .option("apple", "Apple")
                    .option("pear", "Pear"),
            ),
    )
}

fn navigation_section() -> Stack {
    section(
        "Navigation",
        stack()
            .spacing("md")
            .child(
                tabs("gallery-tabs")
                    .tab(tab("Overview").panel("Overview panel"))
                    .tab(tab("Details").panel("Details panel"))
                    .tab(tab("Disabled").disabled(true)),
            )
            .child(pagination("gallery-pages", 10).show_first_button(true).show_last_button(true))
            .child(
                breadcrumbs()
                    .id("gallery-crumbs")
                    .max_items(3)
                    .items(["Home", "Library", "Data", "Reports", "2026"]),
            ),
    )
}

fn data_display_section() -> Stack {
    section(
        "Data display",
        stack()
            .spacing("md")
            .child(
                hstack()
                    .spacing("sm")
                    .child(avatar().name("Ada Lovelace").color(Palette::Primary))
                    .child(badge().content(4u32).child(avatar().name("Grace Hopper")))
                    .child(chip("Filled"))
                    .child(chip("Deletable").outlined().on_delete(|| {}))
                    .child(tooltip("gallery-tip", "More info").child(button("Hover me"))),
            )
            .child(image("https://picsum.photos/320/180").id("gallery-image").alt("Sample").width(320.0).height(180.0))
            .child(
                card()
                    .child(card_header().title("Card title").subheader("Subheader"))
                    .child(card_content().child("Cards group related content."))
                    .child(card_actions().child(button("Share")).child(button("Learn more"))),
            )
            .child(
                list()
                    .subheader("Recent files")
                    .item(list_item().primary("report.pdf").secondary("2 MB").divider(true))
                    .item(list_item().primary("notes.txt").secondary("4 KB").selected(true)),
            ),
    )
}

fn feedback_section() -> Stack {
    section(
        "Feedback",
        stack()
            .spacing("sm")
            .child(alert(Severity::Success).title("Saved").child("Your changes were stored."))
            .child(alert(Severity::Info).filled().child("A new version is available."))
            .child(alert(Severity::Warning).outlined().child("Storage almost full."))
            .child(alert(Severity::Error).child("Upload failed."))
            .child(progress().value(60.0))
            .child(progress())
            .child(hstack().spacing("md").child(spinner()).child(skeleton().variant(SkeletonVariant::Circular)))
            .child(skeleton().width(240.0)),
    )
}

/// The full gallery page body
#[derive(Clone, Copy, Debug, Default)]
pub struct Gallery;

impl ElementBuilder for Gallery {
    fn build(&self, cx: &BuildContext) -> Element {
        tracing::trace!("building gallery");
        container()
            .class("lumen-gallery")
            .py("lg")
            .child(
                hstack()
                    .justify(Align::SpaceBetween)
                    .align(Align::Center)
                    .child(text_variant(TextVariant::H3, "Lumen components"))
                    .child(theme_toggle().id("gallery-theme-toggle")),
            )
            .child(
                stack()
                    .spacing("xl")
                    .child(layout_section())
                    .child(typography_section())
                    .child(inputs_section())
                    .child(navigation_section())
                    .child(data_display_section())
                    .child(feedback_section()),
            )
            .build(cx)
    }
}

pub fn gallery() -> Gallery {
    Gallery
}
