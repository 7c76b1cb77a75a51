// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts: serialize a populated page document into a complete
//! HTML page.
//!
//! Each page kind arranges its containers differently; the head, header and
//! footer are shared. Text content is escaped, markup content is emitted as
//! the routines produced it.

use crate::config::SiteConfig;
use crate::dom::{Content, Document};
use crate::lightbox::{MODAL_ID, MODAL_IMG_ID};
use crate::pages::{PageKind, ids};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Crate version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Elements written without a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr"];

/// Render the full HTML page for `kind` from a populated document.
pub fn render_page(kind: PageKind, doc: &Document, config: &SiteConfig) -> String {
    let brand = doc.text(ids::BRAND_NAME).unwrap_or(&config.site.title);
    let title = page_title(kind, doc);
    let body = match kind {
        PageKind::Home => home_body(doc),
        PageKind::Property => property_body(doc),
        PageKind::Gallery => gallery_body(doc),
        PageKind::Booking => booking_body(doc),
        PageKind::Contact => contact_body(doc),
    };
    base_layout(&title, brand, doc, body).into_string()
}

fn page_title(kind: PageKind, doc: &Document) -> String {
    match kind {
        PageKind::Home => "Home".to_string(),
        PageKind::Property => doc.text(ids::PROP_NAME).unwrap_or("Property").to_string(),
        PageKind::Gallery => "Gallery".to_string(),
        PageKind::Booking => "Book your stay".to_string(),
        PageKind::Contact => "Contact".to_string(),
    }
}

fn base_layout(title: &str, brand: &str, doc: &Document, body: Markup) -> Markup {
    let has_overlay = doc.contains(MODAL_ID);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("rentalsite v{}", VERSION));
                title { (title) " — " (brand) }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                header class="site-header" {
                    a class="brand" href="/" { (element(doc, ids::BRAND_NAME)) }
                    nav {
                        a href=(PageKind::Home.path()) { "Home" }
                        a href=(PageKind::Gallery.path()) { "Gallery" }
                        a href=(PageKind::Booking.path()) { "Book" }
                        a href=(PageKind::Contact.path()) { "Contact" }
                    }
                }
                main { (body) }
                @if has_overlay {
                    (lightbox_overlay(doc))
                    script src="/assets/lightbox.js" defer {}
                }
            }
        }
    }
}

fn home_body(doc: &Document) -> Markup {
    html! {
        section class="hero" {
            (element(doc, ids::HERO_TITLE))
            (element(doc, ids::HERO_SUB))
            (element(doc, ids::HERO_BADGES))
        }
        section {
            h2 { "Our homes" }
            (element(doc, ids::PROPERTY_CARDS))
        }
    }
}

fn property_body(doc: &Document) -> Markup {
    html! {
        section class="property" {
            (element(doc, ids::PROP_NAME))
            (element(doc, ids::PROP_META))
            (element(doc, ids::PROP_DESC))
            (element(doc, ids::BOOK_BUTTONS))
        }
        section class="columns" {
            div { h2 { "Smart features" } (element(doc, ids::PROP_SMART)) }
            div { h2 { "Amenities" } (element(doc, ids::PROP_AMENITIES)) }
            div { h2 { "House rules" } (element(doc, ids::PROP_RULES)) }
        }
        section {
            (element(doc, ids::WIFI))
            (element(doc, ids::MANUAL_BUTTON))
        }
        section {
            h2 { "Gallery" }
            (element(doc, ids::GALLERY))
        }
    }
}

fn gallery_body(doc: &Document) -> Markup {
    html! {
        h1 { "Gallery" }
        (element(doc, ids::TABS))
        (element(doc, ids::GALLERY))
    }
}

fn booking_body(doc: &Document) -> Markup {
    html! {
        h1 { "Request to book" }
        (element(doc, ids::BOOKING_HELP))
        form name="booking" method="POST" data-netlify="true" {
            label { "Property " (element(doc, ids::BOOKING_PROPERTY)) }
            label { "Name " input type="text" name="name" required; }
            label { "Email " input type="email" name="email" required; }
            label { "Check-in " input type="date" name="checkin" required; }
            label { "Check-out " input type="date" name="checkout" required; }
            label { "Guests " input type="number" name="guests" min="1"; }
            label { "Message " textarea name="message" {} }
            button class="btn primary" type="submit" { "Send request" }
        }
    }
}

fn contact_body(doc: &Document) -> Markup {
    html! {
        h1 { "Contact" }
        (element(doc, ids::CONTACT_CARDS))
    }
}

fn lightbox_overlay(doc: &Document) -> Markup {
    let class = doc.get(MODAL_ID).map(|m| m.class_list()).unwrap_or_default();
    html! {
        div id=(MODAL_ID) class=(class) onclick="closeModal()" {
            (element(doc, MODAL_IMG_ID))
        }
    }
}

/// Serialize one element with its id, classes, attributes, options and
/// content. An id the document does not have renders nothing.
pub fn element(doc: &Document, id: &str) -> Markup {
    let Some(el) = doc.get(id) else {
        return html! {};
    };

    let mut out = format!("<{} id=\"{}\"", el.tag, escape(&el.id));
    if !el.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape(&el.class_list())));
    }
    for (name, value) in &el.attrs {
        out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return PreEscaped(out);
    }

    for opt in &el.options {
        let selected = if opt.selected { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape(&opt.value),
            selected,
            escape(&opt.label)
        ));
    }

    match &el.content {
        Content::Empty => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Markup(markup) => out.push_str(markup),
    }

    out.push_str(&format!("</{}>", el.tag));
    PreEscaped(out)
}

fn escape(value: &str) -> String {
    html! { (value) }.into_string()
}
