// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! HTML fragments that page routines write into containers.
//!
//! Content values are interpolated as authored; the CMS is trusted and no
//! escaping is applied. Only URL query values are encoded.

use crate::config::ContactConfig;
use crate::content::{GalleryImage, Property, slug_label};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes kept as-is by `encodeURIComponent`; everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a value for use inside a query string. Spaces become `%20`.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

pub fn badge(text: &str) -> String {
    format!("<span class=\"badge\">{}</span>", text)
}

pub fn chip(text: &str) -> String {
    format!("<span class=\"chip\">{}</span>", text)
}

/// One badge per highlight, in source order.
pub fn badges(items: &[String]) -> String {
    items.iter().map(|s| badge(s)).collect()
}

/// One `<li>` per item, in source order.
pub fn list_items(items: &[String]) -> String {
    items.iter().map(|s| format!("<li>{}</li>", s)).collect()
}

/// Gallery thumbnails. Clicking one opens it in the lightbox.
pub fn gallery_images(images: &[GalleryImage]) -> String {
    images
        .iter()
        .map(|img| {
            format!(
                "<img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" onclick=\"openModal('{src}')\">",
                src = img.src,
                alt = img.alt
            )
        })
        .collect()
}

pub fn property_href(slug: &str) -> String {
    format!("/properties.html?slug={}", encode_query_value(slug))
}

pub fn booking_href(slug: &str) -> String {
    format!("/booking.html?slug={}", encode_query_value(slug))
}

/// Summary card for the home page.
pub fn property_card(slug: &str, property: &Property, feature_limit: usize) -> String {
    let features: String = property
        .smart_features
        .iter()
        .take(feature_limit)
        .map(|f| chip(f))
        .collect();
    format!(
        "<div class=\"card\">\
         <h3>{name}</h3>\
         <p class=\"muted\">{summary}</p>\
         <div class=\"chips\" style=\"margin:10px 0\">{features}</div>\
         <a class=\"btn primary\" href=\"{href}\">View details</a>\
         </div>",
        name = property.name,
        summary = property.short_description,
        features = features,
        href = property_href(slug),
    )
}

/// Location and capacity chips for the property header.
pub fn property_meta(property: &Property) -> String {
    let chips = [
        chip(&property.location),
        chip(&format!("{} guests", property.capacity)),
        chip(&property.bedrooms),
        chip(&property.bathrooms),
        chip(&property.parking),
    ];
    format!("<div class=\"chips\">{}</div>", chips.join(" "))
}

pub fn description(text: &str) -> String {
    format!("<p>{}</p>", text)
}

/// Wi-Fi credentials are never published; guests get them after booking.
pub fn wifi_notice() -> String {
    "<div class=\"card\"><strong>Wi-Fi:</strong> Available at the property. \
     <em>Login details are provided after booking.</em></div>"
        .to_string()
}

pub fn manual_button() -> String {
    "<button class=\"btn ghost\" id=\"openManual\">House Manual (guests)</button>".to_string()
}

pub fn manual_unavailable() -> String {
    "<span class=\"muted small\">House manual available to guests after booking.</span>"
        .to_string()
}

/// "Request to Book" plus the hosted checkout link. Without a payment link
/// the checkout button renders inert, as a prompt to configure one.
pub fn book_buttons(slug: &str, payment_link: Option<&str>) -> String {
    let checkout = match payment_link {
        Some(link) => format!("<a class=\"btn ghost\" href=\"{}\">Instant Checkout</a>", link),
        None => "<a class=\"btn ghost\">Instant Checkout (set Stripe Link)</a>".to_string(),
    };
    format!(
        "<a class=\"btn primary\" href=\"{}\">Request to Book</a>{}",
        booking_href(slug),
        checkout
    )
}

/// Gallery tab strip, one button per property, `active` on the selection.
pub fn tab_strip(slugs: &[String], active: Option<&str>) -> String {
    slugs
        .iter()
        .map(|slug| {
            let class = if active == Some(slug.as_str()) {
                " class=\"active\""
            } else {
                ""
            };
            format!(
                "<button data-slug=\"{}\"{}>{}</button>",
                slug,
                class,
                slug_label(slug)
            )
        })
        .collect()
}

pub fn booking_help(property_name: &str) -> String {
    format!(
        "<div class=\"alert small\">You're booking: <strong>{}</strong>. \
         After you submit, we'll confirm availability and send a Stripe checkout link.</div>",
        property_name
    )
}

/// Call / Email / Location cards. A card with nothing configured is left out.
pub fn contact_cards(contact: &ContactConfig) -> String {
    let mut html = String::new();

    if !contact.phones.is_empty() {
        html.push_str("<div class=\"card\"><h3>Call</h3>");
        for phone in &contact.phones {
            html.push_str(&format!(
                "<p>{} — <a href=\"tel:{}\">{}</a></p>",
                phone.name, phone.tel, phone.display
            ));
        }
        html.push_str("</div>");
    }

    if let Some(email) = &contact.email {
        html.push_str(&format!(
            "<div class=\"card\"><h3>Email</h3><p><a href=\"mailto:{0}\">{0}</a></p></div>",
            email
        ));
    }

    if let Some(location) = &contact.location {
        html.push_str(&format!("<div class=\"card\"><h3>Location</h3><p>{}</p>", location));
        if let Some(note) = &contact.location_note {
            html.push_str(&format!("<p class=\"small\">{}</p>", note));
        }
        html.push_str("</div>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhoneContact;

    fn property() -> Property {
        serde_json::from_str(
            r#"{
                "name": "Cliff House",
                "short_description": "Views for days",
                "location": "Katoomba",
                "capacity": 6,
                "bedrooms": "3 bedrooms",
                "bathrooms": "2 bathrooms",
                "parking": "2 cars",
                "smart_features": ["a", "b", "c", "d", "e", "f", "g"]
            }"#,
        )
        .expect("property")
    }

    #[test]
    fn test_badges_keep_order() {
        let html = badges(&["Views".to_string(), "Spa".to_string()]);
        assert_eq!(
            html,
            "<span class=\"badge\">Views</span><span class=\"badge\">Spa</span>"
        );
    }

    #[test]
    fn test_gallery_images() {
        let images = vec![
            GalleryImage { src: "/img/1.jpg".to_string(), alt: "Deck".to_string() },
            GalleryImage { src: "/img/2.jpg".to_string(), alt: "Lounge".to_string() },
        ];
        let html = gallery_images(&images);
        assert_eq!(html.matches("<img ").count(), 2);
        assert!(html.contains(
            "<img src=\"/img/1.jpg\" alt=\"Deck\" loading=\"lazy\" onclick=\"openModal('/img/1.jpg')\">"
        ));
        assert!(html.find("Deck") < html.find("Lounge"));
    }

    #[test]
    fn test_property_card_limits_features() {
        let html = property_card("cliff-house", &property(), 5);
        assert_eq!(html.matches("class=\"chip\"").count(), 5);
        assert!(html.contains("<h3>Cliff House</h3>"));
        assert!(html.contains("href=\"/properties.html?slug=cliff-house\""));
        assert!(!html.contains(">f<"));
    }

    #[test]
    fn test_property_meta() {
        let html = property_meta(&property());
        assert!(html.contains("<span class=\"chip\">6 guests</span>"));
        assert!(html.contains("<span class=\"chip\">Katoomba</span>"));
        assert_eq!(html.matches("class=\"chip\"").count(), 5);
    }

    #[test]
    fn test_book_buttons() {
        let with_link = book_buttons("cliff-house", Some("https://pay.example/x"));
        assert!(with_link.contains("href=\"/booking.html?slug=cliff-house\""));
        assert!(with_link.contains("href=\"https://pay.example/x\">Instant Checkout</a>"));

        let without = book_buttons("cliff-house", None);
        assert!(without.contains("<a class=\"btn ghost\">Instant Checkout (set Stripe Link)</a>"));
    }

    #[test]
    fn test_tab_strip_marks_active() {
        let slugs = vec!["cliff-house".to_string(), "tree-top".to_string()];
        let html = tab_strip(&slugs, Some("tree-top"));
        assert!(html.contains("<button data-slug=\"cliff-house\">cliff house</button>"));
        assert!(html.contains("<button data-slug=\"tree-top\" class=\"active\">tree top</button>"));
    }

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("cliff-house"), "cliff-house");
        assert_eq!(
            encode_query_value("https://docs.example/manual?id=1"),
            "https%3A%2F%2Fdocs.example%2Fmanual%3Fid%3D1"
        );
        assert_eq!(
            encode_query_value("house manual~v1 (draft)"),
            "house%20manual~v1%20(draft)"
        );
    }

    #[test]
    fn test_contact_cards_skip_unset() {
        let contact = ContactConfig {
            phones: vec![PhoneContact {
                name: "Host".to_string(),
                display: "0400 000 000".to_string(),
                tel: "+61400000000".to_string(),
            }],
            email: None,
            location: Some("Katoomba".to_string()),
            location_note: Some("Exact address provided after booking.".to_string()),
        };
        let html = contact_cards(&contact);
        assert!(html.contains("<h3>Call</h3>"));
        assert!(html.contains("href=\"tel:+61400000000\""));
        assert!(!html.contains("<h3>Email</h3>"));
        assert!(html.contains("<p class=\"small\">Exact address provided after booking.</p>"));
    }
}
