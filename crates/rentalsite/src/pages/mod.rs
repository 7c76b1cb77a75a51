// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page routines and the dispatcher that picks one per request.
//!
//! Error policy, shared by every routine:
//! - content the page cannot exist without is loaded with `?`; a failure
//!   returns `Err` and whatever was already written stays in the document
//! - optional enrichment goes through [`enrich`], which logs and moves on
//! - DOM writes never fail

mod booking;
mod contact;
mod gallery;
mod home;
mod property;

pub use booking::{PROPERTY_FIELD, init_booking};
pub use contact::init_contact;
pub use gallery::{GalleryView, init_gallery};
pub use home::init_home;
pub use property::init_property;

use crate::config::SiteConfig;
use crate::dom::{Document, Element};
use crate::error::{Error, Result};
use crate::identity::ManualGate;
use crate::lightbox;
use crate::loader::ContentSource;
use std::collections::BTreeMap;
use std::future::Future;
use url::Url;

/// Container ids the routines write into.
pub mod ids {
    pub const BRAND_NAME: &str = "brandName";
    pub const HERO_TITLE: &str = "heroTitle";
    pub const HERO_SUB: &str = "heroSub";
    pub const HERO_BADGES: &str = "heroBadges";
    pub const PROPERTY_CARDS: &str = "propertyCards";
    pub const PROP_NAME: &str = "propName";
    pub const PROP_META: &str = "propMeta";
    pub const PROP_DESC: &str = "propDesc";
    pub const PROP_SMART: &str = "propSmart";
    pub const PROP_AMENITIES: &str = "propAmenities";
    pub const PROP_RULES: &str = "propRules";
    pub const WIFI: &str = "wifi";
    pub const MANUAL_BUTTON: &str = "manualButton";
    pub const GALLERY: &str = "gallery";
    pub const BOOK_BUTTONS: &str = "bookButtons";
    pub const TABS: &str = "tabs";
    pub const BOOKING_HELP: &str = "bookingHelp";
    pub const BOOKING_PROPERTY: &str = "bookingProperty";
    pub const CONTACT_CARDS: &str = "contactCards";
}

/// Everything a routine reads from besides the document itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub source: &'a dyn ContentSource,
    pub config: &'a SiteConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(source: &'a dyn ContentSource, config: &'a SiteConfig) -> Self {
        Self { source, config }
    }
}

/// The five page types of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageKind {
    Home,
    Property,
    Gallery,
    Booking,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Property,
        PageKind::Gallery,
        PageKind::Booking,
        PageKind::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Property => "property",
            PageKind::Gallery => "gallery",
            PageKind::Booking => "booking",
            PageKind::Contact => "contact",
        }
    }

    /// Site path the page is served from.
    pub fn path(self) -> &'static str {
        match self {
            PageKind::Home => "/index.html",
            PageKind::Property => "/properties.html",
            PageKind::Gallery => "/gallery.html",
            PageKind::Booking => "/booking.html",
            PageKind::Contact => "/contact.html",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "" | "/" | "/index.html" => Some(PageKind::Home),
            "/properties.html" => Some(PageKind::Property),
            "/gallery.html" => Some(PageKind::Gallery),
            "/booking.html" => Some(PageKind::Booking),
            "/contact.html" => Some(PageKind::Contact),
            _ => None,
        }
    }

    /// The empty containers of this page's HTML shell.
    pub fn shell(self) -> Document {
        use ids::*;

        let mut doc = Document::new().with(Element::new("span", BRAND_NAME));
        let elements: Vec<Element> = match self {
            PageKind::Home => vec![
                Element::new("h1", HERO_TITLE),
                Element::new("p", HERO_SUB).with_class("muted"),
                Element::new("div", HERO_BADGES).with_class("badges"),
                Element::new("div", PROPERTY_CARDS).with_class("grid"),
            ],
            PageKind::Property => vec![
                Element::new("h1", PROP_NAME),
                Element::new("div", PROP_META),
                Element::new("div", PROP_DESC),
                Element::new("ul", PROP_SMART),
                Element::new("ul", PROP_AMENITIES),
                Element::new("ul", PROP_RULES),
                Element::new("div", WIFI),
                Element::new("div", MANUAL_BUTTON),
                Element::new("div", GALLERY).with_class("gallery"),
                Element::new("div", BOOK_BUTTONS).with_class("actions"),
            ],
            PageKind::Gallery => vec![
                Element::new("div", TABS).with_class("tabs"),
                Element::new("div", GALLERY).with_class("gallery"),
            ],
            PageKind::Booking => vec![
                Element::new("div", BOOKING_HELP),
                Element::new("select", BOOKING_PROPERTY).with_attr("name", booking::PROPERTY_FIELD),
            ],
            PageKind::Contact => vec![Element::new("div", CONTACT_CARDS).with_class("grid")],
        };
        for element in elements {
            doc.insert(element);
        }

        if matches!(self, PageKind::Property | PageKind::Gallery) {
            for element in lightbox::elements() {
                doc.insert(element);
            }
        }
        doc
    }
}

/// A page load: which page, plus its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: PageKind,
    pub query: BTreeMap<String, String>,
}

impl PageRequest {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            query: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        let _ = self.query.insert(key.to_string(), value.to_string());
        self
    }

    /// Parse a site-relative path (`/properties.html?slug=x`) or a full URL.
    pub fn parse(target: &str) -> Result<Self> {
        let url = match Url::parse(target) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse("http://localhost/")?.join(target)?
            }
            Err(e) => return Err(e.into()),
        };

        let kind =
            PageKind::from_path(url.path()).ok_or_else(|| Error::UnknownPage(url.path().to_string()))?;

        // First occurrence wins, like URLSearchParams.get
        let mut query = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            let _ = query
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Ok(Self { kind, query })
    }

    /// A query parameter, treating an empty value as absent.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Interactive state a page keeps after its routine finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    None,
    Property { manual: Option<ManualGate> },
    Gallery(GalleryView),
}

/// Run the routine for `request.kind` against `doc`.
///
/// On error the document keeps whatever the routine wrote before failing.
pub async fn dispatch(
    ctx: &RenderContext<'_>,
    request: &PageRequest,
    doc: &mut Document,
) -> Result<PageState> {
    diagnostics::log_info!("Rendering {page} page", page: request.kind.name());

    let result = match request.kind {
        PageKind::Home => init_home(ctx, doc).await.map(|()| PageState::None),
        PageKind::Property => init_property(ctx, request.param("slug"), doc)
            .await
            .map(|manual| PageState::Property { manual }),
        PageKind::Gallery => init_gallery(ctx, doc).await.map(PageState::Gallery),
        PageKind::Booking => init_booking(ctx, request.param("slug"), doc)
            .await
            .map(|()| PageState::None),
        PageKind::Contact => init_contact(ctx, doc).await.map(|()| PageState::None),
    };

    if let Err(e) = &result {
        diagnostics::log_error!("Rendering {page} page failed: {reason}",
            page: request.kind.name(),
            reason: e.to_string());
    }
    result
}

/// Await an optional load. Failures are logged and become `None`.
pub(crate) async fn enrich<T>(what: &str, load: impl Future<Output = Result<T>>) -> Option<T> {
    match load.await {
        Ok(value) => Some(value),
        Err(e) => {
            diagnostics::log_warn!("Skipping {what}: {reason}", what: what, reason: e.to_string());
            None
        }
    }
}
