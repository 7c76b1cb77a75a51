// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Typed views of the CMS-authored content documents.
//!
//! The CMS owns these files; this crate only reads them. Shapes are trusted,
//! but list fields default to empty and link records are optional so a
//! partially authored property still renders.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};

/// Site settings document
pub const SITE_PATH: &str = "/content/site.json";
/// Home page content document
pub const HOME_PATH: &str = "/content/home.json";
/// Ordered list of property slugs
pub const PROPERTY_INDEX_PATH: &str = "/content/properties/index.json";

/// Content path for one property record.
///
/// The slug is validated first; it usually comes straight from a query string.
pub fn property_path(slug: &str) -> Result<String> {
    let slug = validate_slug(slug)?;
    Ok(format!("/content/properties/{}.json", slug))
}

/// Check that a slug is a non-empty run of ASCII alphanumerics, `-` and `_`.
pub fn validate_slug(slug: &str) -> Result<&str> {
    let valid = !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if valid {
        Ok(slug)
    } else {
        Err(Error::InvalidSlug(slug.to_string()))
    }
}

/// Display label for a slug: dashes become spaces.
pub fn slug_label(slug: &str) -> String {
    slug.replace('-', " ")
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(rename = "siteName")]
    pub site_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyIndex {
    #[serde(default)]
    pub slugs: Vec<String>,
}

impl PropertyIndex {
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }
}

/// One property record, `/content/properties/{slug}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub capacity: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub bedrooms: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub bathrooms: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub parking: String,
    #[serde(default)]
    pub smart_features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub house_rules: Vec<String>,
    #[serde(default)]
    pub manual: Option<ManualLink>,
    #[serde(default)]
    pub booking: Option<BookingLink>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
}

impl Property {
    /// House manual URL, if one has been authored.
    pub fn manual_url(&self) -> Option<&str> {
        self.manual
            .as_ref()
            .and_then(|m| m.url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Hosted checkout link, if one has been authored.
    pub fn payment_link(&self) -> Option<&str> {
        self.booking
            .as_ref()
            .and_then(|b| b.stripe_payment_link.as_deref())
            .filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManualLink {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingLink {
    #[serde(default)]
    pub stripe_payment_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Accept `"4"` and `4` alike; the CMS widget for counts varies by field.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
