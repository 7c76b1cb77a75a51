// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from `site.yaml`.
//!
//! Everything here is presentation detail that the CMS content does not
//! carry. Every field has a default, so an empty file is a valid config.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Blue Mountains Stays"
///
/// default_property: "wollemi-smart-palace"
/// card_feature_limit: 5
/// guest_login_path: "/guest.html"
///
/// contact:
///   phones:
///     - name: "Host"
///       display: "0400 000 000"
///       tel: "+61400000000"
///   email: "bookings@example.com"
///   location: "Katoomba, Blue Mountains, NSW"
///   location_note: "Exact address provided after booking."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,
    /// Property shown when the property page has no `slug` parameter.
    /// Falls back to the first indexed property when unset.
    #[serde(default)]
    pub default_property: Option<String>,
    /// Number of smart-feature chips on each home page card
    #[serde(default = "default_card_feature_limit")]
    pub card_feature_limit: usize,
    /// Where unauthenticated guests are sent before opening the house manual
    #[serde(default = "default_guest_login_path")]
    pub guest_login_path: String,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            default_property: None,
            card_feature_limit: default_card_feature_limit(),
            guest_login_path: default_guest_login_path(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a YAML document. Empty input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a `site.yaml` file.
    pub async fn load(path: &Path) -> Result<Self> {
        let yaml = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&yaml)
    }
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// `<title>` suffix used until `brandName` is populated from site.json
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Details rendered on the contact page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub phones: Vec<PhoneContact>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_note: Option<String>,
}

/// One phone line: who answers, how the number is displayed, and the dial string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneContact {
    pub name: String,
    pub display: String,
    pub tel: String,
}

fn default_title() -> String {
    "Holiday Rentals".to_string()
}

fn default_card_feature_limit() -> usize {
    5
}

fn default_guest_login_path() -> String {
    "/guest.html".to_string()
}
