// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{RenderContext, enrich, ids};
use crate::content::{
    PROPERTY_INDEX_PATH, Property, PropertyIndex, SITE_PATH, SiteSettings, property_path,
};
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::fragments;
use crate::identity::ManualGate;
use crate::loader::load_json;

/// Property detail page.
///
/// Returns the house-manual gate when the property has a manual, for the
/// `#openManual` button's click handler.
pub async fn init_property(
    ctx: &RenderContext<'_>,
    slug: Option<&str>,
    doc: &mut Document,
) -> Result<Option<ManualGate>> {
    let slug = match slug {
        Some(slug) => slug.to_string(),
        None => default_slug(ctx).await?,
    };

    if let Some(site) = enrich(
        "brand name",
        load_json::<SiteSettings>(ctx.source, SITE_PATH),
    )
    .await
    {
        doc.set_text(ids::BRAND_NAME, &site.site_name);
    }

    let p: Property = load_json(ctx.source, &property_path(&slug)?).await?;

    doc.set_text(ids::PROP_NAME, &p.name);
    doc.set_html(ids::PROP_META, fragments::property_meta(&p));
    doc.set_html(ids::PROP_DESC, fragments::description(&p.long_description));
    doc.set_html(ids::PROP_SMART, fragments::list_items(&p.smart_features));
    doc.set_html(ids::PROP_AMENITIES, fragments::list_items(&p.amenities));
    doc.set_html(ids::PROP_RULES, fragments::list_items(&p.house_rules));
    doc.set_html(ids::WIFI, fragments::wifi_notice());

    let gate = match p.manual_url() {
        Some(url) => {
            doc.set_html(ids::MANUAL_BUTTON, fragments::manual_button());
            Some(ManualGate::new(url))
        }
        None => {
            doc.set_html(ids::MANUAL_BUTTON, fragments::manual_unavailable());
            None
        }
    };

    doc.set_html(ids::GALLERY, fragments::gallery_images(&p.gallery));
    // Records carry no slug of their own; the validated file stem names them.
    doc.set_html(
        ids::BOOK_BUTTONS,
        fragments::book_buttons(&slug, p.payment_link()),
    );

    Ok(gate)
}

/// Slug for a property page opened without `?slug=`: the configured default,
/// else the first listed property.
async fn default_slug(ctx: &RenderContext<'_>) -> Result<String> {
    if let Some(slug) = &ctx.config.default_property {
        return Ok(slug.clone());
    }
    let index: PropertyIndex = load_json(ctx.source, PROPERTY_INDEX_PATH).await?;
    index.slugs.into_iter().next().ok_or_else(|| Error::Load {
        path: PROPERTY_INDEX_PATH.to_string(),
        reason: "no properties listed".to_string(),
    })
}
