// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{RenderContext, ids};
use crate::content::{SITE_PATH, SiteSettings};
use crate::dom::Document;
use crate::error::Result;
use crate::fragments;
use crate::loader::load_json;

/// Contact page: brand name plus the configured contact cards.
pub async fn init_contact(ctx: &RenderContext<'_>, doc: &mut Document) -> Result<()> {
    let site: SiteSettings = load_json(ctx.source, SITE_PATH).await?;
    doc.set_text(ids::BRAND_NAME, &site.site_name);
    doc.set_html(ids::CONTACT_CARDS, fragments::contact_cards(&ctx.config.contact));
    Ok(())
}
