// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{RenderContext, ids};
use crate::content::{PROPERTY_INDEX_PATH, Property, PropertyIndex, property_path};
use crate::dom::Document;
use crate::error::Result;
use crate::fragments;
use crate::loader::load_json;

/// Gallery page state: the tab strip's slugs and the selected tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    slugs: Vec<String>,
    current: Option<String>,
}

impl GalleryView {
    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// A tab button was clicked. Slugs that are not tabs are ignored.
    pub async fn on_tab_click(
        &mut self,
        ctx: &RenderContext<'_>,
        doc: &mut Document,
        slug: &str,
    ) -> Result<()> {
        if !self.slugs.iter().any(|s| s == slug) {
            diagnostics::log_debug!("Ignoring click on unknown gallery tab {slug}", slug: slug);
            return Ok(());
        }
        self.current = Some(slug.to_string());
        self.render(ctx, doc).await
    }

    /// Show the current selection's images and highlight its tab.
    async fn render(&self, ctx: &RenderContext<'_>, doc: &mut Document) -> Result<()> {
        let Some(slug) = self.current.as_deref() else {
            doc.set_html(ids::GALLERY, String::new());
            return Ok(());
        };

        let p: Property = load_json(ctx.source, &property_path(slug)?).await?;
        doc.set_html(ids::GALLERY, fragments::gallery_images(&p.gallery));
        doc.set_html(ids::TABS, fragments::tab_strip(&self.slugs, Some(slug)));
        Ok(())
    }
}

/// Gallery page: one tab per property, the first one selected.
pub async fn init_gallery(ctx: &RenderContext<'_>, doc: &mut Document) -> Result<GalleryView> {
    let index: PropertyIndex = load_json(ctx.source, PROPERTY_INDEX_PATH).await?;
    doc.set_html(ids::TABS, fragments::tab_strip(&index.slugs, None));

    let view = GalleryView {
        current: index.slugs.first().cloned(),
        slugs: index.slugs,
    };
    view.render(ctx, doc).await?;
    Ok(view)
}
