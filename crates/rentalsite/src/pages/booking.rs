// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{RenderContext, enrich, ids};
use crate::content::{PROPERTY_INDEX_PATH, Property, PropertyIndex, property_path, slug_label};
use crate::dom::{Document, FormOption};
use crate::error::Result;
use crate::fragments;
use crate::loader::load_json;

/// `name` of the booking form's property select
pub const PROPERTY_FIELD: &str = "property";

/// Booking request form.
///
/// The property select lists every indexed property. A `slug` naming one of
/// them pre-selects it and shows the help panel; any other slug, or a
/// property that fails to load, leaves the form unselected. The routine
/// itself never fails: without an index the options stay empty and the
/// slug's property is loaded directly.
pub async fn init_booking(
    ctx: &RenderContext<'_>,
    slug: Option<&str>,
    doc: &mut Document,
) -> Result<()> {
    let index = enrich(
        "property index",
        load_json::<PropertyIndex>(ctx.source, PROPERTY_INDEX_PATH),
    )
    .await;

    if let Some(index) = &index {
        let options = index
            .slugs
            .iter()
            .map(|s| FormOption {
                value: s.clone(),
                label: slug_label(s),
                selected: false,
            })
            .collect();
        if !doc.set_options(PROPERTY_FIELD, options) {
            diagnostics::log_debug!("Booking page has no {field} field", field: PROPERTY_FIELD);
        }
    }

    let Some(slug) = slug else {
        return Ok(());
    };
    if index.as_ref().is_some_and(|index| !index.contains(slug)) {
        diagnostics::log_debug!("Booking slug {slug} is not a listed property", slug: slug);
        return Ok(());
    }

    let Some(p) = enrich("booked property", load_property(ctx, slug)).await else {
        return Ok(());
    };

    let _ = doc.select_option(PROPERTY_FIELD, slug);
    doc.set_html(ids::BOOKING_HELP, fragments::booking_help(&p.name));
    Ok(())
}

async fn load_property(ctx: &RenderContext<'_>, slug: &str) -> Result<Property> {
    load_json(ctx.source, &property_path(slug)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::dom::Content;
    use crate::loader::MemorySource;
    use crate::pages::{PageKind, fixtures};

    fn selected(doc: &Document) -> Option<String> {
        doc.find_by_name(PROPERTY_FIELD)
            .and_then(|e| e.selected_value())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_known_slug_preselects() {
        let source = fixtures::site();
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, Some("tree-top"), &mut doc).await.expect("booking renders");

        assert_eq!(selected(&doc).as_deref(), Some("tree-top"));
        let help = doc.html(ids::BOOKING_HELP).expect("help");
        assert!(help.contains("<strong>Tree Top Cabin</strong>"));

        let select = doc.find_by_name(PROPERTY_FIELD).expect("select");
        let labels: Vec<_> = select.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["cliff house", "tree top"]);
    }

    #[tokio::test]
    async fn test_unknown_slug_leaves_help_unset() {
        let source = fixtures::site();
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, Some("ghost"), &mut doc).await.expect("does not fail");

        assert_eq!(doc.content(ids::BOOKING_HELP), Some(&Content::Empty));
        assert_eq!(selected(&doc), None);
    }

    #[tokio::test]
    async fn test_indexed_but_missing_property_is_ignored() {
        let source = fixtures::site().with(
            "/content/properties/index.json",
            r#"{"slugs": ["cliff-house", "tree-top", "ghost"]}"#,
        );
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, Some("ghost"), &mut doc).await.expect("does not fail");

        assert_eq!(doc.content(ids::BOOKING_HELP), Some(&Content::Empty));
        assert_eq!(selected(&doc), None);
    }

    #[tokio::test]
    async fn test_no_slug_lists_options_only() {
        let source = fixtures::site();
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, None, &mut doc).await.expect("booking renders");

        let select = doc.find_by_name(PROPERTY_FIELD).expect("select");
        assert_eq!(select.options.len(), 2);
        assert_eq!(selected(&doc), None);
    }

    #[tokio::test]
    async fn test_missing_index_still_shows_help() {
        let source = MemorySource::new()
            .with("/content/properties/cliff-house.json", fixtures::CLIFF_HOUSE);
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, Some("cliff-house"), &mut doc)
            .await
            .expect("booking does not fail without an index");

        let help = doc.html(ids::BOOKING_HELP).expect("help");
        assert!(help.contains("<strong>Cliff House</strong>"));
        let select = doc.find_by_name(PROPERTY_FIELD).expect("select");
        assert!(select.options.is_empty());
    }

    #[tokio::test]
    async fn test_broken_index_without_slug_is_not_an_error() {
        let source = fixtures::site().with(PROPERTY_INDEX_PATH, "not json");
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Booking.shell();

        init_booking(&ctx, None, &mut doc).await.expect("booking does not fail");
        assert_eq!(doc.content(ids::BOOKING_HELP), Some(&Content::Empty));
    }
}
