// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::{RenderContext, ids};
use crate::content::{
    HOME_PATH, HomeContent, PROPERTY_INDEX_PATH, Property, PropertyIndex, SITE_PATH, SiteSettings,
    property_path,
};
use crate::dom::Document;
use crate::error::Result;
use crate::fragments;
use crate::loader::load_json;

/// Home page: brand, hero, highlight badges and one card per property.
pub async fn init_home(ctx: &RenderContext<'_>, doc: &mut Document) -> Result<()> {
    let site: SiteSettings = load_json(ctx.source, SITE_PATH).await?;
    let home: HomeContent = load_json(ctx.source, HOME_PATH).await?;

    doc.set_text(ids::BRAND_NAME, &site.site_name);
    doc.set_text(ids::HERO_TITLE, &home.hero_title);
    doc.set_text(ids::HERO_SUB, &home.hero_subtitle);
    doc.set_html(ids::HERO_BADGES, fragments::badges(&home.highlights));

    // Cards are sequential: index first, then each property in index order
    let index: PropertyIndex = load_json(ctx.source, PROPERTY_INDEX_PATH).await?;
    let mut cards = String::new();
    for slug in &index.slugs {
        let property: Property = load_json(ctx.source, &property_path(slug)?).await?;
        cards.push_str(&fragments::property_card(
            slug,
            &property,
            ctx.config.card_feature_limit,
        ));
    }
    doc.set_html(ids::PROPERTY_CARDS, cards);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::pages::{PageKind, fixtures};

    #[tokio::test]
    async fn test_home_populates_hero_and_badges() {
        let source = fixtures::site();
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Home.shell();

        init_home(&ctx, &mut doc).await.expect("home renders");

        assert_eq!(doc.text(ids::BRAND_NAME), Some("Blue Mountains Stays"));
        assert_eq!(doc.text(ids::HERO_TITLE), Some("Stay above the clouds"));
        assert_eq!(doc.text(ids::HERO_SUB), Some("Smart homes in the Blue Mountains"));
        assert_eq!(
            doc.html(ids::HERO_BADGES),
            Some(
                "<span class=\"badge\">Valley views</span>\
                 <span class=\"badge\">Self check-in</span>\
                 <span class=\"badge\">Pet friendly</span>"
            )
        );
    }

    #[tokio::test]
    async fn test_home_cards_follow_index_order() {
        let source = fixtures::site();
        let config = SiteConfig {
            card_feature_limit: 2,
            ..SiteConfig::default()
        };
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Home.shell();

        init_home(&ctx, &mut doc).await.expect("home renders");

        let cards = doc.html(ids::PROPERTY_CARDS).expect("cards");
        assert_eq!(cards.matches("class=\"card\"").count(), 2);
        let cliff = cards.find("Cliff House").expect("cliff card");
        let tree = cards.find("Tree Top Cabin").expect("tree card");
        assert!(cliff < tree);
        assert!(cards.contains("Smart lock"));
        assert!(!cards.contains("Heated floors"));
        assert!(cards.contains("href=\"/properties.html?slug=tree-top\""));
    }

    #[tokio::test]
    async fn test_home_missing_property_fails() {
        let source = fixtures::site().with(
            "/content/properties/index.json",
            r#"{"slugs": ["cliff-house", "ghost"]}"#,
        );
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&source, &config);
        let mut doc = PageKind::Home.shell();

        let result = init_home(&ctx, &mut doc).await;
        assert!(result.is_err());
        assert_eq!(doc.text(ids::BRAND_NAME), Some("Blue Mountains Stays"));
        assert!(doc.html(ids::PROPERTY_CARDS).is_none());
    }
}
