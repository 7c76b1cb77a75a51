// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end: content on disk -> routines -> layouts.

use rentalsite::layouts::render_page;
use rentalsite::lightbox;
use rentalsite::pages::ids;
use rentalsite::{
    Anonymous, DirSource, GuestUser, Navigation, PageKind, PageRequest, PageState,
    RenderContext, SignedIn, SiteConfig, render_request,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create content dir");
    }
    fs::write(path, body).expect("write content file");
}

fn content_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "content/site.json", r#"{"siteName": "Ridge Stays"}"#);
    write(
        root,
        "content/home.json",
        r#"{"hero_title": "Ridge Stays", "hero_subtitle": "Cabins on the ridge", "highlights": ["Quiet", "Views"]}"#,
    );
    write(root, "content/properties/index.json", r#"{"slugs": ["ridge-cabin", "creek-hut"]}"#);
    write(
        root,
        "content/properties/ridge-cabin.json",
        r#"{
            "name": "Ridge Cabin",
            "capacity": 2,
            "manual": {"url": "https://docs.example/ridge"},
            "gallery": [
                {"src": "/img/ridge/1.jpg", "alt": "Porch"},
                {"src": "/img/ridge/2.jpg", "alt": "Bed"}
            ]
        }"#,
    );
    write(
        root,
        "content/properties/creek-hut.json",
        r#"{"name": "Creek Hut", "gallery": []}"#,
    );
    dir
}

#[tokio::test]
async fn home_page_renders_from_disk() {
    let dir = content_dir();
    let source = DirSource::new(dir.path());
    let config = SiteConfig::default();
    let ctx = RenderContext::new(&source, &config);

    let request = PageRequest::parse("/").expect("request");
    let (doc, outcome) = render_request(&ctx, &request).await;
    assert_eq!(outcome.expect("home renders"), PageState::None);

    let html = render_page(PageKind::Home, &doc, &config);
    assert!(html.contains("<title>Home — Ridge Stays</title>"));
    assert!(html.contains("<span class=\"badge\">Quiet</span><span class=\"badge\">Views</span>"));
    assert!(html.contains("/properties.html?slug=creek-hut"));
}

#[tokio::test]
async fn property_page_gates_manual() {
    let dir = content_dir();
    let source = DirSource::new(dir.path());
    let config = SiteConfig::default();
    let ctx = RenderContext::new(&source, &config);

    let request = PageRequest::parse("/properties.html?slug=ridge-cabin").expect("request");
    let (doc, outcome) = render_request(&ctx, &request).await;
    let gate = match outcome.expect("property renders") {
        PageState::Property { manual } => manual.expect("manual gate"),
        other => panic!("unexpected state {:?}", other),
    };

    assert_eq!(
        doc.html(ids::GALLERY).expect("gallery").matches("<img ").count(),
        2
    );

    let guest = SignedIn(GuestUser {
        email: "guest@example.com".to_string(),
    });
    assert_eq!(
        gate.on_click(&guest, &config.guest_login_path),
        Navigation::Open("https://docs.example/ridge".to_string())
    );
    assert_eq!(
        gate.on_click(&Anonymous, &config.guest_login_path).href(),
        "/guest.html?next=https%3A%2F%2Fdocs.example%2Fridge"
    );
}

#[tokio::test]
async fn booking_with_unknown_slug_still_renders() {
    let dir = content_dir();
    let source = DirSource::new(dir.path());
    let config = SiteConfig::default();
    let ctx = RenderContext::new(&source, &config);

    let request = PageRequest::parse("/booking.html?slug=nowhere").expect("request");
    let (doc, outcome) = render_request(&ctx, &request).await;
    outcome.expect("booking does not fail");
    assert!(doc.html(ids::BOOKING_HELP).is_none());

    let html = render_page(PageKind::Booking, &doc, &config);
    assert!(html.contains("<option value=\"ridge-cabin\">ridge cabin</option>"));
    assert!(!html.contains(" selected"));
}

#[tokio::test]
async fn gallery_tabs_and_lightbox() {
    let dir = content_dir();
    let source = DirSource::new(dir.path());
    let config = SiteConfig::default();
    let ctx = RenderContext::new(&source, &config);

    let request = PageRequest::parse("/gallery.html").expect("request");
    let (mut doc, outcome) = render_request(&ctx, &request).await;
    let mut view = match outcome.expect("gallery renders") {
        PageState::Gallery(view) => view,
        other => panic!("unexpected state {:?}", other),
    };

    view.on_tab_click(&ctx, &mut doc, "creek-hut").await.expect("tab click");
    assert_eq!(doc.html(ids::GALLERY), Some(""));

    lightbox::open(&mut doc, "/img/ridge/1.jpg");
    assert!(lightbox::is_open(&doc));
    lightbox::handle_key(&mut doc, "Escape");
    assert!(!lightbox::is_open(&doc));
    assert_eq!(doc.attr(lightbox::MODAL_IMG_ID, "src"), Some("/img/ridge/1.jpg"));
}

#[tokio::test]
async fn missing_content_root_fails_required_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = DirSource::new(dir.path());
    let config = SiteConfig::default();
    let ctx = RenderContext::new(&source, &config);

    let request = PageRequest::new(PageKind::Contact);
    let (doc, outcome) = render_request(&ctx, &request).await;
    assert!(matches!(outcome, Err(rentalsite::Error::Load { .. })));
    assert!(doc.html(ids::CONTACT_CARDS).is_none());
}
