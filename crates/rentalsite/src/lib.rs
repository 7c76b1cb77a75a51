// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Rentalsite — renderer for a small vacation-rental site
//!
//! Pages are built from CMS-authored JSON content: a page routine loads the
//! documents it needs, turns fields into HTML fragments and writes them into
//! the page's containers. Layouts then serialize the populated page.
//!
//! ```bash
//! rentalsite render "/properties.html?slug=cliff-house" --content ./site
//! ```

pub mod config;
pub mod content;
pub mod dom;
mod error;
pub mod fragments;
pub mod identity;
pub mod layouts;
pub mod lightbox;
pub mod loader;
pub mod pages;

pub use config::SiteConfig;
pub use dom::Document;
pub use error::{Error, Result};
pub use identity::{Anonymous, GuestUser, IdentityClient, ManualGate, Navigation, SignedIn};
pub use loader::{ContentSource, DirSource, HttpSource, MemorySource, load_json, open_source};
pub use pages::{GalleryView, PageKind, PageRequest, PageState, RenderContext, dispatch};

/// Run the routine for `request` on a fresh shell.
///
/// Returns the populated document even when the routine fails, together
/// with the routine's outcome.
pub async fn render_request(
    ctx: &RenderContext<'_>,
    request: &PageRequest,
) -> (Document, Result<PageState>) {
    let mut doc = request.kind.shell();
    let outcome = dispatch(ctx, request, &mut doc).await;
    (doc, outcome)
}
